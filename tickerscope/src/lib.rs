//! Tickerscope explores one stock ticker at a time.
//!
//! Overview
//! - [`Filters`] holds the validated inputs: ticker, inclusive date range, interval.
//! - [`PriceFetcher`] returns the OHLCV table for those filters.
//! - [`NewsFetcher`] returns the headlines published on a reference date, newest first.
//! - [`Explorer`] owns both fetchers over one memoized connector and runs the
//!   dashboard flow: prices first, then news only when prices were found.
//!
//! Both fetchers are memoized by their full argument tuple for the lifetime of
//! the process (see [`CacheConfig`] for the opt-in TTL and capacity knobs).
//! Failed fetches are never memoized.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use tickerscope::{Explorer, Filters};
//!
//! let explorer = Explorer::builder()
//!     .with_connector(Arc::new(tickerscope_yfinance::YfConnector::try_new_default()?))
//!     .build()?;
//! let today = chrono::Utc::now().date_naive();
//! let dashboard = explorer.load(&Filters::defaults(today), today).await?;
//! println!("{}", dashboard.headline());
//! ```
#![warn(missing_docs)]

mod core;
mod dashboard;
mod fetch;
mod filters;

pub use crate::core::{Explorer, ExplorerBuilder};
pub use crate::dashboard::{Dashboard, PriceTable};
pub use crate::fetch::{NewsFetcher, PriceFetcher};
pub use crate::filters::Filters;

pub use tickerscope_core::{
    CacheConfig, Capability, DateRange, ExplorerConfig, Interval, NewsItem, PriceRow,
    ScopeConnector, ScopeError, Ticker, Tz,
};
