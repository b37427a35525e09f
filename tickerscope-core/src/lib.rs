//! tickerscope-core
//!
//! Domain types, connector traits, and helpers shared across the tickerscope crates.
//!
//! - domain: `Ticker`, `DateRange`, `Interval`, `PriceRow`, `NewsItem` and the
//!   request types that connectors receive.
//! - `connector`: the `ScopeConnector` trait and its capability role traits.
//! - `middleware`: the trait implemented by connector wrappers.
//! - `timeseries`: price ordering and the feed-to-day news reduction.
#![warn(missing_docs)]

/// Connector capability traits and the primary `ScopeConnector` interface.
pub mod connector;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Series helpers for prices and news.
pub mod timeseries;

mod history;
mod interval;
mod news;
mod range;
mod ticker;

pub use connector::ScopeConnector;
pub use history::{HistoryRequest, PriceRow};
pub use interval::Interval;
pub use middleware::Middleware;
pub use news::{FeedHeadline, NewsItem, NewsRequest};
pub use range::DateRange;
pub use ticker::Ticker;
pub use timeseries::news::{local_publish_time, published_on};
pub use timeseries::prices::{is_strictly_increasing, normalize_rows};

pub use tickerscope_types::{
    CacheConfig, Capability, ConnectorKey, ExplorerConfig, MiddlewareLayer, MiddlewareStack,
    ScopeError,
};
pub use chrono_tz::Tz;
