use async_trait::async_trait;

use crate::{HistoryRequest, NewsItem, NewsRequest, PriceRow, ScopeError, Ticker};
pub use tickerscope_types::ConnectorKey;

/// Focused role trait for connectors that provide OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch price rows for `ticker` over the request's inclusive range.
    ///
    /// An unknown ticker or a range without trading days yields `Ok(vec![])`.
    /// Rows are ascending by timestamp.
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<Vec<PriceRow>, ScopeError>;
}

/// Focused role trait for connectors that provide news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch the headlines for `ticker` published on `req.on`, newest first.
    ///
    /// Providers that only expose a rolling feed reduce it with
    /// [`crate::timeseries::news::published_on`].
    async fn news(&self, ticker: &Ticker, req: NewsRequest) -> Result<Vec<NewsItem>, ScopeError>;
}

/// A market-data source, advertising its capabilities through role accessors.
pub trait ScopeConnector: Send + Sync {
    /// A stable identifier (e.g., "tickerscope-yfinance").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Advertise news capability by returning a usable trait object reference when supported.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
}

/// Generate `as_*_provider` accessors for a wrapper that implements
/// `ScopeConnector` by delegating to an inner field.
///
/// The wrapper must itself implement every role trait; a role is only
/// advertised when the inner connector advertises it.
#[macro_export]
macro_rules! scope_connector_accessors {
    ($inner:ident) => {
        fn as_history_provider(&self) -> Option<&dyn $crate::connector::HistoryProvider> {
            if self.$inner.as_history_provider().is_some() {
                Some(self as &dyn $crate::connector::HistoryProvider)
            } else {
                None
            }
        }
        fn as_news_provider(&self) -> Option<&dyn $crate::connector::NewsProvider> {
            if self.$inner.as_news_provider().is_some() {
                Some(self as &dyn $crate::connector::NewsProvider)
            } else {
                None
            }
        }
    };
}
