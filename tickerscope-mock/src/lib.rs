//! tickerscope-mock
//!
//! Connectors that never touch the network:
//!
//! - [`MockConnector`]: deterministic fixtures for CI-safe demos and tests.
//! - [`DynamicMockConnector`]: behavior scripted per ticker from a test, with a call log.
use async_trait::async_trait;
use tickerscope_core::connector::{HistoryProvider, NewsProvider, ScopeConnector};
use tickerscope_core::{HistoryRequest, NewsItem, NewsRequest, PriceRow, ScopeError, Ticker};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::news::FEED_DATE;

/// Mock connector for CI-safe examples. Provides deterministic data from fixtures.
///
/// - `AAPL`, `MSFT`, `GOOG`: synthetic weekday series for any range, aggregated
///   to weekly or monthly bars on request.
/// - Any other symbol (e.g. `ZZZZINVALID`): empty table and empty feed.
/// - `FAIL`: every call returns a connector error.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the mock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn maybe_fail(ticker: &Ticker, capability: &'static str) -> Result<(), ScopeError> {
        if ticker.as_str() == "FAIL" {
            return Err(ScopeError::connector(
                "tickerscope-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl ScopeConnector for MockConnector {
    fn name(&self) -> &'static str {
        "tickerscope-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<Vec<PriceRow>, ScopeError> {
        Self::maybe_fail(ticker, "history")?;
        Ok(fixtures::history::by_symbol(ticker.as_str(), &req))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &Ticker, req: NewsRequest) -> Result<Vec<NewsItem>, ScopeError> {
        Self::maybe_fail(ticker, "news")?;
        Ok(fixtures::news::by_symbol(ticker.as_str(), &req))
    }
}
