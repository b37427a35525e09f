use std::sync::Arc;

use async_trait::async_trait;
use tickerscope_core::connector::{HistoryProvider, NewsProvider};
use tickerscope_core::{
    HistoryRequest, NewsItem, NewsRequest, PriceRow, ScopeConnector, ScopeError, Ticker,
};

struct HistoryOnly;

impl ScopeConnector for HistoryOnly {
    fn name(&self) -> &'static str {
        "history-only"
    }
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
}

#[async_trait]
impl HistoryProvider for HistoryOnly {
    async fn history(&self, _t: &Ticker, _r: HistoryRequest) -> Result<Vec<PriceRow>, ScopeError> {
        Ok(vec![])
    }
}

struct Wrapper {
    inner: Arc<dyn ScopeConnector>,
}

impl ScopeConnector for Wrapper {
    fn name(&self) -> &'static str {
        "wrapper"
    }
    tickerscope_core::scope_connector_accessors!(inner);
}

#[async_trait]
impl HistoryProvider for Wrapper {
    async fn history(&self, t: &Ticker, r: HistoryRequest) -> Result<Vec<PriceRow>, ScopeError> {
        self.inner
            .as_history_provider()
            .ok_or_else(|| ScopeError::unsupported("history"))?
            .history(t, r)
            .await
    }
}

#[async_trait]
impl NewsProvider for Wrapper {
    async fn news(&self, t: &Ticker, r: NewsRequest) -> Result<Vec<NewsItem>, ScopeError> {
        self.inner
            .as_news_provider()
            .ok_or_else(|| ScopeError::unsupported("news"))?
            .news(t, r)
            .await
    }
}

#[test]
fn wrapper_advertises_only_inner_capabilities() {
    let w = Wrapper {
        inner: Arc::new(HistoryOnly),
    };
    assert!(w.as_history_provider().is_some());
    assert!(w.as_news_provider().is_none());
    assert_eq!(w.key().as_str(), "wrapper");
    assert_eq!(w.vendor(), "unknown");
}
