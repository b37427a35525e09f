use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use tickerscope_core::connector::{HistoryProvider, NewsProvider, ScopeConnector};
use tickerscope_core::{HistoryRequest, NewsItem, NewsRequest, PriceRow, ScopeError, Ticker};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(ScopeError),
    /// Hang indefinitely (simulate a stalled provider).
    Hang,
}

#[derive(Default)]
struct InternalState {
    history_rules: HashMap<Ticker, MockBehavior<Vec<PriceRow>>>,
    news_rules: HashMap<Ticker, MockBehavior<Vec<NewsItem>>>,
    history_calls: Vec<(Ticker, HistoryRequest)>,
    news_calls: Vec<(Ticker, NewsRequest)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `history` calls for a specific ticker.
    pub async fn set_history_behavior(
        &self,
        ticker: Ticker,
        behavior: MockBehavior<Vec<PriceRow>>,
    ) {
        let mut guard = self.state.lock().await;
        guard.history_rules.insert(ticker, behavior);
    }

    /// Set the behavior for `news` calls for a specific ticker.
    pub async fn set_news_behavior(&self, ticker: Ticker, behavior: MockBehavior<Vec<NewsItem>>) {
        let mut guard = self.state.lock().await;
        guard.news_rules.insert(ticker, behavior);
    }

    /// Every `history` call received so far, in order.
    pub async fn history_calls(&self) -> Vec<(Ticker, HistoryRequest)> {
        self.state.lock().await.history_calls.clone()
    }

    /// Every `news` call received so far, in order.
    pub async fn news_calls(&self) -> Vec<(Ticker, NewsRequest)> {
        self.state.lock().await.news_calls.clone()
    }

    /// Clear all configured behaviors and call logs.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.history_rules.clear();
        guard.news_rules.clear();
        guard.history_calls.clear();
        guard.news_calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Tickers without a configured rule answer with an empty result.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn ScopeConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn ScopeConnector>, controller)
    }
}

impl ScopeConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for DynamicMockConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<Vec<PriceRow>, ScopeError> {
        // Log and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.history_calls.push((ticker.clone(), req));
            guard.history_rules.get(ticker).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(rows)) => Ok(rows),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(vec![]),
        }
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, ticker: &Ticker, req: NewsRequest) -> Result<Vec<NewsItem>, ScopeError> {
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.news_calls.push((ticker.clone(), req));
            guard.news_rules.get(ticker).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(items)) => Ok(items),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Ok(vec![]),
        }
    }
}
