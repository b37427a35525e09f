use std::sync::Arc;

use async_trait::async_trait;

use tickerscope_core::ScopeError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const CONNECTOR: &str = "tickerscope-yfinance";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    ///
    /// A symbol the provider does not know yields an empty response.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, ScopeError>;
}

/// News abstraction for fetching the rolling feed.
#[async_trait]
pub trait YfNews: Send + Sync {
    /// Fetch up to `count` articles of the feed for `symbol`.
    async fn news(&self, symbol: &str, count: u32)
    -> Result<Vec<yf::news::NewsArticle>, ScopeError>;
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` over a cookie-keeping `reqwest` client with a browser user agent.
    ///
    /// # Errors
    /// Returns a connector error if either client cannot be constructed.
    pub fn try_new_default() -> Result<Self, ScopeError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| ScopeError::connector(CONNECTOR, e.to_string()))?;
        Self::try_with_reqwest_client(http)
    }

    /// Build a `YfClient` over a caller-provided `reqwest::Client`.
    ///
    /// Timeouts, proxies and the like are configured on `http`. It should keep
    /// a cookie store for the consent and crumb handshake.
    ///
    /// # Errors
    /// Returns a connector error if the `YfClient` cannot be constructed.
    pub fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, ScopeError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScopeError::connector(CONNECTOR, e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> ScopeError {
    match e {
        yf::YfError::RateLimited { .. } => {
            ScopeError::connector(CONNECTOR, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            ScopeError::connector(CONNECTOR, format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            ScopeError::connector(CONNECTOR, format!("status {status}: {context}"))
        }
        other => ScopeError::connector(CONNECTOR, format!("{context}: {other}")),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, ScopeError> {
        match self.client.fetch_full_history(symbol, req).await {
            Ok(resp) => Ok(resp),
            Err(yf::YfError::NotFound { .. }) => Ok(yf::HistoryResponse {
                candles: vec![],
                actions: vec![],
                adjusted: false,
                meta: None,
                provider: (),
            }),
            Err(e) => Err(map_yf_err(&e, &format!("history for {symbol}"))),
        }
    }
}

#[async_trait]
impl YfNews for RealAdapter {
    async fn news(
        &self,
        symbol: &str,
        count: u32,
    ) -> Result<Vec<yf::news::NewsArticle>, ScopeError> {
        let nb = yf::news::NewsBuilder::new(&self.client, symbol)
            .count(count)
            .tab(yf::news::NewsTab::News);
        match nb.fetch().await {
            Ok(articles) => Ok(articles),
            Err(yf::YfError::NotFound { .. }) => Ok(vec![]),
            Err(e) => Err(map_yf_err(&e, &format!("news for {symbol}"))),
        }
    }
}

/* -------- Lightweight adapter constructors for injection ------- */

impl dyn YfHistory {
    /// Build a `YfHistory` from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, ScopeError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, ScopeError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, ScopeError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

impl dyn YfNews {
    /// Build a `YfNews` from a closure.
    pub fn from_fn<F>(f: F) -> Arc<dyn YfNews>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, u32) -> Result<Vec<yf::news::NewsArticle>, ScopeError>,
    {
        struct FnNews<F>(F);
        #[async_trait]
        impl<F> YfNews for FnNews<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, u32) -> Result<Vec<yf::news::NewsArticle>, ScopeError>,
        {
            async fn news(
                &self,
                symbol: &str,
                count: u32,
            ) -> Result<Vec<yf::news::NewsArticle>, ScopeError> {
                (self.0)(symbol.to_string(), count)
            }
        }
        Arc::new(FnNews(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
///
/// Unimplemented roles default to adapters that answer `Unsupported`.
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(ScopeError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfNews>`.
    fn clone_arc_news(&self) -> Arc<dyn YfNews> {
        <dyn YfNews>::from_fn(|_, _| Err(ScopeError::unsupported("news")))
    }
}

impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_news(&self) -> Arc<dyn YfNews> {
        Arc::new(self.clone()) as Arc<dyn YfNews>
    }
}
