//! tickerscope-yfinance
//!
//! Connector that implements `ScopeConnector` using the `yfinance-rs`
//! client library: chart history for the price table and the rolling news
//! feed for same-day headlines.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;
mod builder;
mod convert;

pub use builder::YfConnectorBuilder;

use std::sync::Arc;

use adapter::{CloneArcAdapters, RealAdapter, YfHistory, YfNews};
use async_trait::async_trait;
use tickerscope_core::{
    HistoryRequest, NewsItem, NewsRequest, PriceRow, ScopeError, Ticker,
    connector::{ConnectorKey, HistoryProvider, NewsProvider, ScopeConnector},
    normalize_rows, published_on,
};

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: Arc<dyn YfHistory>,
    news: Arc<dyn YfNews>,
}

impl YfConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("tickerscope-yfinance");

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns a connector error if the HTTP client cannot be constructed.
    pub fn try_new_default() -> Result<Self, ScopeError> {
        Ok(Self::from_adapter(&RealAdapter::try_new_default()?))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        Self::from_adapter(&RealAdapter::new(client))
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: the provided client should enable a cookie store for the auth/crumb flow.
    /// Request timeouts are configured on it.
    ///
    /// # Errors
    /// Returns a connector error if the `YfClient` cannot be built over `http`.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, ScopeError> {
        Ok(Self::from_adapter(&RealAdapter::try_with_reqwest_client(http)?))
    }

    /// Build from any adapter bundle.
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            news: adapter.clone_arc_news(),
        }
    }

    /// Build from individually injected role adapters.
    #[must_use]
    pub fn from_adapters(history: Arc<dyn YfHistory>, news: Arc<dyn YfNews>) -> Self {
        Self { history, news }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerscope_yfinance::history",
            skip(self, req),
            fields(
                ticker = %ticker,
                start = %req.range().start(),
                end = %req.range().end(),
                interval = %req.interval(),
            ),
        )
    )]
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<Vec<PriceRow>, ScopeError> {
        let raw = self
            .history
            .fetch_full(ticker.as_str(), convert::yf_request(&req))
            .await?;
        Ok(normalize_rows(convert::price_rows(&raw, &req)))
    }
}

#[async_trait]
impl NewsProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerscope_yfinance::news",
            skip(self, req),
            fields(ticker = %ticker, on = %req.on, tz = %req.tz),
        )
    )]
    async fn news(&self, ticker: &Ticker, req: NewsRequest) -> Result<Vec<NewsItem>, ScopeError> {
        let articles = self.news.news(ticker.as_str(), req.count).await?;
        Ok(published_on(
            articles.into_iter().map(convert::feed_headline),
            &req,
        ))
    }
}

impl ScopeConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}
