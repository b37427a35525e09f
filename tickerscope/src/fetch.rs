use std::sync::Arc;

use chrono::NaiveDate;
use tickerscope_core::{
    DateRange, HistoryRequest, Interval, NewsItem, NewsRequest, PriceRow, ScopeConnector,
    ScopeError, Ticker, Tz,
};

/// Price-history facade over a (memoized) connector.
#[derive(Clone)]
pub struct PriceFetcher {
    connector: Arc<dyn ScopeConnector>,
}

impl PriceFetcher {
    /// Wrap a connector that advertises the history role.
    #[must_use]
    pub fn new(connector: Arc<dyn ScopeConnector>) -> Self {
        Self { connector }
    }

    /// OHLCV rows for `ticker` between `start` and `end` inclusive, ascending.
    ///
    /// Inputs are validated before anything is fetched. An unknown ticker or
    /// a range without trading periods yields an empty table.
    ///
    /// # Errors
    /// - `InvalidArg` for a malformed ticker.
    /// - `InvalidDateRange` when `start > end`.
    /// - `Connector` when the provider fails.
    pub async fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<PriceRow>, ScopeError> {
        let ticker = Ticker::new(ticker)?;
        let range = DateRange::new(start, end)?;
        self.fetch_request(&ticker, HistoryRequest::new(range, interval))
            .await
    }

    /// Same as [`Self::fetch`] for already-validated inputs.
    ///
    /// # Errors
    /// `Connector` or `Unsupported` from the underlying connector.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerscope::prices::fetch",
            skip(self, req),
            fields(
                ticker = %ticker,
                start = %req.range().start(),
                end = %req.range().end(),
                interval = %req.interval(),
            ),
        )
    )]
    pub async fn fetch_request(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<Vec<PriceRow>, ScopeError> {
        let provider = self
            .connector
            .as_history_provider()
            .ok_or_else(|| ScopeError::unsupported("history"))?;
        provider.history(ticker, req).await
    }
}

/// Same-day news facade over a (memoized) connector.
#[derive(Clone)]
pub struct NewsFetcher {
    connector: Arc<dyn ScopeConnector>,
    tz: Tz,
    count: u32,
}

impl NewsFetcher {
    /// Wrap a connector that advertises the news role.
    ///
    /// Publish times are read in `tz`; `count` feed items are requested.
    #[must_use]
    pub fn new(connector: Arc<dyn ScopeConnector>, tz: Tz, count: u32) -> Self {
        Self {
            connector,
            tz,
            count,
        }
    }

    /// Headlines for `ticker` published on `on`, newest first. Empty is normal.
    ///
    /// # Errors
    /// - `InvalidArg` for a malformed ticker.
    /// - `Connector` when the provider fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerscope::news::fetch",
            skip(self),
            fields(tz = %self.tz),
        )
    )]
    pub async fn fetch(&self, ticker: &str, on: NaiveDate) -> Result<Vec<NewsItem>, ScopeError> {
        let ticker = Ticker::new(ticker)?;
        self.fetch_for(&ticker, on).await
    }

    pub(crate) async fn fetch_for(
        &self,
        ticker: &Ticker,
        on: NaiveDate,
    ) -> Result<Vec<NewsItem>, ScopeError> {
        let provider = self
            .connector
            .as_news_provider()
            .ok_or_else(|| ScopeError::unsupported("news"))?;
        let req = NewsRequest::on(on).with_tz(self.tz).with_count(self.count);
        provider.news(ticker, req).await
    }
}
