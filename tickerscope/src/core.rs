use std::sync::Arc;

use chrono::NaiveDate;
use tickerscope_core::{CacheConfig, ExplorerConfig, ScopeConnector, ScopeError, Tz};
use tickerscope_middleware::ConnectorBuilder;

use crate::{Dashboard, Filters, NewsFetcher, PriceFetcher, PriceTable};

/// Runs the price-then-news flow over one memoized connector.
pub struct Explorer {
    connector: Arc<dyn ScopeConnector>,
    prices: PriceFetcher,
    news: NewsFetcher,
    cfg: ExplorerConfig,
}

/// Builder for constructing an [`Explorer`].
pub struct ExplorerBuilder {
    connector: Option<Arc<dyn ScopeConnector>>,
    cfg: ExplorerConfig,
}

impl Default for ExplorerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerBuilder {
    /// Create a builder with default configuration: process-lifetime memoization,
    /// news read in UTC, a feed of 20 items.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: ExplorerConfig::default(),
        }
    }

    /// Register the raw (unwrapped) provider connector. A later call replaces it.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn ScopeConnector>) -> Self {
        self.connector = Some(c);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ExplorerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the memoization settings.
    #[must_use]
    pub fn cache(mut self, cache: CacheConfig) -> Self {
        self.cfg.cache = cache;
        self
    }

    /// Zone in which news publish times are read.
    #[must_use]
    pub fn news_tz(mut self, tz: Tz) -> Self {
        self.cfg.news_tz = tz;
        self
    }

    /// Number of feed items requested per news fetch.
    #[must_use]
    pub fn news_count(mut self, count: u32) -> Self {
        self.cfg.news_count = count;
        self
    }

    /// Build the explorer, wrapping the connector in the cache layer.
    ///
    /// # Errors
    /// - `InvalidArg` if no connector was registered or the news count is zero.
    /// - `Unsupported` if the connector lacks the history or news role.
    /// - `InvalidMiddlewareStack` if the layer composition is rejected.
    pub fn build(self) -> Result<Explorer, ScopeError> {
        let raw = self.connector.ok_or_else(|| {
            ScopeError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            )
        })?;
        if raw.as_history_provider().is_none() {
            return Err(ScopeError::unsupported("history"));
        }
        if raw.as_news_provider().is_none() {
            return Err(ScopeError::unsupported("news"));
        }
        if self.cfg.news_count == 0 {
            return Err(ScopeError::InvalidArg(
                "news_count must be at least 1".to_string(),
            ));
        }

        let connector = ConnectorBuilder::new(raw)
            .with_cache(&self.cfg.cache)
            .build()?;
        Ok(Explorer {
            prices: PriceFetcher::new(Arc::clone(&connector)),
            news: NewsFetcher::new(
                Arc::clone(&connector),
                self.cfg.news_tz,
                self.cfg.news_count,
            ),
            connector,
            cfg: self.cfg,
        })
    }
}

impl Explorer {
    /// Start building a new `Explorer`.
    #[must_use]
    pub fn builder() -> ExplorerBuilder {
        ExplorerBuilder::new()
    }

    /// Price fetcher sharing this explorer's cache.
    #[must_use]
    pub const fn prices(&self) -> &PriceFetcher {
        &self.prices
    }

    /// News fetcher sharing this explorer's cache.
    #[must_use]
    pub const fn news(&self) -> &NewsFetcher {
        &self.news
    }

    /// The memoized connector both fetchers use.
    #[must_use]
    pub fn connector(&self) -> Arc<dyn ScopeConnector> {
        Arc::clone(&self.connector)
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &ExplorerConfig {
        &self.cfg
    }

    /// Fetch prices for `filters`, then, if any were found, the headlines
    /// published on `today`.
    ///
    /// # Errors
    /// Provider failures from either fetch. An empty price table is not an
    /// error; it yields [`Dashboard::NoPriceData`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickerscope::explorer::load",
            skip(self, filters),
            fields(
                ticker = %filters.ticker(),
                start = %filters.range().start(),
                end = %filters.range().end(),
                interval = %filters.interval(),
                today = %today,
            ),
        )
    )]
    pub async fn load(&self, filters: &Filters, today: NaiveDate) -> Result<Dashboard, ScopeError> {
        let req = tickerscope_core::HistoryRequest::new(filters.range(), filters.interval());
        let rows = self.prices.fetch_request(filters.ticker(), req).await?;
        let Some(prices) = PriceTable::new(rows) else {
            #[cfg(feature = "tracing")]
            tracing::info!(ticker = %filters.ticker(), "no price data; skipping news");
            return Ok(Dashboard::NoPriceData {
                filters: filters.clone(),
            });
        };
        let news = self.news.fetch_for(filters.ticker(), today).await?;
        Ok(Dashboard::Ready {
            filters: filters.clone(),
            prices,
            news,
        })
    }
}
