use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tickerscope_core::connector::{HistoryProvider, NewsProvider};
use tickerscope_core::{
    CacheConfig, Capability, HistoryRequest, NewsItem, NewsRequest, PriceRow, ScopeConnector,
    ScopeError, Ticker,
};

/// Memo key for history: the full argument tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HistoryKey {
    ticker: Ticker,
    req: HistoryRequest,
}

/// Memo key for news: ticker plus reference date, zone and feed size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct NewsKey {
    ticker: Ticker,
    req: NewsRequest,
}

#[async_trait]
trait CacheStore<K, V>: Send + Sync {
    async fn get(&self, key: &K) -> Option<V>;
    async fn put(&self, key: K, value: V);
}

struct MokaStore<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: moka::future::Cache<K, V>,
}

impl<K, V> MokaStore<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn new(capacity: Option<u64>, ttl: Option<Duration>) -> Self {
        let mut builder = moka::future::Cache::builder();
        if let Some(cap) = capacity {
            builder = builder.max_capacity(cap);
        }
        if let Some(ttl) = ttl {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
        }
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for MokaStore<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }
    async fn put(&self, key: K, value: V) {
        self.inner.insert(key, value).await;
    }
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Name under which the layer appears in a middleware stack.
    pub const NAME: &'static str = "CacheMiddleware";

    /// Create the layer from a cache configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl tickerscope_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn ScopeConnector>) -> Arc<dyn ScopeConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "enabled": self.cfg.enabled,
            "default_ttl_ms": self.cfg.default_ttl_ms,
            "default_max_entries": self.cfg.default_max_entries,
            "per_capability_ttl_ms": self.cfg.per_capability_ttl_ms,
            "per_capability_max_entries": self.cfg.per_capability_max_entries,
        })
    }
}

// Per-capability typed stores; `None` means disabled (e.g., TTL=0).
struct Stores {
    history: Option<Arc<dyn CacheStore<HistoryKey, Arc<Vec<PriceRow>>>>>,
    news: Option<Arc<dyn CacheStore<NewsKey, Arc<Vec<NewsItem>>>>>,
}

/// Connector wrapper that memoizes successful results of the inner connector.
///
/// Every distinct argument tuple is fetched once and then served from memory.
/// Empty results are stored like any other value; errors are never stored, so
/// a failed lookup is retried on the next call.
pub struct CachingConnector {
    inner: Arc<dyn ScopeConnector>,
    stores: Stores,
}

impl CachingConnector {
    fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Arc<dyn CacheStore<K, V>>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        if !cfg.is_enabled_for(cap) {
            return None;
        }
        let store = MokaStore::<K, V>::new(cfg.capacity_for(cap), cfg.ttl_for(cap));
        Some(Arc::new(store))
    }

    /// Wrap `inner`, building one store per capability enabled in `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn ScopeConnector>, cfg: &CacheConfig) -> Self {
        let stores = Stores {
            history: Self::maybe_store(cfg, Capability::History),
            news: Self::maybe_store(cfg, Capability::News),
        };
        Self { inner, stores }
    }

    /// Whether results of `cap` are memoized by this wrapper.
    #[must_use]
    pub const fn caches(&self, cap: Capability) -> bool {
        match cap {
            Capability::History => self.stores.history.is_some(),
            Capability::News => self.stores.news.is_some(),
        }
    }
}

impl ScopeConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    tickerscope_core::scope_connector_accessors!(inner);
}

#[async_trait]
impl HistoryProvider for CachingConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<Vec<PriceRow>, ScopeError> {
        let inner = self
            .inner
            .as_history_provider()
            .ok_or_else(|| ScopeError::unsupported("history"))?;
        let Some(store) = &self.stores.history else {
            return inner.history(ticker, req).await;
        };
        let key = HistoryKey {
            ticker: ticker.clone(),
            req,
        };
        if let Some(v) = store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "tickerscope::cache",
                ticker = %ticker,
                rows = v.len(),
                "history cache hit"
            );
            return Ok((*v).clone());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "tickerscope::cache", ticker = %ticker, "history cache miss");
        let value = inner.history(ticker, req).await?;
        store.put(key, Arc::new(value.clone())).await;
        Ok(value)
    }
}

#[async_trait]
impl NewsProvider for CachingConnector {
    async fn news(&self, ticker: &Ticker, req: NewsRequest) -> Result<Vec<NewsItem>, ScopeError> {
        let inner = self
            .inner
            .as_news_provider()
            .ok_or_else(|| ScopeError::unsupported("news"))?;
        let Some(store) = &self.stores.news else {
            return inner.news(ticker, req).await;
        };
        let key = NewsKey {
            ticker: ticker.clone(),
            req,
        };
        if let Some(v) = store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                target: "tickerscope::cache",
                ticker = %ticker,
                on = %req.on,
                "news cache hit"
            );
            return Ok((*v).clone());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "tickerscope::cache",
            ticker = %ticker,
            on = %req.on,
            "news cache miss"
        );
        let value = inner.news(ticker, req).await?;
        store.put(key, Arc::new(value.clone())).await;
        Ok(value)
    }
}
