use std::sync::Arc;

use tickerscope_core::{CacheConfig, ScopeConnector, ScopeError};
use tickerscope_middleware::ConnectorBuilder as GenericConnectorBuilder;

use crate::YfConnector;

/// Builder type alias specialized for yfinance connectors.
pub type YfConnectorBuilder = GenericConnectorBuilder;

impl YfConnector {
    /// Returns an unconfigured builder with the default connector.
    ///
    /// Customize with the builder methods before calling `.build()`.
    ///
    /// # Errors
    /// Returns a connector error if the default client cannot be constructed.
    pub fn builder() -> Result<YfConnectorBuilder, ScopeError> {
        let raw: Arc<dyn ScopeConnector> = Arc::new(Self::try_new_default()?);
        Ok(GenericConnectorBuilder::new(raw))
    }

    /// Returns a builder with process-lifetime memoization of history and news.
    ///
    /// # Errors
    /// Returns a connector error if the default client cannot be constructed.
    pub fn memoized() -> Result<YfConnectorBuilder, ScopeError> {
        Ok(Self::builder()?.with_cache(&CacheConfig::default()))
    }
}
