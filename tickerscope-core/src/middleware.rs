//! Middleware trait for wrapping `ScopeConnector` implementations.

use std::sync::Arc;

use crate::connector::ScopeConnector;

/// Trait implemented by connector middleware layers.
///
/// A middleware consumes an inner connector and returns a wrapped connector
/// that augments its behavior (e.g., memoization).
pub trait Middleware: Send + Sync {
    /// Wrap `inner` and return the wrapped connector.
    fn apply(self: Box<Self>, inner: Arc<dyn ScopeConnector>) -> Arc<dyn ScopeConnector>;

    /// Middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Configuration snapshot for introspection.
    fn config_json(&self) -> serde_json::Value;
}
