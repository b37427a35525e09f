//! Builder for composing connectors with middleware layers.
//!
//! Layers form an "onion" around the raw connector. The `layers` vector is
//! kept **outermost-first** (last added = outermost) and applied in reverse
//! during [`ConnectorBuilder::build`], so `[A, B]` yields `A(B(raw))`.
//!
//! This matches [`MiddlewareStack`], where `layers[0]` is the outermost layer.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::json;
use tickerscope_core::{
    CacheConfig, Middleware, MiddlewareLayer, MiddlewareStack, ScopeConnector, ScopeError,
};

use crate::cache::CacheMiddleware;

/// Generic middleware builder for composing a connector with layered wrappers.
pub struct ConnectorBuilder {
    raw: Arc<dyn ScopeConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn ScopeConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace the memoization layer.
    ///
    /// The cache sits at the outermost position so hits never reach inner layers.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CacheMiddleware::NAME);
        self.layers
            .insert(0, Box::new(CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Remove the memoization layer if present.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CacheMiddleware::NAME);
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Export the current middleware stack for inspection.
    ///
    /// The raw connector is appended as the innermost "layer" for observability.
    #[must_use]
    pub fn to_stack(&self) -> MiddlewareStack {
        let mut stack = MiddlewareStack::new();
        stack.push_outer(MiddlewareLayer::new(
            "RawConnector",
            json!({ "name": self.raw.name() }),
        ));
        for layer in self.layers.iter().rev() {
            stack.push_outer(MiddlewareLayer::new(layer.name(), layer.config_json()));
        }
        stack
    }

    /// Build the wrapped connector.
    ///
    /// # Errors
    /// Returns `InvalidMiddlewareStack` if the same layer was added twice.
    pub fn build(self) -> Result<Arc<dyn ScopeConnector>, ScopeError> {
        let mut seen = HashSet::new();
        for layer in &self.layers {
            if !seen.insert(layer.name()) {
                return Err(ScopeError::InvalidMiddlewareStack {
                    message: format!("duplicate middleware layer '{}'", layer.name()),
                });
            }
        }
        let mut acc: Arc<dyn ScopeConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        Ok(acc)
    }
}
