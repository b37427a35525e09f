//! tickerscope-middleware
//!
//! Connector wrappers and the builder that composes them.
//!
//! - [`CachingConnector`]: memoizes history and news lookups per argument tuple.
//! - [`ConnectorBuilder`]: stacks middleware layers around a raw connector.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
