//! Tickerscope error, capability, and configuration primitives shared by every crate.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod middleware;

pub use capability::Capability;
pub use config::{CacheConfig, ExplorerConfig};
pub use connector::ConnectorKey;
pub use error::ScopeError;
pub use middleware::{MiddlewareLayer, MiddlewareStack};
