//! Configuration types shared by the explorer, middleware, and connectors.

use std::collections::HashMap;
use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::Capability;

/// Memoization settings for the caching middleware.
///
/// The defaults reproduce plain memoization: every capability is cached for
/// the lifetime of the process, with no expiry and no capacity bound.
/// A TTL of `0` disables the store for that capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Master switch. When false no store is created at all.
    pub enabled: bool,
    /// TTL applied to capabilities without an override. `None` means entries never expire.
    pub default_ttl_ms: Option<u64>,
    /// Capacity applied to capabilities without an override. `None` means unbounded.
    pub default_max_entries: Option<u64>,
    /// Per-capability TTL overrides keyed by [`Capability::as_str`].
    pub per_capability_ttl_ms: HashMap<String, u64>,
    /// Per-capability capacity overrides keyed by [`Capability::as_str`].
    pub per_capability_max_entries: HashMap<String, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_ttl_ms: None,
            default_max_entries: None,
            per_capability_ttl_ms: HashMap::new(),
            per_capability_max_entries: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// A configuration with caching switched off entirely.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Whether a store should be built for `cap`.
    #[must_use]
    pub fn is_enabled_for(&self, cap: Capability) -> bool {
        self.enabled && self.ttl_ms_for(cap) != Some(0)
    }

    fn ttl_ms_for(&self, cap: Capability) -> Option<u64> {
        self.per_capability_ttl_ms
            .get(cap.as_str())
            .copied()
            .or(self.default_ttl_ms)
    }

    /// Expiry for entries of `cap`, or `None` when they live until process exit.
    ///
    /// A zero TTL is reported as `None` as well; check [`Self::is_enabled_for`] first.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        match self.ttl_ms_for(cap) {
            Some(0) | None => None,
            Some(ms) => Some(Duration::from_millis(ms)),
        }
    }

    /// Maximum number of entries kept for `cap`, or `None` when unbounded.
    #[must_use]
    pub fn capacity_for(&self, cap: Capability) -> Option<u64> {
        self.per_capability_max_entries
            .get(cap.as_str())
            .copied()
            .or(self.default_max_entries)
            .map(|n| n.max(1))
    }

    /// Set a TTL override for one capability.
    #[must_use]
    pub fn with_ttl(mut self, cap: Capability, ttl: Duration) -> Self {
        let ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self.per_capability_ttl_ms.insert(cap.as_str().to_string(), ms);
        self
    }

    /// Set a capacity override for one capability.
    #[must_use]
    pub fn with_max_entries(mut self, cap: Capability, max: u64) -> Self {
        self.per_capability_max_entries
            .insert(cap.as_str().to_string(), max);
        self
    }
}

/// Top-level configuration for the `Explorer` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Memoization settings applied when the explorer wraps its connector.
    pub cache: CacheConfig,
    /// Zone used to turn epoch-second publish times into naive date-times
    /// before matching them against the reference date.
    pub news_tz: Tz,
    /// How many items to request from the provider's rolling news feed.
    pub news_count: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            news_tz: Tz::UTC,
            news_count: 20,
        }
    }
}
