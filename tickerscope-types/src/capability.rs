use core::fmt;
use serde::{Deserialize, Serialize};

/// Capability labels used for cache stores, errors, and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Historical OHLCV price rows.
    History,
    /// Same-day news headlines.
    News,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors and config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::News => "news",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Capability {
    type Err = crate::ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "history" => Ok(Self::History),
            "news" => Ok(Self::News),
            other => Err(crate::ScopeError::InvalidArg(format!(
                "unknown capability: {other}"
            ))),
        }
    }
}
