use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ScopeError;

/// A normalized exchange symbol such as `AAPL`, `BRK-B`, or `^GSPC`.
///
/// Construction trims surrounding whitespace and uppercases the input. The
/// result must be 1..=16 characters drawn from ASCII alphanumerics and
/// `.`, `-`, `^`, `=`. Input surfaces apply their own, tighter length limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Longest symbol accepted by any connector.
    pub const MAX_LEN: usize = 16;

    /// Normalize and validate a raw symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the symbol is empty, longer than [`Self::MAX_LEN`],
    /// or contains characters outside the accepted alphabet.
    pub fn new(raw: &str) -> Result<Self, ScopeError> {
        let symbol = raw.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(ScopeError::InvalidArg("ticker must not be empty".into()));
        }
        if symbol.chars().count() > Self::MAX_LEN {
            return Err(ScopeError::InvalidArg(format!(
                "ticker '{symbol}' is longer than {} characters",
                Self::MAX_LEN
            )));
        }
        if let Some(bad) = symbol
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '=')))
        {
            return Err(ScopeError::InvalidArg(format!(
                "ticker '{symbol}' contains unsupported character '{bad}'"
            )));
        }
        Ok(Self(symbol))
    }

    /// Build from a symbol literal known to be valid, e.g. a default selection.
    ///
    /// The literal is uppercased but otherwise taken as-is; debug builds assert it
    /// would pass [`Self::new`].
    #[must_use]
    pub fn from_static(symbol: &'static str) -> Self {
        debug_assert!(Self::new(symbol).is_ok(), "invalid ticker literal '{symbol}'");
        Self(symbol.to_ascii_uppercase())
    }

    /// The normalized symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = ScopeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}
