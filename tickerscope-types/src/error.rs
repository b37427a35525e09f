use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the tickerscope workspace.
///
/// Empty price tables and empty news lists are *values*, not errors; callers
/// branch on them explicitly. Everything here aborts the current load.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScopeError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history").
        capability: String,
    },

    /// The date filter cannot be satisfied; detected before any fetch.
    #[error("invalid date range {start} → {end}: {reason}")]
    InvalidDateRange {
        /// Requested first day (inclusive).
        start: NaiveDate,
        /// Requested last day (inclusive).
        end: NaiveDate,
        /// Human-readable reason, e.g. "start must be on or before end".
        reason: String,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Middleware stack configuration is invalid (duplicate layers, etc.).
    #[error("invalid middleware stack: {message}")]
    InvalidMiddlewareStack {
        /// Human-readable description of the validation failure.
        message: String,
    },
}

impl ScopeError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `InvalidDateRange` error.
    pub fn invalid_range(start: NaiveDate, end: NaiveDate, reason: impl Into<String>) -> Self {
        Self::InvalidDateRange {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Returns true if the error was raised by input validation, meaning no
    /// provider request was issued.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidDateRange { .. } | Self::InvalidArg(_))
    }
}
