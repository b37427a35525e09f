//! Shared helpers for the runnable tickerscope demos.

pub mod common;
