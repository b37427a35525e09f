//! Series helpers shared by connectors and the explorer.
//!
//! - `prices`: ordering and de-duplication of OHLCV rows
//! - `news`: reduce a rolling feed to one day's headlines, newest first
/// Price-row ordering helpers.
pub mod prices;
/// Feed-to-day news filtering.
pub mod news;
