use std::sync::Arc;

use chrono::NaiveDate;
use tickerscope_core::{ScopeConnector, ScopeError};

/// Environment variable that swaps the live Yahoo connector for the mock.
pub const USE_MOCK_ENV: &str = "TICKERSCOPE_USE_MOCK";

/// Whether the demos run against the mock connector.
#[must_use]
pub fn using_mock() -> bool {
    std::env::var_os(USE_MOCK_ENV).is_some()
}

/// Return a raw connector for demos; the explorer adds the cache layer.
///
/// # Errors
/// Returns a connector error if the live client cannot be constructed.
pub fn get_connector() -> Result<Arc<dyn ScopeConnector>, ScopeError> {
    if using_mock() {
        println!("--- (Using Mock Connector for CI) ---");
        Ok(Arc::new(tickerscope_mock::MockConnector::new()))
    } else {
        Ok(Arc::new(tickerscope_yfinance::YfConnector::try_new_default()?))
    }
}

/// The reference "today": the fixture news day under the mock, the UTC calendar date otherwise.
#[must_use]
pub fn today() -> NaiveDate {
    if using_mock() {
        tickerscope_mock::FEED_DATE
    } else {
        chrono::Utc::now().date_naive()
    }
}
