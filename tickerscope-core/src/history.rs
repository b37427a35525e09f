use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{DateRange, Interval};

/// One OHLCV bar at the requested interval.
///
/// `close` is the raw, unadjusted close reported by the provider; `adj_close`
/// is the provider's split/dividend-adjusted close, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Period start as reported by the provider.
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest traded price.
    pub high: f64,
    /// Lowest traded price.
    pub low: f64,
    /// Raw closing price.
    pub close: f64,
    /// Provider-adjusted closing price.
    pub adj_close: f64,
    /// Shares traded during the period.
    pub volume: u64,
}

impl PriceRow {
    /// Calendar day of the row's timestamp (UTC).
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// A price-history request: which days, at what granularity.
///
/// Equality and hashing cover every field, so the request doubles as a memo key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRequest {
    range: DateRange,
    interval: Interval,
}

impl HistoryRequest {
    /// Create a request for `range` sampled at `interval`.
    #[must_use]
    pub const fn new(range: DateRange, interval: Interval) -> Self {
        Self { range, interval }
    }

    /// Requested inclusive range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Requested interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }

    /// Half-open provider window; see [`DateRange::provider_window`].
    #[must_use]
    pub fn provider_window(&self) -> (NaiveDate, NaiveDate) {
        self.range.provider_window()
    }

    /// Epoch bounds to send upstream when the exchange zone is not known yet.
    ///
    /// The provider window widened by one day on each side, so every session
    /// whose local day lies in the window is inside the bounds whatever the
    /// exchange's UTC offset. Filter the answer with [`Self::covers`].
    #[must_use]
    pub fn fetch_period(&self) -> (i64, i64) {
        let (start, end) = self.provider_window();
        let start = start.checked_sub_days(Days::new(1)).unwrap_or(start);
        let end = end.checked_add_days(Days::new(1)).unwrap_or(end);
        (midnight_utc(start), midnight_utc(end))
    }

    /// Whether a bar opening on exchange-local `day` belongs to the answer.
    ///
    /// Bars from the window end onwards are out. A bar before the start is
    /// kept only when its period contains the start, e.g. the weekly bar of
    /// the Monday before a mid-week start.
    #[must_use]
    pub fn covers(&self, day: NaiveDate) -> bool {
        let (_, end) = self.provider_window();
        day < end && day >= self.interval.period_start(self.range.start())
    }
}

fn midnight_utc(day: NaiveDate) -> i64 {
    day.and_hms_opt(0, 0, 0)
        .map_or(0, |dt| dt.and_utc().timestamp())
}
