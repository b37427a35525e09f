use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ScopeError;

/// Inclusive calendar range `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawRange> for DateRange {
    type Error = ScopeError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Build a range, checking the ordering invariant.
    ///
    /// # Errors
    /// Returns `InvalidDateRange` when `start > end`, or when `end` is the last
    /// representable date (the provider window needs the following day).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScopeError> {
        if start > end {
            return Err(ScopeError::invalid_range(
                start,
                end,
                "start date must be on or before end date",
            ));
        }
        if end.succ_opt().is_none() {
            return Err(ScopeError::invalid_range(start, end, "end date out of range"));
        }
        Ok(Self { start, end })
    }

    /// The twelve months ending on `today`, both ends included.
    #[must_use]
    pub fn trailing_year(today: NaiveDate) -> Self {
        let start = today.checked_sub_days(Days::new(365)).unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// First day (inclusive).
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of calendar days covered, counting both ends.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// True if `day` falls within the range.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Half-open window `[start, end + 1 day)` as expected by the provider,
    /// whose native ranges exclude the end date.
    #[must_use]
    pub fn provider_window(&self) -> (NaiveDate, NaiveDate) {
        // `new` guarantees `end` has a successor
        let exclusive_end = self.end.succ_opt().unwrap_or(self.end);
        (self.start, exclusive_end)
    }
}
