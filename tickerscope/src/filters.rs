use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tickerscope_core::{DateRange, Interval, ScopeError, Ticker};

/// Validated explorer inputs.
///
/// Immutable once built: a new set of inputs means a new `Filters`.
/// Deserialized input goes through [`Filters::new`] with the current UTC date
/// as "today".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFilters")]
pub struct Filters {
    ticker: Ticker,
    range: DateRange,
    interval: Interval,
}

#[derive(Deserialize)]
struct RawFilters {
    ticker: String,
    range: DateRange,
    #[serde(default)]
    interval: Interval,
}

impl TryFrom<RawFilters> for Filters {
    type Error = ScopeError;

    fn try_from(raw: RawFilters) -> Result<Self, Self::Error> {
        Self::new(
            &raw.ticker,
            raw.range.start(),
            raw.range.end(),
            raw.interval,
            Utc::now().date_naive(),
        )
    }
}

impl Filters {
    /// Longest ticker the input box accepts; longer input is cut off.
    pub const TICKER_INPUT_MAX: usize = 10;

    /// Ticker preselected in the input box.
    pub const DEFAULT_TICKER: &'static str = "AAPL";

    /// `AAPL`, the trailing year ending `today`, daily bars.
    #[must_use]
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            ticker: Ticker::from_static(Self::DEFAULT_TICKER),
            range: DateRange::trailing_year(today),
            interval: Interval::Daily,
        }
    }

    /// Validate raw inputs.
    ///
    /// The ticker is trimmed, cut to [`Self::TICKER_INPUT_MAX`] characters
    /// and uppercased.
    ///
    /// # Errors
    /// - `InvalidArg` for an empty or malformed ticker.
    /// - `InvalidDateRange` when `start > end` or `end` lies after `today`.
    pub fn new(
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
        today: NaiveDate,
    ) -> Result<Self, ScopeError> {
        let typed: String = ticker.trim().chars().take(Self::TICKER_INPUT_MAX).collect();
        let ticker = Ticker::new(&typed)?;
        let range = DateRange::new(start, end)?;
        if end > today {
            return Err(ScopeError::invalid_range(
                start,
                end,
                format!("end date is after today ({today})"),
            ));
        }
        Ok(Self {
            ticker,
            range,
            interval,
        })
    }

    /// Selected ticker.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Selected inclusive date range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Selected interval.
    #[must_use]
    pub const fn interval(&self) -> Interval {
        self.interval
    }
}
