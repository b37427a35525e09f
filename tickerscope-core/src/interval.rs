use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::ScopeError;

/// Sampling interval of a price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Interval {
    /// One row per trading day (`1d`).
    #[default]
    #[serde(rename = "1d", alias = "daily")]
    Daily,
    /// One row per week (`1wk`).
    #[serde(rename = "1wk", alias = "weekly")]
    Weekly,
    /// One row per month (`1mo`).
    #[serde(rename = "1mo", alias = "monthly")]
    Monthly,
}

impl Interval {
    /// Every interval, in selector order.
    pub const ALL: &'static [Self] = &[Self::Daily, Self::Weekly, Self::Monthly];

    /// Provider granularity code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Daily => "1d",
            Self::Weekly => "1wk",
            Self::Monthly => "1mo",
        }
    }

    /// First day of the period containing `day`: the day itself, its Monday,
    /// or the first of its month.
    #[must_use]
    pub fn period_start(self, day: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => day,
            Self::Weekly => day.week(Weekday::Mon).first_day(),
            Self::Monthly => day.with_day(1).unwrap_or(day),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Interval {
    type Err = ScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" | "d" | "day" | "daily" => Ok(Self::Daily),
            "1wk" | "1w" | "w" | "week" | "weekly" => Ok(Self::Weekly),
            "1mo" | "1m" | "mo" | "month" | "monthly" => Ok(Self::Monthly),
            other => Err(ScopeError::InvalidArg(format!(
                "unknown interval '{other}' (expected 1d, 1wk or 1mo)"
            ))),
        }
    }
}
