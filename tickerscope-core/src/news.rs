use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A headline published on the reference date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsItem {
    /// Publish time as a naive date-time in the request's zone.
    pub published_at: NaiveDateTime,
    /// Headline.
    pub title: String,
    /// Article URL; empty when the provider omitted it.
    pub link: String,
    /// Publisher name; empty when the provider omitted it.
    pub publisher: String,
}

/// A headline of the provider's rolling feed, before it is pinned to a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedHeadline {
    /// Instant of publication.
    pub published: DateTime<Utc>,
    /// Headline.
    pub title: String,
    /// Publisher, if reported.
    pub publisher: Option<String>,
    /// Article URL, if reported.
    pub link: Option<String>,
}

/// Which day's headlines to return and how to read publish timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsRequest {
    /// Reference date; only items published on this date are kept.
    pub on: NaiveDate,
    /// Zone in which epoch publish times are converted to naive date-times.
    pub tz: Tz,
    /// Number of feed items to ask the provider for.
    pub count: u32,
}

impl NewsRequest {
    /// Request for `on`, reading publish times as UTC with a feed of 20 items.
    #[must_use]
    pub const fn on(on: NaiveDate) -> Self {
        Self {
            on,
            tz: Tz::UTC,
            count: 20,
        }
    }

    /// Override the conversion zone.
    #[must_use]
    pub const fn with_tz(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    /// Override the number of feed items requested.
    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }
}
