use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickerscope_core::{NewsItem, PriceRow, normalize_rows};

use crate::Filters;

/// A non-empty price table ready for rendering, ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    rows: Vec<PriceRow>,
}

impl PriceTable {
    /// Build a table from rows in any order; duplicate timestamps keep the first row.
    ///
    /// Returns `None` when there are no rows.
    #[must_use]
    pub fn new(rows: Vec<PriceRow>) -> Option<Self> {
        let rows = normalize_rows(rows);
        (!rows.is_empty()).then_some(Self { rows })
    }

    /// All rows, oldest first.
    #[must_use]
    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    /// `(timestamp, close)` pairs for the close-price line chart.
    #[must_use]
    pub fn closes(&self) -> Vec<(DateTime<Utc>, f64)> {
        self.rows.iter().map(|r| (r.timestamp, r.close)).collect()
    }

    /// Oldest row.
    #[must_use]
    pub fn first(&self) -> Option<&PriceRow> {
        self.rows.first()
    }

    /// Newest row.
    #[must_use]
    pub fn last(&self) -> Option<&PriceRow> {
        self.rows.last()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a constructed table; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Outcome of one explorer interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Dashboard {
    /// The provider had no rows for the filters; news was not fetched.
    NoPriceData {
        /// Inputs that produced no data.
        filters: Filters,
    },
    /// Prices were found; news holds the reference day's headlines (possibly none).
    Ready {
        /// Inputs the dashboard was built from.
        filters: Filters,
        /// Price table and chart series.
        prices: PriceTable,
        /// Same-day headlines, newest first.
        news: Vec<NewsItem>,
    },
}

impl Dashboard {
    /// Inputs the outcome belongs to.
    #[must_use]
    pub const fn filters(&self) -> &Filters {
        match self {
            Self::NoPriceData { filters } | Self::Ready { filters, .. } => filters,
        }
    }

    /// Whether prices were found.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Price table, if any.
    #[must_use]
    pub const fn prices(&self) -> Option<&PriceTable> {
        match self {
            Self::Ready { prices, .. } => Some(prices),
            Self::NoPriceData { .. } => None,
        }
    }

    /// Headlines; empty when prices were missing.
    #[must_use]
    pub fn news(&self) -> &[NewsItem] {
        match self {
            Self::Ready { news, .. } => news,
            Self::NoPriceData { .. } => &[],
        }
    }

    /// One-line caption: `Ticker: X   Period: start → end   Interval: code`.
    #[must_use]
    pub fn headline(&self) -> String {
        let f = self.filters();
        format!(
            "Ticker: {}   Period: {} → {}   Interval: {}",
            f.ticker(),
            f.range().start(),
            f.range().end(),
            f.interval().code()
        )
    }
}
