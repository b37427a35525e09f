use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, Utc};

use crate::PriceRow;

/// Sort rows ascending by timestamp, keeping the first row seen for a duplicate timestamp.
#[must_use]
pub fn normalize_rows(rows: Vec<PriceRow>) -> Vec<PriceRow> {
    let mut by_ts: BTreeMap<DateTime<Utc>, PriceRow> = BTreeMap::new();
    for row in rows {
        match by_ts.entry(row.timestamp) {
            Entry::Vacant(v) => {
                v.insert(row);
            }
            Entry::Occupied(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "tickerscope::prices",
                    ts = %row.timestamp,
                    "dropping duplicate bar"
                );
            }
        }
    }
    by_ts.into_values().collect()
}

/// True if timestamps are strictly increasing.
#[must_use]
pub fn is_strictly_increasing(rows: &[PriceRow]) -> bool {
    rows.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}
