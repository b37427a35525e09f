use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};
use tickerscope_core::{HistoryRequest, Interval, PriceRow};

/// Shape of a synthetic series: starting level, daily drift, swing amplitude, base volume.
struct Profile {
    base: f64,
    drift: f64,
    swing: f64,
    volume: u64,
}

fn profile(symbol: &str) -> Option<Profile> {
    match symbol {
        "AAPL" => Some(Profile {
            base: 30.0,
            drift: 0.025,
            swing: 6.0,
            volume: 60_000_000,
        }),
        "MSFT" => Some(Profile {
            base: 25.0,
            drift: 0.045,
            swing: 9.0,
            volume: 25_000_000,
        }),
        "GOOG" => Some(Profile {
            base: 20.0,
            drift: 0.018,
            swing: 4.0,
            volume: 20_000_000,
        }),
        _ => None,
    }
}

/// Rows for `symbol` inside the request's provider window; empty for unknown symbols.
pub fn by_symbol(symbol: &str, req: &HistoryRequest) -> Vec<PriceRow> {
    let Some(p) = profile(symbol) else {
        return vec![];
    };
    let (start, end) = req.provider_window();
    let daily: Vec<PriceRow> = start
        .iter_days()
        .take_while(|d| *d < end)
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .filter_map(|d| bar(&p, d))
        .collect();
    match req.interval() {
        Interval::Daily => daily,
        iv => aggregate(daily, |d| iv.period_start(d)),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn bar(p: &Profile, day: NaiveDate) -> Option<PriceRow> {
    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)?;
    let n = (day - epoch).num_days() as f64;
    let close = p.drift.mul_add(n, p.base) + p.swing * (n / 9.0).sin();
    let close = close.max(1.0);
    let open = close - 0.4 * (n / 3.0).cos();
    let high = open.max(close) + 0.75;
    let low = (open.min(close) - 0.75).max(0.5);
    let wobble = (day.ordinal() % 7) as u64;
    Some(PriceRow {
        timestamp: day.and_hms_opt(0, 0, 0)?.and_utc(),
        open: round2(open),
        high: round2(high),
        low: round2(low),
        close: round2(close),
        adj_close: round2(close * 0.98),
        volume: p.volume + wobble * 1_250_000,
    })
}

/// Roll daily bars into periods keyed by `period_start`, timestamped at the period start.
fn aggregate(daily: Vec<PriceRow>, period_start: impl Fn(NaiveDate) -> NaiveDate) -> Vec<PriceRow> {
    let mut periods: BTreeMap<NaiveDate, PriceRow> = BTreeMap::new();
    for row in daily {
        let key = period_start(row.date());
        match periods.get_mut(&key) {
            Some(acc) => {
                acc.high = acc.high.max(row.high);
                acc.low = acc.low.min(row.low);
                acc.close = row.close;
                acc.adj_close = row.adj_close;
                acc.volume += row.volume;
            }
            None => {
                let Some(ts) = key.and_hms_opt(0, 0, 0) else {
                    continue;
                };
                periods.insert(
                    key,
                    PriceRow {
                        timestamp: ts.and_utc(),
                        ..row
                    },
                );
            }
        }
    }
    periods.into_values().collect()
}
