//! Mapping between tickerscope requests/rows and the `yfinance-rs` model.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use paft::market::requests::history::Interval as YfInterval;
use rust_decimal::prelude::ToPrimitive;
use tickerscope_core::{FeedHeadline, HistoryRequest, Interval, PriceRow};
use yfinance_rs as yf;

pub(crate) const fn yf_interval(interval: Interval) -> YfInterval {
    match interval {
        Interval::Daily => YfInterval::D1,
        Interval::Weekly => YfInterval::W1,
        Interval::Monthly => YfInterval::M1,
    }
}

/// Unadjusted bars, no pre/post market, no corporate actions.
pub(crate) fn yf_request(req: &HistoryRequest) -> yf::core::services::HistoryRequest {
    yf::core::services::HistoryRequest {
        range: None,
        period: Some(req.fetch_period()),
        interval: yf_interval(req.interval()),
        include_prepost: false,
        include_actions: false,
        auto_adjust: false,
        keepna: false,
    }
}

/// Trading day of `ts` on the exchange, from the zone or the fixed offset
/// the provider reported, falling back to UTC.
pub(crate) fn exchange_day(ts: DateTime<Utc>, meta: Option<&yf::HistoryMeta>) -> NaiveDate {
    if let Some(tz) = meta.and_then(|m| m.timezone) {
        return ts.with_timezone(&tz).date_naive();
    }
    let offset = meta.and_then(|m| m.utc_offset_seconds).unwrap_or(0);
    (ts + Duration::seconds(offset)).date_naive()
}

/// Rows of `resp` that belong to `req`, each keyed at UTC midnight of its
/// exchange-local trading day.
///
/// The series is unadjusted, so `adj_close` carries the raw close. Missing
/// volume counts as zero; bars whose prices do not fit an `f64` are dropped.
pub(crate) fn price_rows(resp: &yf::HistoryResponse, req: &HistoryRequest) -> Vec<PriceRow> {
    let meta = resp.meta.as_ref();
    resp.candles
        .iter()
        .filter_map(|c| {
            let day = exchange_day(c.ts, meta);
            if !req.covers(day) {
                return None;
            }
            let close = c.close.amount().to_f64()?;
            Some(PriceRow {
                timestamp: day.and_hms_opt(0, 0, 0)?.and_utc(),
                open: c.open.amount().to_f64()?,
                high: c.high.amount().to_f64()?,
                low: c.low.amount().to_f64()?,
                close,
                adj_close: close,
                volume: c.volume.unwrap_or(0),
            })
        })
        .collect()
}

pub(crate) fn feed_headline(a: yf::news::NewsArticle) -> FeedHeadline {
    FeedHeadline {
        published: a.published_at,
        title: a.title,
        publisher: a.publisher,
        link: a.link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use paft::money::{Currency, IsoCurrency, Money};
    use tickerscope_core::DateRange;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn usd(v: &str) -> Money {
        Money::from_canonical_str(v, Currency::Iso(IsoCurrency::USD)).unwrap()
    }

    fn candle(ts: i64, close: &str, volume: Option<u64>) -> yf::Candle {
        yf::Candle {
            ts: Utc.timestamp_opt(ts, 0).unwrap(),
            open: usd(close).into(),
            high: usd(close).into(),
            low: usd(close).into(),
            close: usd(close).into(),
            close_unadj: None,
            volume,
            provider: (),
        }
    }

    fn response(candles: Vec<yf::Candle>, offset: i64) -> yf::HistoryResponse {
        yf::HistoryResponse {
            candles,
            actions: vec![],
            adjusted: false,
            meta: Some(yf::HistoryMeta {
                timezone: None,
                utc_offset_seconds: Some(offset),
            }),
            provider: (),
        }
    }

    #[test]
    fn request_is_unadjusted_over_the_widened_window() {
        let d = day(2024, 1, 1);
        let req = HistoryRequest::new(DateRange::new(d, d).unwrap(), Interval::Monthly);
        let yf_req = yf_request(&req);
        assert!(!yf_req.auto_adjust);
        assert!(!yf_req.include_prepost);
        assert_eq!(yf_req.interval, YfInterval::M1);
        // 2023-12-31T00:00:00Z .. 2024-01-03T00:00:00Z
        assert_eq!(yf_req.period, Some((1_703_980_800, 1_704_240_000)));
    }

    #[test]
    fn sessions_are_keyed_on_the_exchange_day() {
        let d = day(2024, 1, 2);
        let req = HistoryRequest::new(DateRange::new(d, d).unwrap(), Interval::Daily);
        // Sydney (UTC+11) sessions opening on Jan 2nd and Jan 3rd local time
        let resp = response(
            vec![candle(1_704_150_000, "45.10", Some(7)), candle(1_704_236_400, "45.90", None)],
            39_600,
        );
        let rows = price_rows(&resp, &req);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date(), d);
        assert_eq!(rows[0].timestamp, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        assert!((rows[0].close - 45.10).abs() < 1e-9);
        assert!((rows[0].adj_close - rows[0].close).abs() < 1e-9);
        assert_eq!(rows[0].volume, 7);
    }

    #[test]
    fn session_west_of_utc_is_trimmed_at_the_window_end() {
        let d = day(2024, 1, 2);
        let req = HistoryRequest::new(DateRange::new(d, d).unwrap(), Interval::Daily);
        // New York opens (UTC-5) on Jan 2nd and Jan 3rd
        let resp = response(
            vec![candle(1_704_205_800, "185.64", None), candle(1_704_292_200, "184.25", None)],
            -18_000,
        );
        let rows = price_rows(&resp, &req);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].volume, 0);
        assert_eq!(rows[0].date(), d);
    }

    #[test]
    fn missing_meta_reads_utc() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 23, 0, 0).unwrap();
        assert_eq!(exchange_day(ts, None), day(2024, 1, 1));
    }
}
