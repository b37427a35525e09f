use chrono::{Datelike, NaiveDate, Weekday};
use tickerscope_core::{
    DateRange, HistoryRequest, Interval, NewsRequest, ScopeConnector, ScopeError, Ticker,
    connector::{HistoryProvider, NewsProvider},
    is_strictly_increasing,
};
use tickerscope_mock::{FEED_DATE, MockConnector};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn req(start: NaiveDate, end: NaiveDate, interval: Interval) -> HistoryRequest {
    HistoryRequest::new(DateRange::new(start, end).unwrap(), interval)
}

#[tokio::test]
async fn daily_series_covers_weekdays_inside_the_range() {
    let mock = MockConnector::new();
    let hp = mock.as_history_provider().unwrap();
    let rows = hp
        .history(
            &Ticker::new("AAPL").unwrap(),
            req(day(2024, 1, 1), day(2024, 1, 14), Interval::Daily),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 10);
    assert!(is_strictly_increasing(&rows));
    assert_eq!(rows.first().unwrap().date(), day(2024, 1, 1));
    assert_eq!(rows.last().unwrap().date(), day(2024, 1, 12));
    assert!(
        rows.iter()
            .all(|r| !matches!(r.date().weekday(), Weekday::Sat | Weekday::Sun))
    );
    assert!(rows.iter().all(|r| r.low <= r.open.min(r.close) && r.high >= r.open.max(r.close)));
}

#[tokio::test]
async fn monthly_series_has_one_bar_per_month() {
    let mock = MockConnector::new();
    let hp = mock.as_history_provider().unwrap();
    let rows = hp
        .history(
            &Ticker::new("AAPL").unwrap(),
            req(day(2023, 1, 1), day(2024, 1, 31), Interval::Monthly),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 13);
    assert!(is_strictly_increasing(&rows));
    assert!(rows.iter().all(|r| r.date().day() == 1));
}

#[tokio::test]
async fn weekly_bars_start_on_monday() {
    let mock = MockConnector::new();
    let hp = mock.as_history_provider().unwrap();
    let rows = hp
        .history(
            &Ticker::new("MSFT").unwrap(),
            req(day(2024, 1, 1), day(2024, 1, 31), Interval::Weekly),
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.date().weekday() == Weekday::Mon));
}

#[tokio::test]
async fn unknown_symbol_is_empty_and_fail_errors() {
    let mock = MockConnector::new();
    let hp = mock.as_history_provider().unwrap();
    let r = req(day(2024, 1, 1), day(2024, 3, 1), Interval::Daily);
    assert!(
        hp.history(&Ticker::new("ZZZZINVALID").unwrap(), r)
            .await
            .unwrap()
            .is_empty()
    );
    let err = hp.history(&Ticker::new("FAIL").unwrap(), r).await.unwrap_err();
    assert!(matches!(err, ScopeError::Connector { .. }));
}

#[tokio::test]
async fn news_fixture_spans_several_days() {
    let mock = MockConnector::new();
    let np = mock.as_news_provider().unwrap();
    let aapl = Ticker::new("AAPL").unwrap();

    let today = np.news(&aapl, NewsRequest::on(FEED_DATE)).await.unwrap();
    assert_eq!(today.len(), 4);
    assert!(today.windows(2).all(|w| w[0].published_at >= w[1].published_at));

    let next = np.news(&aapl, NewsRequest::on(day(2024, 3, 2))).await.unwrap();
    assert_eq!(next.len(), 1);
    let before = np.news(&aapl, NewsRequest::on(day(2024, 2, 29))).await.unwrap();
    assert_eq!(before.len(), 1);

    let nothing = np
        .news(&Ticker::new("ZZZZINVALID").unwrap(), NewsRequest::on(FEED_DATE))
        .await
        .unwrap();
    assert!(nothing.is_empty());
}

#[tokio::test]
async fn news_feed_size_limits_candidates() {
    let mock = MockConnector::new();
    let np = mock.as_news_provider().unwrap();
    let items = np
        .news(
            &Ticker::new("AAPL").unwrap(),
            NewsRequest::on(FEED_DATE).with_count(3),
        )
        .await
        .unwrap();
    // The newest entry belongs to the next day, so only two of three qualify.
    assert_eq!(items.len(), 2);
}
