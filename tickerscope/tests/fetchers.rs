use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tickerscope::{Explorer, Interval, ScopeError};
use tickerscope_core::is_strictly_increasing;
use tickerscope_mock::{DynamicMockConnector, FEED_DATE, MockConnector};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn inverted_range_fails_before_any_fetch() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder().with_connector(raw).build().unwrap();
    let err = explorer
        .prices()
        .fetch("AAPL", day(2024, 3, 2), day(2024, 3, 1), Interval::Daily)
        .await
        .unwrap_err();
    assert!(matches!(err, ScopeError::InvalidDateRange { .. }));
    assert!(err.is_validation());
    assert!(ctrl.history_calls().await.is_empty());
}

#[tokio::test]
async fn malformed_ticker_fails_before_any_fetch() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder().with_connector(raw).build().unwrap();
    for bad in ["", "   ", "AA PL", "A/B"] {
        let err = explorer
            .prices()
            .fetch(bad, day(2024, 3, 1), day(2024, 3, 1), Interval::Daily)
            .await
            .unwrap_err();
        assert!(matches!(err, ScopeError::InvalidArg(_)), "{bad:?}");
    }
    assert!(ctrl.history_calls().await.is_empty());
}

#[tokio::test]
async fn single_day_request_reaches_provider_as_one_day_window() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder().with_connector(raw).build().unwrap();
    explorer
        .prices()
        .fetch("AAPL", day(2024, 1, 1), day(2024, 1, 1), Interval::Daily)
        .await
        .unwrap();
    let calls = ctrl.history_calls().await;
    assert_eq!(
        calls[0].1.provider_window(),
        (day(2024, 1, 1), day(2024, 1, 2))
    );
}

#[tokio::test]
async fn monthly_thirteen_months_gives_thirteen_rows() {
    let explorer = Explorer::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let rows = explorer
        .prices()
        .fetch("AAPL", day(2023, 1, 1), day(2024, 1, 31), Interval::Monthly)
        .await
        .unwrap();
    assert_eq!(rows.len(), 13);
    assert!(is_strictly_increasing(&rows));
    assert_eq!(rows[0].date(), day(2023, 1, 1));
    assert_eq!(rows[12].date().month(), 1);
}

#[tokio::test]
async fn zzzzinvalid_returns_an_empty_table() {
    let explorer = Explorer::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let rows = explorer
        .prices()
        .fetch("ZZZZINVALID", day(2024, 1, 1), day(2024, 3, 1), Interval::Daily)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn news_fetcher_filters_to_reference_day() {
    let explorer = Explorer::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let items = explorer.news().fetch("AAPL", FEED_DATE).await.unwrap();
    let times: Vec<String> = items
        .iter()
        .map(|n| n.published_at.format("%H:%M:%S").to_string())
        .collect();
    assert_eq!(times, ["23:59:59", "14:00:00", "10:00:00", "09:00:00"]);

    let none = explorer
        .news()
        .fetch("AAPL", day(2024, 2, 1))
        .await
        .unwrap();
    assert!(none.is_empty());
}
