use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tickerscope::{
    CacheConfig, Dashboard, Explorer, Filters, Interval, ScopeConnector, ScopeError,
};
use tickerscope_core::{NewsItem, Ticker, connector::HistoryProvider, is_strictly_increasing};
use tickerscope_mock::{DynamicMockConnector, FEED_DATE, MockBehavior, MockConnector};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn mock_explorer() -> Explorer {
    Explorer::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn ready_dashboard_has_prices_and_same_day_news() {
    let explorer = mock_explorer();
    let filters = Filters::defaults(FEED_DATE);

    let dash = explorer.load(&filters, FEED_DATE).await.unwrap();
    assert!(dash.is_ready());
    let prices = dash.prices().unwrap();
    assert!(prices.len() > 200);
    assert!(is_strictly_increasing(prices.rows()));
    assert!(prices.first().unwrap().date() >= day(2023, 3, 2));
    assert!(prices.last().unwrap().date() <= FEED_DATE);

    let news = dash.news();
    assert_eq!(news.len(), 4);
    assert!(news.iter().all(|n| n.published_at.date() == FEED_DATE));
    assert_eq!(news[0].title, "Apple closes the week higher");
}

#[tokio::test]
async fn unknown_ticker_yields_no_price_data_and_skips_news() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder().with_connector(raw).build().unwrap();
    let today = day(2024, 6, 3);
    let filters = Filters::new("ZZZZINVALID", day(2024, 1, 1), today, Interval::Daily, today)
        .unwrap();

    let dash = explorer.load(&filters, today).await.unwrap();
    assert!(matches!(dash, Dashboard::NoPriceData { .. }));
    assert!(dash.news().is_empty());
    assert_eq!(ctrl.history_calls().await.len(), 1);
    assert!(ctrl.news_calls().await.is_empty(), "news must not be fetched");
}

#[tokio::test]
async fn provider_failure_propagates_and_is_retried() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder().with_connector(raw).build().unwrap();
    let today = day(2024, 6, 3);
    let filters = Filters::defaults(today);
    let aapl = Ticker::new("AAPL").unwrap();

    ctrl.set_history_behavior(
        aapl.clone(),
        MockBehavior::Fail(ScopeError::connector("dyn", "network unreachable")),
    )
    .await;
    let err = explorer.load(&filters, today).await.unwrap_err();
    assert!(matches!(err, ScopeError::Connector { .. }));

    ctrl.set_history_behavior(aapl, MockBehavior::Return(vec![])).await;
    let dash = explorer.load(&filters, today).await.unwrap();
    assert!(!dash.is_ready());
    assert_eq!(ctrl.history_calls().await.len(), 2);
}

#[tokio::test]
async fn forced_provider_failure_is_a_connector_error() {
    let explorer = mock_explorer();
    let today = FEED_DATE;
    let filters = Filters::new("FAIL", day(2024, 1, 1), today, Interval::Daily, today).unwrap();
    let err = explorer.load(&filters, today).await.unwrap_err();
    assert_eq!(
        err,
        ScopeError::connector("tickerscope-mock", "forced failure: history")
    );
}

#[tokio::test]
async fn repeated_loads_are_served_from_the_memo() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let aapl = Ticker::new("AAPL").unwrap();
    let today = day(2024, 6, 3);
    let rows = MockConnector::new()
        .as_history_provider()
        .unwrap()
        .history(
            &aapl,
            tickerscope_core::HistoryRequest::new(
                tickerscope::DateRange::trailing_year(today),
                Interval::Weekly,
            ),
        )
        .await
        .unwrap();
    ctrl.set_history_behavior(aapl.clone(), MockBehavior::Return(rows))
        .await;
    ctrl.set_news_behavior(
        aapl,
        MockBehavior::Return(vec![NewsItem {
            published_at: NaiveDateTime::parse_from_str("2024-06-03 08:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            title: "Early headline".into(),
            link: "https://example.com/1".into(),
            publisher: "Wire".into(),
        }]),
    )
    .await;

    let explorer = Explorer::builder().with_connector(raw).build().unwrap();
    let filters = Filters::new(
        "aapl",
        today - chrono::Days::new(365),
        today,
        Interval::Weekly,
        today,
    )
    .unwrap();

    let first = explorer.load(&filters, today).await.unwrap();
    let second = explorer.load(&filters, today).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.news().len(), 1);
    assert_eq!(ctrl.history_calls().await.len(), 1);
    assert_eq!(ctrl.news_calls().await.len(), 1);

    // A different interval is a new key.
    let monthly = Filters::new("AAPL", filters.range().start(), today, Interval::Monthly, today)
        .unwrap();
    explorer.load(&monthly, today).await.unwrap();
    assert_eq!(ctrl.history_calls().await.len(), 2);
}

#[tokio::test]
async fn disabled_cache_fetches_every_time() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder()
        .with_connector(raw)
        .cache(CacheConfig::disabled())
        .build()
        .unwrap();
    let today = day(2024, 6, 3);
    let filters = Filters::defaults(today);
    explorer.load(&filters, today).await.unwrap();
    explorer.load(&filters, today).await.unwrap();
    assert_eq!(ctrl.history_calls().await.len(), 2);
}

#[tokio::test]
async fn news_requests_carry_configured_zone_and_count() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let explorer = Explorer::builder()
        .with_connector(raw)
        .news_tz(tickerscope::Tz::America__New_York)
        .news_count(5)
        .build()
        .unwrap();
    explorer.news().fetch("msft", FEED_DATE).await.unwrap();
    let calls = ctrl.news_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.as_str(), "MSFT");
    assert_eq!(calls[0].1.on, FEED_DATE);
    assert_eq!(calls[0].1.tz, tickerscope::Tz::America__New_York);
    assert_eq!(calls[0].1.count, 5);
}

#[test]
fn build_requires_a_connector() {
    assert!(matches!(
        Explorer::builder().build(),
        Err(ScopeError::InvalidArg(_))
    ));
}

#[test]
fn build_rejects_connector_without_news() {
    struct HistoryOnly;
    impl ScopeConnector for HistoryOnly {
        fn name(&self) -> &'static str {
            "history-only"
        }
    }
    let err = Explorer::builder()
        .with_connector(Arc::new(HistoryOnly))
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, ScopeError::Unsupported { .. }));
}

#[test]
fn explorer_connector_is_the_cached_wrapper() {
    let explorer = mock_explorer();
    assert_eq!(explorer.connector().name(), "tickerscope-mock");
    assert_eq!(explorer.config().news_count, 20);
}
