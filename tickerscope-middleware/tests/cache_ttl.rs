use std::time::Duration;

use chrono::NaiveDate;
use tickerscope_core::{
    CacheConfig, Capability, DateRange, HistoryRequest, Interval, ScopeConnector, Ticker,
    connector::HistoryProvider,
};
use tickerscope_middleware::ConnectorBuilder;
use tickerscope_mock::DynamicMockConnector;

#[tokio::test]
async fn entries_expire_after_ttl() {
    let (raw, ctrl) = DynamicMockConnector::new_with_controller("dyn");
    let cfg = CacheConfig::default().with_ttl(Capability::History, Duration::from_millis(50));
    let wrapped = ConnectorBuilder::new(raw).with_cache(&cfg).build().unwrap();
    let hp = wrapped.as_history_provider().unwrap();

    let aapl = Ticker::new("AAPL").unwrap();
    let r = HistoryRequest::new(
        DateRange::trailing_year(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        Interval::Monthly,
    );

    hp.history(&aapl, r).await.unwrap();
    hp.history(&aapl, r).await.unwrap();
    assert_eq!(ctrl.history_calls().await.len(), 1);

    tokio::time::sleep(Duration::from_millis(150)).await;
    hp.history(&aapl, r).await.unwrap();
    assert_eq!(ctrl.history_calls().await.len(), 2);
}
