use std::time::Duration;

use tickerscope::{Capability, Explorer, ExplorerConfig, Filters};
use tickerscope_demos::common::{get_connector, today};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configuration as an embedding application might load it from disk.
    let raw = r#"{
        "cache": { "per_capability_ttl_ms": { "news": 900000 } },
        "news_tz": "America/New_York",
        "news_count": 30
    }"#;
    let mut cfg: ExplorerConfig = serde_json::from_str(raw)?;

    // Programmatic tweaks on top: bound the history memo.
    cfg.cache = cfg
        .cache
        .with_max_entries(Capability::History, 256)
        .with_ttl(Capability::History, Duration::from_secs(24 * 60 * 60));
    println!("{}", serde_json::to_string_pretty(&cfg)?);

    let explorer = Explorer::builder()
        .with_connector(get_connector()?)
        .config(cfg)
        .build()?;

    let today = today();
    let dashboard = explorer.load(&Filters::defaults(today), today).await?;
    println!("{}", dashboard.headline());
    println!(
        "{} price rows, {} headline(s) read in {}",
        dashboard.prices().map_or(0, |p| p.len()),
        dashboard.news().len(),
        explorer.config().news_tz
    );

    Ok(())
}
