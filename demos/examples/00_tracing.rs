use tickerscope::{Explorer, Filters};
use tickerscope_demos::common::{get_connector, today};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,tickerscope=trace,tickerscope::cache=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let explorer = Explorer::builder().with_connector(get_connector()?).build()?;
    let today = today();
    let filters = Filters::defaults(today);

    // The second load is answered from the memo; watch for the cache-hit events.
    let _ = explorer.load(&filters, today).await?;
    let dashboard = explorer.load(&filters, today).await?;
    tracing::info!(headline = %dashboard.headline(), "loaded");

    Ok(())
}
