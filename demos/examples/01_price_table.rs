use tickerscope::{Explorer, Filters, Interval};
use tickerscope_demos::common::{get_connector, today};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Ticker from the command line, AAPL otherwise.
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());

    // 2. Build the explorer over a memoized connector.
    let explorer = Explorer::builder().with_connector(get_connector()?).build()?;

    // 3. Thirteen months of monthly bars ending today.
    let today = today();
    let start = today
        .checked_sub_months(chrono::Months::new(13))
        .unwrap_or(today);
    let filters = Filters::new(&symbol, start, today, Interval::Monthly, today)?;

    let rows = explorer
        .prices()
        .fetch(
            filters.ticker().as_str(),
            filters.range().start(),
            filters.range().end(),
            filters.interval(),
        )
        .await?;

    if rows.is_empty() {
        println!("No price data found for the specified parameters.");
        return Ok(());
    }

    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>14}",
        "Date", "Open", "High", "Low", "Close", "Adj Close", "Volume"
    );
    for r in &rows {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>14}",
            r.date().to_string(),
            r.open,
            r.high,
            r.low,
            r.close,
            r.adj_close,
            r.volume
        );
    }
    println!("{} rows", rows.len());

    Ok(())
}
