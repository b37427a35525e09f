use tickerscope::Explorer;
use tickerscope_demos::common::{get_connector, today};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let explorer = Explorer::builder().with_connector(get_connector()?).build()?;

    let today = today();
    println!("Headlines for {symbol} on {today}:");
    let items = explorer.news().fetch(&symbol, today).await?;
    if items.is_empty() {
        println!("  (no news published today)");
    }
    for item in &items {
        let publisher = if item.publisher.is_empty() {
            "unknown"
        } else {
            item.publisher.as_str()
        };
        println!(
            "  {}  {}  [{}]",
            item.published_at.format("%H:%M"),
            item.title,
            publisher
        );
        if !item.link.is_empty() {
            println!("         {}", item.link);
        }
    }

    Ok(())
}
