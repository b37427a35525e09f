use tickerscope::{Dashboard, Explorer, Filters, Interval};
use tickerscope_demos::common::{get_connector, today};

fn render(dashboard: &Dashboard) {
    println!("{}", dashboard.headline());
    match dashboard {
        Dashboard::NoPriceData { .. } => {
            println!("No price data found for the specified parameters.");
        }
        Dashboard::Ready { prices, news, .. } => {
            if let (Some(first), Some(last)) = (prices.first(), prices.last()) {
                println!(
                    "Price Table: {} rows, close {:.2} ({}) -> {:.2} ({})",
                    prices.len(),
                    first.close,
                    first.date(),
                    last.close,
                    last.date()
                );
            }
            let closes = prices.closes();
            let lo = closes.iter().map(|(_, c)| *c).fold(f64::INFINITY, f64::min);
            let hi = closes
                .iter()
                .map(|(_, c)| *c)
                .fold(f64::NEG_INFINITY, f64::max);
            println!("Price Chart (Close): {} points, range {lo:.2}..{hi:.2}", closes.len());
            println!("Today's News: {} item(s)", news.len());
            for n in news {
                println!("  {}  {}", n.published_at.format("%H:%M:%S"), n.title);
            }
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let explorer = Explorer::builder().with_connector(get_connector()?).build()?;
    let today = today();

    // Default selection.
    let defaults = Filters::defaults(today);
    render(&explorer.load(&defaults, today).await?);

    // Weekly MSFT over the last quarter.
    let start = today - chrono::Days::new(90);
    let weekly = Filters::new("msft", start, today, Interval::Weekly, today)?;
    render(&explorer.load(&weekly, today).await?);

    // A symbol the provider does not know: the flow stops before news.
    let unknown = Filters::new("ZZZZINVALID", start, today, Interval::Daily, today)?;
    render(&explorer.load(&unknown, today).await?);

    // Same inputs again: answered from the memo.
    let started = std::time::Instant::now();
    let _ = explorer.load(&defaults, today).await?;
    println!("Reloaded defaults in {:?}", started.elapsed());

    Ok(())
}
