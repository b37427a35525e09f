use chrono::{DateTime, NaiveDate};
use tickerscope_core::{FeedHeadline, NewsItem, NewsRequest, published_on};

/// The day most fixture headlines fall on (UTC).
pub const FEED_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 3, 1) {
    Some(d) => d,
    None => NaiveDate::MIN,
};

// 2024-03-01T00:00:00Z
const DAY0: i64 = 1_709_251_200;
const HOUR: i64 = 3_600;

fn headline(slug: &str, title: &str, publisher: Option<&str>, ts: i64) -> Option<FeedHeadline> {
    Some(FeedHeadline {
        published: DateTime::from_timestamp(ts, 0)?,
        title: title.to_string(),
        publisher: publisher.map(str::to_string),
        link: Some(format!("https://news.example.com/{slug}")),
    })
}

/// Rolling feed for `symbol`, newest first, the way the provider serves it.
fn feed(symbol: &str) -> Vec<FeedHeadline> {
    let entries = match symbol {
        "AAPL" => vec![
            (
                "aapl-6",
                "Apple suppliers ramp up ahead of spring event",
                Some("Nikkei"),
                DAY0 + 24 * HOUR + 1,
            ),
            (
                "aapl-5",
                "Apple closes the week higher",
                Some("Bloomberg"),
                DAY0 + 24 * HOUR - 1,
            ),
            (
                "aapl-4",
                "Analysts weigh Apple's services growth",
                Some("Reuters"),
                DAY0 + 14 * HOUR,
            ),
            (
                "aapl-3",
                "Apple unveils new MacBook Air",
                Some("The Verge"),
                DAY0 + 10 * HOUR,
            ),
            (
                "aapl-2",
                "Apple shares edge up in premarket",
                None,
                DAY0 + 9 * HOUR,
            ),
            (
                "aapl-1",
                "Apple faces EU fine decision",
                Some("Financial Times"),
                DAY0 - 6 * HOUR,
            ),
            (
                "aapl-0",
                "What to watch in tech this week",
                Some("CNBC"),
                DAY0 - 30 * HOUR,
            ),
        ],
        "MSFT" => vec![
            (
                "msft-2",
                "Microsoft expands AI partnership",
                Some("Reuters"),
                DAY0 + 16 * HOUR,
            ),
            (
                "msft-1",
                "Microsoft stock hits record",
                Some("MarketWatch"),
                DAY0 - 20 * HOUR,
            ),
            (
                "msft-0",
                "Cloud spending outlook",
                Some("WSJ"),
                DAY0 - 48 * HOUR,
            ),
        ],
        "GOOG" => vec![(
            "goog-0",
            "Alphabet reorganizes search unit",
            Some("The Information"),
            DAY0 - 72 * HOUR,
        )],
        _ => vec![],
    };
    entries
        .into_iter()
        .filter_map(|(slug, title, publisher, ts)| headline(slug, title, publisher, ts))
        .collect()
}

/// Headlines for `symbol` on `req.on`, newest first.
pub fn by_symbol(symbol: &str, req: &NewsRequest) -> Vec<NewsItem> {
    let size = usize::try_from(req.count).unwrap_or(usize::MAX);
    published_on(feed(symbol).into_iter().take(size), req)
}
