use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::{FeedHeadline, NewsItem, NewsRequest};

/// Wall-clock publish time in `tz`, without the zone.
#[must_use]
pub fn local_publish_time(published: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    published.with_timezone(&tz).naive_local()
}

/// Keep only the feed items published on `req.on` and order them newest first.
///
/// Date matching is strict calendar-day equality after conversion to
/// `req.tz`. Items with equal publish times keep their feed order.
#[must_use]
pub fn published_on<I>(feed: I, req: &NewsRequest) -> Vec<NewsItem>
where
    I: IntoIterator<Item = FeedHeadline>,
{
    let mut items: Vec<NewsItem> = feed
        .into_iter()
        .filter_map(|h| {
            let published_at = local_publish_time(h.published, req.tz);
            (published_at.date() == req.on).then(|| NewsItem {
                published_at,
                title: h.title,
                link: h.link.unwrap_or_default(),
                publisher: h.publisher.unwrap_or_default(),
            })
        })
        .collect();
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    items
}
