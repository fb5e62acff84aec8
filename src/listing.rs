//! Listings: every collection projected to [`ListingEntry`] lines.
//!
//! Articles and testimonials show newest first, courses by next start
//! date, mitra in the order the service returns them.

use crate::config::ListingsConfig;
use crate::content::{
    Article, Collection, ContentClient, ContentError, ContentRecord, Course, ListingEntry,
    Partner, Testimonial,
};
use crate::loader::{CollectionLoader, LoadPolicy};

/// Sort and limit for one collection's listing.
pub fn listing_policy(collection: Collection, limit: usize) -> LoadPolicy<ListingEntry> {
    let policy = match collection {
        Collection::Articles | Collection::Testimonials => {
            LoadPolicy::new().newest_first_by(|entry: &ListingEntry| entry.sort_key.clone())
        }
        // Soonest start first; undated entries go last.
        Collection::Courses => LoadPolicy::new().oldest_first_by(|entry: &ListingEntry| {
            (entry.sort_key.is_none(), entry.sort_key.clone())
        }),
        Collection::Partners => LoadPolicy::new(),
    };
    policy.limit(limit)
}

/// Fetch `collection` and project each record to a listing line.
pub async fn fetch_listing(
    client: &ContentClient,
    collection: Collection,
) -> Result<Vec<ListingEntry>, ContentError> {
    let entries = match collection {
        Collection::Articles => project(client.fetch::<Article>().await?),
        Collection::Courses => project(client.fetch::<Course>().await?),
        Collection::Partners => project(client.fetch::<Partner>().await?),
        Collection::Testimonials => project(client.fetch::<Testimonial>().await?),
    };
    Ok(entries)
}

/// Loader whose dependency is the selected collection.
///
/// Switching collections is a dependency change: the new collection is
/// fetched and a late answer for the previous one is dropped.
pub fn listing_loader(
    client: ContentClient,
    initial: Collection,
    limits: ListingsConfig,
) -> CollectionLoader<ListingEntry, Collection> {
    CollectionLoader::new("listing", initial, LoadPolicy::new(), move |collection| {
        let client = client.clone();
        let policy = listing_policy(collection, limits.limit_for(collection));
        async move {
            let entries = fetch_listing(&client, collection).await?;
            Ok::<_, ContentError>(policy.apply(entries))
        }
    })
}

fn project<R: ContentRecord>(records: Vec<R>) -> Vec<ListingEntry> {
    records.iter().map(R::listing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, sort_key: Option<&str>) -> ListingEntry {
        ListingEntry {
            title: title.to_string(),
            subtitle: None,
            meta: None,
            sort_key: sort_key.map(str::to_string),
        }
    }

    fn titles(entries: &[ListingEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn articles_newest_first() {
        let policy = listing_policy(Collection::Articles, 2);
        let entries = policy.apply(vec![
            entry("old", Some("2023-01-01T00:00:00Z")),
            entry("new", Some("2024-06-01T00:00:00Z")),
            entry("mid", Some("2024-01-01T00:00:00Z")),
        ]);
        assert_eq!(titles(&entries), vec!["new", "mid"]);
    }

    #[test]
    fn courses_soonest_first_undated_last() {
        let policy = listing_policy(Collection::Courses, 10);
        let entries = policy.apply(vec![
            entry("tba", None),
            entry("later", Some("2024-09-01T00:00:00Z")),
            entry("sooner", Some("2024-03-01T00:00:00Z")),
        ]);
        assert_eq!(titles(&entries), vec!["sooner", "later", "tba"]);
    }

    #[test]
    fn partners_keep_service_order() {
        let policy = listing_policy(Collection::Partners, 10);
        let entries = policy.apply(vec![entry("b", None), entry("a", None)]);
        assert_eq!(titles(&entries), vec!["b", "a"]);
    }
}
