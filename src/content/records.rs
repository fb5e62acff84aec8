//! Record types served by the content service.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Collections exposed by the content service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Articles,
    Courses,
    /// Partner organisations ("mitra").
    #[serde(rename = "mitra")]
    #[value(name = "mitra")]
    Partners,
    Testimonials,
}

impl Collection {
    /// Collections shown in the listing panel, in tab order.
    pub const LISTINGS: [Collection; 3] = [
        Collection::Articles,
        Collection::Courses,
        Collection::Partners,
    ];

    /// Path segment on the content service.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Articles => "articles",
            Collection::Courses => "courses",
            Collection::Partners => "mitra",
            Collection::Testimonials => "testimonials",
        }
    }

    /// Heading used by listings.
    pub fn label(&self) -> &'static str {
        match self {
            Collection::Articles => "Articles",
            Collection::Courses => "Courses",
            Collection::Partners => "Mitra",
            Collection::Testimonials => "Testimonials",
        }
    }

    /// The listing tab after this one, wrapping around.
    pub fn next_listing(&self) -> Collection {
        let position = Self::LISTINGS
            .iter()
            .position(|c| c == self)
            .unwrap_or(0);
        Self::LISTINGS[(position + 1) % Self::LISTINGS.len()]
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// One line of a rendered listing, independent of the record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    pub subtitle: Option<String>,
    /// Date or tag shown on the right-hand side.
    pub meta: Option<String>,
    /// Date used to order listings (RFC 3339, sorts lexically).
    pub sort_key: Option<String>,
}

/// A record type that lives in one collection of the content service.
pub trait ContentRecord: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// Project the record into a listing line.
    fn listing(&self) -> ListingEntry;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub author: Option<String>,
    /// RFC 3339 publication timestamp.
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub duration_hours: Option<u32>,
    /// RFC 3339 start of the next cohort.
    #[serde(default)]
    pub starts_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u64,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    pub quote: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

impl ContentRecord for Article {
    const COLLECTION: Collection = Collection::Articles;

    fn listing(&self) -> ListingEntry {
        ListingEntry {
            title: self.title.clone(),
            subtitle: non_empty(&self.excerpt).or_else(|| self.author.clone()),
            meta: Some(date_part(&self.published_at).to_string()),
            sort_key: Some(self.published_at.clone()),
        }
    }
}

impl ContentRecord for Course {
    const COLLECTION: Collection = Collection::Courses;

    fn listing(&self) -> ListingEntry {
        let subtitle = match self.duration_hours {
            Some(hours) => Some(format!("{} · {} hours", self.category, hours)),
            None => Some(self.category.clone()),
        };
        ListingEntry {
            title: self.title.clone(),
            subtitle,
            meta: self.starts_at.as_deref().map(|d| date_part(d).to_string()),
            sort_key: self.starts_at.clone(),
        }
    }
}

impl ContentRecord for Partner {
    const COLLECTION: Collection = Collection::Partners;

    fn listing(&self) -> ListingEntry {
        ListingEntry {
            title: self.name.clone(),
            subtitle: self.website.clone(),
            meta: None,
            sort_key: None,
        }
    }
}

impl ContentRecord for Testimonial {
    const COLLECTION: Collection = Collection::Testimonials;

    fn listing(&self) -> ListingEntry {
        ListingEntry {
            title: self.author.clone(),
            subtitle: Some(self.quote.clone()),
            meta: self.role.clone(),
            sort_key: Some(self.created_at.clone()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// `2024-03-01T09:00:00Z` → `2024-03-01`.
fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
