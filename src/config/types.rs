use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::Collection;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub listings: ListingsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the hosted content service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Base URL of the REST endpoint (e.g., "https://xyz.example.co/rest/v1").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Public (anon) key for the content service.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Timing for rotating displays (testimonials, course categories, mentors).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Dwell time of the slide-out and slide-in phases in milliseconds (default: 500).
    #[serde(default = "default_dwell_ms")]
    pub dwell_ms: u64,
    /// Auto-advance interval in milliseconds; 0 disables (default: 6000).
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
}

/// How many records each listing shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsConfig {
    #[serde(default = "default_articles_limit")]
    pub articles_limit: usize,
    #[serde(default = "default_courses_limit")]
    pub courses_limit: usize,
    #[serde(default = "default_partners_limit")]
    pub partners_limit: usize,
    #[serde(default = "default_testimonials_limit")]
    pub testimonials_limit: usize,
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default)]
    pub level: Option<String>,
    /// Log file. The preview always logs to a file; `list` logs to stderr
    /// unless this is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:54321/rest/v1".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_dwell_ms() -> u64 {
    500
}

fn default_auto_advance_ms() -> u64 {
    6000
}

fn default_articles_limit() -> usize {
    6
}

fn default_courses_limit() -> usize {
    8
}

fn default_partners_limit() -> usize {
    12
}

fn default_testimonials_limit() -> usize {
    10
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            dwell_ms: default_dwell_ms(),
            auto_advance_ms: default_auto_advance_ms(),
        }
    }
}

impl Default for ListingsConfig {
    fn default() -> Self {
        Self {
            articles_limit: default_articles_limit(),
            courses_limit: default_courses_limit(),
            partners_limit: default_partners_limit(),
            testimonials_limit: default_testimonials_limit(),
        }
    }
}

impl ContentConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds as u64)
    }
}

impl CarouselConfig {
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms)
    }

    /// `None` when auto-advance is disabled.
    pub fn auto_advance(&self) -> Option<Duration> {
        (self.auto_advance_ms > 0).then(|| Duration::from_millis(self.auto_advance_ms))
    }
}

impl ListingsConfig {
    /// Listing size for a collection.
    pub fn limit_for(&self, collection: Collection) -> usize {
        match collection {
            Collection::Articles => self.articles_limit,
            Collection::Courses => self.courses_limit,
            Collection::Partners => self.partners_limit,
            Collection::Testimonials => self.testimonials_limit,
        }
    }

    /// Same sizes with `collection` overridden to `limit`.
    pub fn with_limit(mut self, collection: Collection, limit: usize) -> Self {
        let slot = match collection {
            Collection::Articles => &mut self.articles_limit,
            Collection::Courses => &mut self.courses_limit,
            Collection::Partners => &mut self.partners_limit,
            Collection::Testimonials => &mut self.testimonials_limit,
        };
        *slot = limit;
        self
    }
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }
}
