use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;

use crate::config::{ContentConfig, SecureString};
use crate::content::error::ContentError;
use crate::content::records::{Article, Collection, ContentRecord, Course, Partner, Testimonial};

/// Response body of every collection endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Read-only client for the hosted content service.
///
/// Constructed explicitly and passed to whatever needs data; clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct ContentClient {
    http: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl ContentClient {
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ContentError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            api_key: config.resolve_api_key(),
        })
    }

    /// URL of a collection endpoint.
    pub fn collection_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.path())
    }

    /// Fetch every record of `R`'s collection.
    pub async fn fetch<R: ContentRecord>(&self) -> Result<Vec<R>, ContentError> {
        let collection = R::COLLECTION;
        let url = self.collection_url(collection);
        tracing::debug!(%collection, %url, "Fetching collection");

        let mut request = self.http.get(&url).header(ACCEPT, "application/json");
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key.expose())
                .header(AUTHORIZATION, format!("Bearer {}", key.expose()));
        }

        let response = request
            .send()
            .await
            .map_err(|source| ContentError::Transport { collection, source })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ContentError::Transport { collection, source })?;

        if !status.is_success() {
            return Err(ContentError::Status {
                collection,
                status: status.as_u16(),
                message: error_message(&body)
                    .or_else(|| status.canonical_reason().map(str::to_string))
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        decode_envelope(collection, &body)
    }

    pub async fn articles(&self) -> Result<Vec<Article>, ContentError> {
        self.fetch().await
    }

    pub async fn courses(&self) -> Result<Vec<Course>, ContentError> {
        self.fetch().await
    }

    pub async fn partners(&self) -> Result<Vec<Partner>, ContentError> {
        self.fetch().await
    }

    pub async fn testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        self.fetch().await
    }
}

impl std::fmt::Debug for ContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .finish()
    }
}

fn decode_envelope<R: ContentRecord>(
    collection: Collection,
    body: &[u8],
) -> Result<Vec<R>, ContentError> {
    let envelope: Envelope<R> = serde_json::from_slice(body)
        .map_err(|source| ContentError::Malformed { collection, source })?;

    if !envelope.success {
        return Err(ContentError::Rejected {
            collection,
            message: envelope
                .message
                .unwrap_or_else(|| "request was not successful".to_string()),
        });
    }

    Ok(envelope.data)
}

/// Pull a message out of an error body such as `{"message": ".."}` or `{"error": ".."}`.
fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|field| value.get(*field).and_then(|v| v.as_str()))
        .map(str::to_string)
}
