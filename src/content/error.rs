//! Error types for content service access.

use thiserror::Error;

use super::records::Collection;

/// Errors that can occur while fetching a collection.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build content client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or other transport failure.
    #[error("Request for '{collection}' failed: {source}")]
    Transport {
        collection: Collection,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code.
    #[error("Content service returned {status} for '{collection}': {message}")]
    Status {
        collection: Collection,
        status: u16,
        message: String,
    },

    /// The body did not match the `{success, data, message}` envelope.
    #[error("Unexpected response for '{collection}': {source}")]
    Malformed {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    /// The envelope reported `success: false`.
    #[error("Content service rejected '{collection}': {message}")]
    Rejected {
        collection: Collection,
        message: String,
    },

    /// Failure reported by a retrieval function outside the HTTP client.
    #[error("{0}")]
    Unavailable(String),
}

impl ContentError {
    /// Short message shown under the detailed error in the preview.
    pub fn user_message(&self) -> &'static str {
        match self {
            ContentError::Client(_) => "Content client is misconfigured",
            ContentError::Transport { source, .. } if source.is_timeout() => {
                "The content service took too long to respond"
            }
            ContentError::Transport { .. } | ContentError::Unavailable(_) => {
                "Could not reach the content service"
            }
            ContentError::Status { .. } | ContentError::Rejected { .. } => {
                "The content service refused the request"
            }
            ContentError::Malformed { .. } => "The content service sent an unexpected response",
        }
    }

    /// Collection the failed request targeted, when known.
    pub fn collection(&self) -> Option<Collection> {
        match self {
            ContentError::Transport { collection, .. }
            | ContentError::Status { collection, .. }
            | ContentError::Malformed { collection, .. }
            | ContentError::Rejected { collection, .. } => Some(*collection),
            ContentError::Client(_) | ContentError::Unavailable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_names_collection() {
        let err = ContentError::Rejected {
            collection: Collection::Courses,
            message: "table is private".into(),
        };
        assert_eq!(
            err.to_string(),
            "Content service rejected 'courses': table is private"
        );
        assert_eq!(err.collection(), Some(Collection::Courses));
        assert_eq!(err.user_message(), "The content service refused the request");
    }

    #[test]
    fn unavailable_keeps_message_verbatim() {
        let err = ContentError::Unavailable("Network Error".into());
        assert_eq!(err.to_string(), "Network Error");
        assert!(err.collection().is_none());
    }

    #[test]
    fn malformed_maps_to_unexpected_response() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ContentError::Malformed {
            collection: Collection::Articles,
            source,
        };
        assert!(err.to_string().starts_with("Unexpected response for 'articles'"));
    }
}
