//! API key resolution for the content service.

use super::types::ContentConfig;

/// Environment variable that overrides `content.api_key`.
pub const API_KEY_ENV: &str = "SHOWCASE_CONTENT_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value for request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ContentConfig {
    /// Resolve the API key: environment first, then the config file.
    ///
    /// Empty values count as unset.
    pub fn resolve_api_key(&self) -> Option<SecureString> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        resolve_key(from_env, self.api_key.as_deref())
    }
}

fn resolve_key(from_env: Option<String>, from_file: Option<&str>) -> Option<SecureString> {
    from_env
        .filter(|key| !key.trim().is_empty())
        .or_else(|| {
            from_file
                .filter(|key| !key.trim().is_empty())
                .map(str::to_string)
        })
        .map(SecureString::new)
}
