//! Site configuration: content service, carousel timing, listing sizes and logging.

mod credentials;
mod loader;
mod types;

pub use credentials::{SecureString, API_KEY_ENV};
pub use loader::ConfigError;
pub use types::{CarouselConfig, Config, ContentConfig, ListingsConfig, LoggingConfig};
