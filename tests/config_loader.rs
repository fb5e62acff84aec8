mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::temp_config;
use showcase::config::{Config, ConfigError};
use showcase::content::Collection;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.content.base_url, "http://127.0.0.1:54321/rest/v1");
    assert!(config.content.api_key.is_none());
    assert_eq!(config.content.timeout(), Duration::from_secs(10));
    assert_eq!(config.content.connect_timeout(), Duration::from_secs(5));

    assert_eq!(config.carousel.dwell(), Duration::from_millis(500));
    assert_eq!(config.carousel.auto_advance(), Some(Duration::from_secs(6)));

    assert_eq!(config.listings.limit_for(Collection::Articles), 6);
    assert_eq!(config.listings.limit_for(Collection::Courses), 8);
    assert_eq!(config.listings.limit_for(Collection::Partners), 12);
    assert_eq!(config.listings.limit_for(Collection::Testimonials), 10);

    assert_eq!(config.logging.level(), "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("showcase/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.carousel.dwell_ms, 500);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[content]
base_url = "https://cms.example.co/rest/v1"
api_key = "anon"

[carousel]
auto_advance_ms = 0
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.content.base_url, "https://cms.example.co/rest/v1");
    assert_eq!(config.content.api_key.as_deref(), Some("anon"));
    assert_eq!(config.content.timeout_seconds, 10);
    assert!(config.carousel.auto_advance().is_none());
    assert_eq!(config.carousel.dwell_ms, 500);
    assert_eq!(config.listings.articles_limit, 6);
}

#[test]
fn test_full_file_round_trips_every_section() {
    let (_dir, path) = temp_config(
        r#"
[content]
base_url = "http://localhost:8000/rest/v1"
timeout_seconds = 3
connect_timeout_seconds = 1

[carousel]
dwell_ms = 250
auto_advance_ms = 4000

[listings]
articles_limit = 3
courses_limit = 4
partners_limit = 5
testimonials_limit = 6

[logging]
level = "showcase=debug"
file = "/var/log/showcase.log"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.content.timeout(), Duration::from_secs(3));
    assert_eq!(config.carousel.dwell(), Duration::from_millis(250));
    assert_eq!(config.carousel.auto_advance(), Some(Duration::from_secs(4)));
    assert_eq!(config.listings.limit_for(Collection::Partners), 5);
    assert_eq!(config.logging.level(), "showcase=debug");
    assert_eq!(
        config.logging.file,
        Some(PathBuf::from("/var/log/showcase.log"))
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[content\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_validation_rejects_non_http_base_url() {
    let (_dir, path) = temp_config(
        r#"
[content]
base_url = "ftp://cms.example.co"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_validation_rejects_empty_base_url() {
    let mut config = Config::default();
    config.content.base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_rejects_zero_dwell() {
    let mut config = Config::default();
    config.carousel.dwell_ms = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("dwell_ms"));
}

#[test]
fn test_validation_rejects_zero_timeout() {
    let mut config = Config::default();
    config.content.connect_timeout_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_limit_override_touches_one_collection() {
    let limits = Config::default()
        .listings
        .with_limit(Collection::Courses, 2);
    assert_eq!(limits.limit_for(Collection::Courses), 2);
    assert_eq!(limits.limit_for(Collection::Articles), 6);
}
