//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_content;

use parking_lot::Mutex;
use showcase::carousel::{CarouselController, CarouselTiming, ManualClock};
use showcase::config::ContentConfig;
use showcase::content::{ContentClient, ContentError};
use showcase::loader::{CollectionLoader, LoadPolicy};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Client pointed at `base_url` with a test key and short timeouts.
pub fn content_client(base_url: &str, api_key: Option<&str>) -> ContentClient {
    let config = ContentConfig {
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    ContentClient::new(&config).expect("client should build")
}

// -- Carousel helpers ---------------------------------------------------------

pub const DWELL: Duration = Duration::from_millis(500);

pub fn manual_carousel(count: usize) -> (CarouselController<ManualClock>, ManualClock) {
    manual_carousel_with(count, None)
}

pub fn manual_carousel_with(
    count: usize,
    auto_advance: Option<Duration>,
) -> (CarouselController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let timing = CarouselTiming {
        dwell: DWELL,
        auto_advance,
    };
    (CarouselController::new(count, timing, clock.clone()), clock)
}

/// Drive a started transition through every phase back to idle.
pub fn settle(carousel: &mut CarouselController<ManualClock>, clock: &ManualClock) {
    clock.advance(DWELL);
    carousel.poll();
    carousel.frame_committed();
    clock.advance(DWELL);
    carousel.poll();
}

// -- Loader helpers -----------------------------------------------------------

type Gate = Result<Vec<u32>, ContentError>;

/// Fetcher whose calls each wait for a result released by the test.
///
/// The dependency value picks the gate, so overlapping fetches can be
/// resolved in any order.
#[derive(Clone, Default)]
pub struct GatedFetcher {
    gates: Arc<Mutex<HashMap<u32, oneshot::Receiver<Gate>>>>,
    calls: Arc<Mutex<Vec<u32>>>,
}

impl GatedFetcher {
    /// Register the gate for dependency `key`; send on the returned sender
    /// to resolve that fetch.
    pub fn gate(&self, key: u32) -> oneshot::Sender<Gate> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().insert(key, rx);
        tx
    }

    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().clone()
    }

    pub fn loader(&self, initial: u32, policy: LoadPolicy<u32>) -> CollectionLoader<u32, u32> {
        let fetcher = self.clone();
        CollectionLoader::new("gated", initial, policy, move |key: u32| {
            fetcher.calls.lock().push(key);
            let gate = fetcher.gates.lock().remove(&key);
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(ContentError::Unavailable("gate dropped".into()))),
                    None => Err(ContentError::Unavailable(format!("no gate for {key}"))),
                }
            }
        })
    }
}
