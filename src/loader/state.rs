//! State for the collection loader.

use crate::ui::mvi::UiState;

/// What the rendering layer sees for one remote list.
///
/// `error` is only set once a fetch has failed and `loading` is false.
/// `error_hint` travels with it: a short, reader-facing line for the same
/// failure. Items survive both the start of a new fetch and a failed one; only a
/// successful, current fetch replaces them.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResult<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub error_hint: Option<String>,
}

impl<T> Default for CollectionResult<T> {
    /// Loaders start out loading: the first fetch is issued at mount.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            error_hint: None,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for CollectionResult<T> {}

impl<T> CollectionResult<T> {
    /// Settled successfully with nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    pub fn is_failed(&self) -> bool {
        !self.loading && self.error.is_some()
    }
}

/// Loader state plus the generation of the most recently started fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderState<T> {
    pub result: CollectionResult<T>,
    /// Generation of the latest fetch; 0 before the first one.
    pub generation: u64,
    /// Set by teardown. A detached loader ignores every intent.
    pub detached: bool,
}

impl<T> Default for LoaderState<T> {
    fn default() -> Self {
        Self {
            result: CollectionResult::default(),
            generation: 0,
            detached: false,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for LoaderState<T> {}

impl<T> LoaderState<T> {
    /// True if a result tagged with `generation` may still be applied.
    pub fn accepts(&self, generation: u64) -> bool {
        !self.detached && generation == self.generation && self.result.loading
    }
}
