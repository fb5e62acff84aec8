use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::content::ContentError;
use crate::ui::mvi::Reducer;

use super::intent::LoaderIntent;
use super::policy::LoadPolicy;
use super::reducer::LoaderReducer;
use super::state::{CollectionResult, LoaderState};

/// Future returned by an injected retrieval function.
pub type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ContentError>> + Send>>;

/// A started fetch cycle. Await it or hand it to `tokio::spawn`.
pub type LoadTask = Pin<Box<dyn Future<Output = LoadOutcome> + Send>>;

type FetchFn<T, D> = dyn Fn(D) -> FetchFuture<T> + Send + Sync;

/// What happened to a fetch result when it settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result (success or failure) is now the visible state.
    Applied,
    /// A newer fetch was started, or the loader was torn down.
    Discarded,
}

/// Fetches a remote collection and exposes `{items, loading, error}`.
///
/// `D` is the dependency value handed to the retrieval function; a change
/// of dependencies starts a new fetch. Every fetch is tagged with a
/// generation taken when it starts, and only the most recently started one
/// may land. Clones share the same state.
pub struct CollectionLoader<T, D = ()> {
    inner: Arc<LoaderInner<T, D>>,
}

struct LoaderInner<T, D> {
    name: String,
    state: Mutex<LoaderState<T>>,
    deps: Mutex<D>,
    policy: LoadPolicy<T>,
    fetch: Box<FetchFn<T, D>>,
}

impl<T, D> Clone for CollectionLoader<T, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, D> CollectionLoader<T, D>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    D: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static,
{
    /// Create a loader. Nothing is fetched until `refresh` is called.
    pub fn new<F, Fut>(
        name: impl Into<String>,
        deps: D,
        policy: LoadPolicy<T>,
        fetch: F,
    ) -> Self
    where
        F: Fn(D) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<T>, ContentError>> + Send + 'static,
    {
        Self {
            inner: Arc::new(LoaderInner {
                name: name.into(),
                state: Mutex::new(LoaderState::default()),
                deps: Mutex::new(deps),
                policy,
                fetch: Box::new(move |deps: D| -> FetchFuture<T> { Box::pin(fetch(deps)) }),
            }),
        }
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> CollectionResult<T> {
        self.inner.state.lock().result.clone()
    }

    /// Generation of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.inner.state.lock().generation
    }

    pub fn dependencies(&self) -> D {
        self.inner.deps.lock().clone()
    }

    /// Start a fetch with the current dependencies.
    ///
    /// Used at mount and for explicit re-fetch after a failure.
    pub fn refresh(&self) -> LoadTask {
        let (generation, deps) = {
            let current = self.inner.deps.lock();
            (self.claim(), current.clone())
        };
        self.launch(generation, deps)
    }

    /// Record new dependencies and start a fetch if they changed.
    ///
    /// Returns `None` when `deps` equals the current dependencies.
    pub fn update_dependencies(&self, deps: D) -> Option<LoadTask> {
        // The generation is claimed while the new dependencies are still
        // locked, so the latest generation always fetches the stored deps.
        let generation = {
            let mut current = self.inner.deps.lock();
            if *current == deps {
                return None;
            }
            *current = deps.clone();
            self.claim()
        };
        Some(self.launch(generation, deps))
    }

    /// Detach the loader. Results still in flight are dropped and no new
    /// fetch will start.
    pub fn teardown(&self) {
        let mut state = self.inner.state.lock();
        *state = LoaderReducer::reduce(std::mem::take(&mut *state), LoaderIntent::Detached);
        tracing::debug!(loader = %self.inner.name, "Loader torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.state.lock().detached
    }

    /// Claim the next generation, or `None` once torn down.
    ///
    /// Lock order is deps, then state. Callers hold the deps lock.
    fn claim(&self) -> Option<u64> {
        let mut state = self.inner.state.lock();
        if state.detached {
            return None;
        }
        let generation = state.generation + 1;
        *state = LoaderReducer::reduce(
            std::mem::take(&mut *state),
            LoaderIntent::Started { generation },
        );
        Some(generation)
    }

    // The generation was claimed before the returned future is polled, so
    // start order decides which result wins.
    fn launch(&self, generation: Option<u64>, deps: D) -> LoadTask {
        let Some(generation) = generation else {
            return Box::pin(async { LoadOutcome::Discarded });
        };

        tracing::info!(loader = %self.inner.name, generation, ?deps, "Fetch started");

        let fetch = (self.inner.fetch)(deps);
        let inner = Arc::clone(&self.inner);
        Box::pin(async move {
            let result = fetch.await;
            inner.settle(generation, result)
        })
    }
}

impl<T, D> LoaderInner<T, D>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    fn settle(&self, generation: u64, result: Result<Vec<T>, ContentError>) -> LoadOutcome {
        let intent = match result {
            Ok(items) => LoaderIntent::Succeeded {
                generation,
                items: self.policy.apply(items),
            },
            Err(err) => {
                tracing::warn!(loader = %self.name, generation, error = %err, "Fetch failed");
                LoaderIntent::Failed {
                    generation,
                    message: err.to_string(),
                    hint: err.user_message().to_string(),
                }
            }
        };

        let mut state = self.state.lock();
        if !state.accepts(generation) {
            tracing::debug!(
                loader = %self.name,
                generation,
                latest = state.generation,
                "Discarding stale fetch result"
            );
            return LoadOutcome::Discarded;
        }

        *state = LoaderReducer::reduce(std::mem::take(&mut *state), intent);
        LoadOutcome::Applied
    }
}

impl<T, D> std::fmt::Debug for CollectionLoader<T, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionLoader")
            .field("name", &self.inner.name)
            .field("policy", &self.inner.policy)
            .finish()
    }
}
