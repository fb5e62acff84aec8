//! Async collection loader.
//!
//! Wraps "fetch a list from the content service" behind a state snapshot
//! the rendering layer can poll: `{items, loading, error}`. Dependency
//! changes trigger a re-fetch, results of superseded fetches are dropped,
//! and a [`LoadPolicy`] sorts and truncates what gets shown.
//!
//! Failures never escape: they become the `error` string of the snapshot,
//! and the previous items stay visible until a later fetch succeeds.

mod collection;
mod intent;
mod policy;
mod reducer;
mod state;

pub use collection::{CollectionLoader, FetchFuture, LoadOutcome, LoadTask};
pub use intent::LoaderIntent;
pub use policy::LoadPolicy;
pub use reducer::LoaderReducer;
pub use state::{CollectionResult, LoaderState};
