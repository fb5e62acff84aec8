//! Reducer for the collection loader.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::LoaderIntent;
use super::state::LoaderState;

/// Reducer for fetch-cycle transitions.
///
/// Results are tagged with the generation captured when their fetch was
/// issued. Anything but the latest generation is stale and leaves the state
/// untouched, so a slow old response can never overwrite a newer one.
pub struct LoaderReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for LoaderReducer<T> {
    type State = LoaderState<T>;
    type Intent = LoaderIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if state.detached {
            return state;
        }

        match intent {
            LoaderIntent::Started { generation } => {
                if generation <= state.generation {
                    return state;
                }
                state.generation = generation;
                state.result.loading = true;
                state.result.error = None;
                state.result.error_hint = None;
                state
            }

            LoaderIntent::Succeeded { generation, items } => {
                if !state.accepts(generation) {
                    return state;
                }
                state.result.items = items;
                state.result.loading = false;
                state.result.error = None;
                state.result.error_hint = None;
                state
            }

            LoaderIntent::Failed {
                generation,
                message,
                hint,
            } => {
                if !state.accepts(generation) {
                    return state;
                }
                // Stale-while-error: keep whatever was shown before.
                state.result.loading = false;
                state.result.error = Some(message);
                state.result.error_hint = Some(hint);
                state
            }

            LoaderIntent::Detached => {
                state.detached = true;
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type R = LoaderReducer<u32>;

    fn settled(items: Vec<u32>, generation: u64) -> LoaderState<u32> {
        let state = R::reduce(LoaderState::default(), LoaderIntent::Started { generation });
        R::reduce(state, LoaderIntent::Succeeded { generation, items })
    }

    #[test]
    fn started_clears_error_and_keeps_items() {
        let state = settled(vec![1, 2], 1);
        let state = R::reduce(
            state,
            LoaderIntent::Failed {
                generation: 1,
                message: "ignored".into(),
                hint: "ignored".into(),
            },
        );
        // Already settled, a second result for generation 1 is ignored.
        assert!(state.result.error.is_none());

        let state = R::reduce(state, LoaderIntent::Started { generation: 2 });
        assert!(state.result.loading);
        assert!(state.result.error.is_none());
        assert!(state.result.error_hint.is_none());
        assert_eq!(state.result.items, vec![1, 2]);
    }

    #[test]
    fn success_replaces_items() {
        let state = settled(vec![1], 1);
        let state = R::reduce(state, LoaderIntent::Started { generation: 2 });
        let state = R::reduce(
            state,
            LoaderIntent::Succeeded {
                generation: 2,
                items: vec![9],
            },
        );
        assert_eq!(state.result.items, vec![9]);
        assert!(!state.result.loading);
    }

    #[test]
    fn failure_retains_items_and_sets_error() {
        let state = settled(vec![4, 5], 1);
        let state = R::reduce(state, LoaderIntent::Started { generation: 2 });
        let state = R::reduce(
            state,
            LoaderIntent::Failed {
                generation: 2,
                message: "Network Error".into(),
                hint: "Could not reach the content service".into(),
            },
        );
        assert!(!state.result.loading);
        assert_eq!(state.result.error.as_deref(), Some("Network Error"));
        assert_eq!(
            state.result.error_hint.as_deref(),
            Some("Could not reach the content service")
        );
        assert_eq!(state.result.items, vec![4, 5]);
    }

    #[test]
    fn stale_generation_is_ignored() {
        let state = R::reduce(LoaderState::default(), LoaderIntent::Started { generation: 1 });
        let state = R::reduce(state, LoaderIntent::Started { generation: 2 });
        let state = R::reduce(
            state,
            LoaderIntent::Succeeded {
                generation: 1,
                items: vec![1],
            },
        );
        assert!(state.result.loading);
        assert!(state.result.items.is_empty());
    }

    #[test]
    fn older_start_does_not_rewind_generation() {
        let state = R::reduce(LoaderState::default(), LoaderIntent::Started { generation: 5 });
        let state = R::reduce(state, LoaderIntent::Started { generation: 3 });
        assert_eq!(state.generation, 5);
    }

    #[test]
    fn detached_ignores_results() {
        let state = R::reduce(LoaderState::default(), LoaderIntent::Started { generation: 1 });
        let state = R::reduce(state, LoaderIntent::Detached);
        let state = R::reduce(
            state,
            LoaderIntent::Succeeded {
                generation: 1,
                items: vec![1],
            },
        );
        assert!(state.detached);
        assert!(state.result.items.is_empty());
    }
}
