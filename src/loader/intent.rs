//! Intents for the collection loader.

use crate::ui::mvi::Intent;

/// Events in the life of a fetch cycle.
#[derive(Debug, Clone)]
pub enum LoaderIntent<T> {
    /// A fetch tagged `generation` has been issued.
    Started { generation: u64 },

    /// The fetch tagged `generation` resolved; `items` already has the
    /// load policy applied.
    Succeeded { generation: u64, items: Vec<T> },

    /// The fetch tagged `generation` failed. `hint` is the short form of
    /// `message` for display.
    Failed {
        generation: u64,
        message: String,
        hint: String,
    },

    /// The owner went away; outstanding fetches must not land.
    Detached,
}

impl<T: Send + 'static> Intent for LoaderIntent<T> {}
