//! Intents for the carousel.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Advance to the following item (wraps around).
    Next,

    /// Go back to the preceding item (wraps around).
    Previous,

    /// The dwell time of the current animated phase has passed.
    DwellElapsed,

    /// The renderer committed a frame showing the current state.
    FrameCommitted,

    /// The displayed collection changed size.
    SetItemCount { count: usize },
}

impl Intent for CarouselIntent {}
