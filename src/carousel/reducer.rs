//! Reducer for the carousel.

use crate::ui::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{CarouselState, Direction, Phase};

/// Reducer for carousel transitions.
///
/// Timers live in the controller; this only decides what each event means
/// in each phase. `current_index` changes on entering `Reposition` and
/// nowhere else, except when `SetItemCount` has to clamp it.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Next => begin(state, Direction::Right),
            CarouselIntent::Previous => begin(state, Direction::Left),

            CarouselIntent::DwellElapsed => match state.phase {
                Phase::SlideOut => CarouselState {
                    phase: Phase::Reposition,
                    current_index: state.target_index,
                    ..state
                },
                Phase::SlideIn => CarouselState {
                    phase: Phase::Idle,
                    is_animating: false,
                    ..state
                },
                Phase::Idle | Phase::Reposition => state,
            },

            CarouselIntent::FrameCommitted => match state.phase {
                Phase::Reposition => CarouselState {
                    phase: Phase::SlideIn,
                    ..state
                },
                _ => state,
            },

            CarouselIntent::SetItemCount { count } => {
                let current_index = if count == 0 {
                    0
                } else {
                    state.current_index.min(count - 1)
                };
                CarouselState {
                    item_count: count,
                    current_index,
                    target_index: current_index,
                    is_animating: false,
                    phase: Phase::Idle,
                    direction: state.direction,
                }
            }
        }
    }
}

fn begin(state: CarouselState, direction: Direction) -> CarouselState {
    if state.is_animating || state.item_count == 0 {
        return state;
    }

    let count = state.item_count;
    let target_index = match direction {
        Direction::Right => (state.current_index + 1) % count,
        Direction::Left => (state.current_index + count - 1) % count,
    };

    CarouselState {
        phase: Phase::SlideOut,
        is_animating: true,
        direction,
        target_index,
        ..state
    }
}
