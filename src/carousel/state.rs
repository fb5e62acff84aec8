//! State for the carousel.

use crate::ui::mvi::UiState;

/// Which way the carousel is moving.
///
/// `Right` is produced by `next`: content leaves to the left and the new
/// item enters from the right. `Left` is the mirror image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Label for status lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Side the outgoing item slides towards.
    pub fn exit_side(&self) -> SlideOffset {
        match self {
            Direction::Right => SlideOffset::OffLeft,
            Direction::Left => SlideOffset::OffRight,
        }
    }

    /// Side the incoming item is placed on before sliding in.
    pub fn entry_side(&self) -> SlideOffset {
        match self {
            Direction::Right => SlideOffset::OffRight,
            Direction::Left => SlideOffset::OffLeft,
        }
    }
}

/// Transition phases: `Idle → SlideOut → Reposition → SlideIn → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Current item animates towards the exit side.
    SlideOut,
    /// Index has moved; new item sits on the entry side without animation.
    Reposition,
    /// New item animates to the centre.
    SlideIn,
}

/// Horizontal resting position of the displayed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOffset {
    Centered,
    OffLeft,
    OffRight,
}

impl SlideOffset {
    /// -1.0, 0.0 or 1.0 in units of the viewport width.
    pub fn as_unit(&self) -> f32 {
        match self {
            SlideOffset::Centered => 0.0,
            SlideOffset::OffLeft => -1.0,
            SlideOffset::OffRight => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselState {
    /// Always in `[0, item_count)`, or 0 for an empty carousel.
    pub current_index: usize,
    pub item_count: usize,
    /// True from leaving `Idle` until returning to it.
    pub is_animating: bool,
    pub direction: Direction,
    pub phase: Phase,
    /// Index that becomes current on entering `Reposition`.
    pub target_index: usize,
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Where the displayed item is heading in the current phase, and
    /// whether it gets there with an animated transition.
    pub fn slide_target(&self) -> (SlideOffset, bool) {
        match self.phase {
            Phase::Idle => (SlideOffset::Centered, false),
            Phase::SlideOut => (self.direction.exit_side(), true),
            Phase::Reposition => (self.direction.entry_side(), false),
            Phase::SlideIn => (SlideOffset::Centered, true),
        }
    }
}
