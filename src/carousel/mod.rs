//! Carousel animation controller.
//!
//! Rotating displays (testimonials, course categories, mentors) step
//! through their items with a staged transition:
//!
//! ```text
//! Idle ──next/previous──→ SlideOut ──dwell──→ Reposition ──frame──→ SlideIn ──dwell──→ Idle
//! ```
//!
//! Only one transition runs at a time; navigation while animating is
//! ignored. Time comes from an injected [`Clock`] so the whole cycle can be
//! driven deterministically without a screen.

mod clock;
mod controller;
mod intent;
mod reducer;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{CarouselController, CarouselTiming, SlideFrame, DEFAULT_DWELL};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, Direction, Phase, SlideOffset};
