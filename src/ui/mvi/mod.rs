//! Model-View-Intent (MVI) primitives.
//!
//! Both stateful components of the site (the collection loader and the
//! carousel) are written against these traits so that every state
//! transition lives in a pure reducer.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── timers / fetch results ──┘
//! ```
//!
//! - **State**: snapshot handed to the rendering layer
//! - **Intent**: user action (next, reload) or system event (dwell elapsed, fetch settled)
//! - **Reducer**: pure function from `(State, Intent)` to the next `State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
