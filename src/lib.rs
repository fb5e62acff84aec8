//! Content loading and carousel core for the training-centre site.
//!
//! The site renders listings (articles, courses, mitra, testimonials)
//! pulled from a hosted content service and rotates featured content in
//! carousels. This crate holds the two stateful pieces behind that:
//!
//! - [`loader`]: fetches a collection and exposes `{items, loading, error}`,
//!   re-fetching on dependency change and dropping stale responses.
//! - [`carousel`]: the slide-out / reposition / slide-in state machine.
//!
//! [`ui`] wires both into a terminal preview of the home page.

pub mod carousel;
pub mod config;
pub mod content;
pub mod listing;
pub mod loader;
pub mod logging;
pub mod ui;
