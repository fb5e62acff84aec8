//! Terminal preview of the landing content.
//!
//! Everything visual lives here; the loaders and the carousel controller
//! it drives are renderer-agnostic.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::PreviewApp;
pub use runtime::run;
