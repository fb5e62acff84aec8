//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (arrow keys, reload requests)
/// - System events (fetch results, elapsed timers, committed frames)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
