//! Base trait for UI state in the MVI architecture.

/// Marker trait for state snapshots.
///
/// States are cloned out to the rendering layer, compared to skip redundant
/// redraws, and start from a well-defined `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
