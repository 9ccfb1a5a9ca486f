//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Replaced wholesale by the reducer, never patched in place
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes and for tests)
///
/// `Default` lets containers `std::mem::take` the state into the reducer.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
