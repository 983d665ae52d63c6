//! Base trait for state containers.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything a snapshot needs)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + 'static {}
