//! Base trait for actions.

/// Marker trait for action objects.
///
/// An action is a requested mutation (a user edit, a focus change, a
/// reset). Actions carry data but no behavior; reducers interpret them.
pub trait Action: Send + 'static {}
