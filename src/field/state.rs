//! State for a single tracked input.

use crate::flow::State;
use serde::Serialize;

/// Raw state of one tracked input.
///
/// Validity is deliberately absent: it is derived from the controller's
/// validator on every snapshot, never stored, so a stale cached result
/// cannot exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    /// Current content, mutated only through the change action.
    pub value: String,
    /// Set on first blur or submit attempt; cleared only by reset.
    pub touched: bool,
    /// Construction-time value that reset restores.
    pub initial: String,
}

impl State for FieldState {}

impl FieldState {
    /// State for a field starting at `initial`, untouched.
    pub fn with_initial(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        FieldState {
            value: initial.clone(),
            touched: false,
            initial,
        }
    }
}

/// Read-only view of a field, with validity derived at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    /// Current content.
    pub value: String,
    /// Whether the user has blurred the field (or a submit was attempted).
    pub touched: bool,
    /// Result of the field's validator against `value`.
    pub is_valid: bool,
    /// `touched && !is_valid` — the error-visibility gate.
    pub show_error: bool,
}
