//! Actions a field controller dispatches.

use crate::flow::Action;

/// Mutations applicable to a single field.
#[derive(Debug, Clone)]
pub enum FieldAction {
    /// Replace the current value with the latest input content.
    Change { value: String },
    /// Mark the field as interacted with. Idempotent.
    Blur,
    /// Restore the initial value and clear the touched flag in one step.
    Reset,
}

impl Action for FieldAction {}
