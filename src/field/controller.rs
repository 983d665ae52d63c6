//! Controller owning one field's state and validator.

use crate::flow::Reducer;
use crate::validate::Validator;

use super::action::FieldAction;
use super::reducer::FieldReducer;
use super::state::{FieldSnapshot, FieldState};

/// Owns a single input field: raw state plus its validation predicate.
///
/// All mutations dispatch a [`FieldAction`] through [`FieldReducer`].
/// Validity is recomputed from the validator on every read and never
/// cached, so validators must be cheap and pure.
pub struct FieldController {
    state: FieldState,
    validator: Validator,
}

impl FieldController {
    /// Controller with the given validator, starting from `initial`.
    pub fn new(
        validator: impl Fn(&str) -> bool + Send + Sync + 'static,
        initial: impl Into<String>,
    ) -> Self {
        FieldController {
            state: FieldState::with_initial(initial),
            validator: Box::new(validator),
        }
    }

    pub(crate) fn from_parts(validator: Validator, initial: String) -> Self {
        FieldController {
            state: FieldState::with_initial(initial),
            validator,
        }
    }

    /// Replace the current value.
    ///
    /// No validation happens here; validity is recomputed lazily on the
    /// next snapshot.
    pub fn change(&mut self, value: impl Into<String>) {
        self.dispatch(FieldAction::Change {
            value: value.into(),
        });
    }

    /// Mark the field as touched. Idempotent.
    pub fn blur(&mut self) {
        self.dispatch(FieldAction::Blur);
    }

    /// Restore the initial value and clear the touched flag atomically.
    pub fn reset(&mut self) {
        self.dispatch(FieldAction::Reset);
    }

    /// Pure read of the current state with derived validity.
    pub fn snapshot(&self) -> FieldSnapshot {
        let is_valid = self.is_valid();
        FieldSnapshot {
            value: self.state.value.clone(),
            touched: self.state.touched,
            is_valid,
            show_error: self.state.touched && !is_valid,
        }
    }

    /// Whether the current value passes the validator.
    pub fn is_valid(&self) -> bool {
        (self.validator)(&self.state.value)
    }

    pub(crate) fn value(&self) -> &str {
        &self.state.value
    }

    fn dispatch(&mut self, action: FieldAction) {
        tracing::trace!("field action: {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = FieldReducer::reduce(state, action);
    }
}
