//! Pure state transitions for a single field.

use crate::flow::Reducer;

use super::action::FieldAction;
use super::state::FieldState;

/// Reducer for field state transitions.
///
/// Pure function — validity is derived outside the reducer, so the
/// transition table stays total and side-effect free.
pub struct FieldReducer;

impl Reducer for FieldReducer {
    type State = FieldState;
    type Action = FieldAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            FieldAction::Change { value } => FieldState { value, ..state },

            FieldAction::Blur => FieldState {
                touched: true,
                ..state
            },

            // Single replacement: no observer can see the value restored
            // while touched is still set, or the other way around.
            FieldAction::Reset => FieldState {
                value: state.initial.clone(),
                touched: false,
                initial: state.initial,
            },
        }
    }
}
