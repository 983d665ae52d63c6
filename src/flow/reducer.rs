//! Reducer trait: pure state transitions.

use super::action::Action;
use super::state::State;

/// Transforms state in response to actions.
///
/// The reducer is the only place where state transitions happen. It must
/// be a pure function: `(State, Action) -> State`, no side effects.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;
}
