mod common;

use formflow::flow::Reducer;
use formflow::{FieldAction, FieldReducer, FieldState};

fn edited_touched() -> FieldState {
    FieldState {
        value: "edited".to_string(),
        touched: true,
        initial: "start".to_string(),
    }
}

#[test]
fn change_replaces_value() {
    let state = FieldReducer::reduce(
        FieldState::default(),
        FieldAction::Change {
            value: "hello".to_string(),
        },
    );
    assert_eq!(state.value, "hello");
}

#[test]
fn change_preserves_touched_and_initial() {
    let state = FieldReducer::reduce(
        edited_touched(),
        FieldAction::Change {
            value: "other".to_string(),
        },
    );
    assert_eq!(state.value, "other");
    assert!(state.touched);
    assert_eq!(state.initial, "start");
}

#[test]
fn blur_sets_touched() {
    let state = FieldReducer::reduce(FieldState::default(), FieldAction::Blur);
    assert!(state.touched);
}

#[test]
fn blur_preserves_value() {
    let state = FieldReducer::reduce(edited_touched(), FieldAction::Blur);
    assert_eq!(state.value, "edited");
}

#[test]
fn blur_is_idempotent() {
    let once = FieldReducer::reduce(FieldState::default(), FieldAction::Blur);
    let twice = FieldReducer::reduce(once.clone(), FieldAction::Blur);
    assert_eq!(once, twice);
}

#[test]
fn reset_restores_initial_and_clears_touched() {
    let state = FieldReducer::reduce(edited_touched(), FieldAction::Reset);
    assert_eq!(state.value, "start");
    assert!(!state.touched);
    assert_eq!(state.initial, "start");
}

#[test]
fn reset_on_pristine_state_is_identity() {
    let pristine = FieldState::with_initial("start");
    let state = FieldReducer::reduce(pristine.clone(), FieldAction::Reset);
    assert_eq!(state, pristine);
}
