//! Single-field state: value, touched flag, derived validity.

mod action;
mod builder;
mod controller;
mod reducer;
mod state;

pub use action::FieldAction;
pub use builder::FieldBuilder;
pub use controller::FieldController;
pub use reducer::FieldReducer;
pub use state::{FieldSnapshot, FieldState};
