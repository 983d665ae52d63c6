//! Validation-driven form-input state.
//!
//! Tracks, for each input field, the trio the classic form pattern needs:
//! the current value, a `touched` flag set on first blur, and validity
//! derived from a pure predicate. Error visibility follows from those
//! (`show_error = touched && !is_valid`), so a binding layer never flashes
//! an error before the user has interacted with the field.
//!
//! State changes flow one way:
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Snapshot
//!    ↑                               │
//!    └───────── binding layer ───────┘
//! ```
//!
//! The crate is a plain state container: no rendering, no I/O, no async.
//! Routing keystrokes and focus events into [`FieldController::change`] and
//! [`FieldController::blur`], and rendering snapshots back out, is the
//! embedding UI's job.
//!
//! # Example
//!
//! ```
//! use formflow::{validate, FieldController, FormAggregate};
//!
//! let mut form = FormAggregate::new();
//! form.insert("name", FieldController::new(validate::required, ""))?;
//! form.insert("email", FieldController::new(validate::email, ""))?;
//!
//! form.field_mut("name").unwrap().change("Ada");
//! form.field_mut("email").unwrap().change("ada@example.com");
//! assert!(form.is_valid());
//!
//! let values = form.submit()?;
//! assert_eq!(values["name"], "Ada");
//! # Ok::<(), formflow::FormError>(())
//! ```

pub mod error;
pub mod field;
pub mod flow;
pub mod form;
pub mod validate;

pub use error::FormError;
pub use field::{
    FieldAction, FieldBuilder, FieldController, FieldReducer, FieldSnapshot, FieldState,
};
pub use form::{FormAggregate, SharedForm};
