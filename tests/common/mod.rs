//! Shared test helpers.

#![allow(dead_code)]

use formflow::{validate, FieldController, FormAggregate};

/// Field accepting any non-blank value, starting empty.
pub fn required_field() -> FieldController {
    FieldController::new(validate::required, "")
}

/// Field accepting values containing '@', starting empty.
pub fn email_field() -> FieldController {
    FieldController::new(validate::email, "")
}

/// Two-field form mirroring the classic name/e-mail entry form.
pub fn name_email_form() -> FormAggregate {
    let mut form = FormAggregate::new();
    form.insert("name", required_field()).unwrap();
    form.insert("email", email_field()).unwrap();
    form
}
