//! Configuration-driven field construction.

use crate::error::FormError;
use crate::validate::Validator;

use super::controller::FieldController;

/// Builder for a [`FieldController`] whose validator may come from
/// runtime configuration.
///
/// Building without a validator fails immediately with
/// [`FormError::InvalidConfig`]; the failure is never deferred to first
/// use of the field.
#[derive(Default)]
pub struct FieldBuilder {
    validator: Option<Validator>,
    initial: String,
}

impl FieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation predicate.
    pub fn validator(mut self, validator: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Set the initial value. Defaults to empty.
    pub fn initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    /// Build the controller.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidConfig`] when no validator was supplied.
    pub fn build(self) -> Result<FieldController, FormError> {
        let validator = self
            .validator
            .ok_or_else(|| FormError::invalid_config("field has no validator"))?;
        Ok(FieldController::from_parts(validator, self.initial))
    }
}
