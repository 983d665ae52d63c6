//! Ordered collection of named fields with combined validity.

use std::collections::BTreeMap;

use crate::error::FormError;
use crate::field::{FieldController, FieldSnapshot};

/// A submittable form: named fields in registration order.
///
/// The aggregate only reads its children's snapshots; fields never share
/// storage with each other.
#[derive(Default)]
pub struct FormAggregate {
    fields: Vec<(String, FieldController)>,
}

impl FormAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under `name`.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidConfig`] for an empty or duplicate name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        controller: FieldController,
    ) -> Result<(), FormError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FormError::invalid_config("field name is empty"));
        }
        if self.fields.iter().any(|(existing, _)| *existing == name) {
            return Err(FormError::invalid_config(format!(
                "duplicate field name '{name}'"
            )));
        }
        self.fields.push((name, controller));
        Ok(())
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldController> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    /// Mutable lookup, for routing change/blur events from the binding
    /// layer.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldController> {
        self.fields
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    /// Combined validity: true when every field's validator passes.
    ///
    /// Live signal for enabling a submit control; reads only, touches
    /// nothing.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, field)| field.is_valid())
    }

    /// Per-field snapshots in registration order.
    pub fn snapshots(&self) -> Vec<(String, FieldSnapshot)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.snapshot()))
            .collect()
    }

    /// Reset every field to its initial state.
    pub fn reset_all(&mut self) {
        for (_, field) in &mut self.fields {
            field.reset();
        }
    }

    /// Attempt submission.
    ///
    /// Every field is touched first so all errors surface at once, even
    /// for fields the user never visited. On failure the failing field
    /// names are returned in registration order and no value changes; on
    /// success the collected `name -> value` map is returned and every
    /// field resets for a fresh entry cycle.
    ///
    /// # Errors
    ///
    /// [`FormError::Validation`] naming the fields that failed.
    pub fn submit(&mut self) -> Result<BTreeMap<String, String>, FormError> {
        for (_, field) in &mut self.fields {
            field.blur();
        }

        let failing: Vec<String> = self
            .fields
            .iter()
            .filter(|(_, field)| !field.is_valid())
            .map(|(name, _)| name.clone())
            .collect();
        if !failing.is_empty() {
            tracing::debug!("submit rejected, invalid fields: {:?}", failing);
            return Err(FormError::Validation { fields: failing });
        }

        let values: BTreeMap<String, String> = self
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().to_string()))
            .collect();
        self.reset_all();
        tracing::debug!("submit accepted with {} fields", values.len());
        Ok(values)
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
