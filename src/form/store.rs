//! Thread-safe form handle.
//!
//! The core types are single-threaded containers with no interior
//! mutability. `SharedForm` wraps an aggregate in `Arc<RwLock<..>>` so a
//! multi-threaded host gets the exclusive-access guarantee each mutating
//! operation needs.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::FormError;
use crate::field::FieldSnapshot;
use crate::form::aggregate::FormAggregate;

/// Clone-able handle to a form shared across threads.
///
/// Every operation holds the lock for its whole duration, making each
/// change/blur/submit/reset an atomic, non-reentrant unit.
#[derive(Clone)]
pub struct SharedForm {
    inner: Arc<RwLock<FormAggregate>>,
}

impl SharedForm {
    pub fn new(form: FormAggregate) -> Self {
        SharedForm {
            inner: Arc::new(RwLock::new(form)),
        }
    }

    /// Route a change event to the named field.
    ///
    /// Returns false when no such field exists.
    pub fn change(&self, name: &str, value: impl Into<String>) -> bool {
        let mut guard = self.inner.write();
        match guard.field_mut(name) {
            Some(field) => {
                field.change(value);
                true
            }
            None => false,
        }
    }

    /// Route a blur event to the named field.
    ///
    /// Returns false when no such field exists.
    pub fn blur(&self, name: &str) -> bool {
        let mut guard = self.inner.write();
        match guard.field_mut(name) {
            Some(field) => {
                field.blur();
                true
            }
            None => false,
        }
    }

    /// Snapshot of the named field.
    pub fn snapshot(&self, name: &str) -> Option<FieldSnapshot> {
        self.inner.read().field(name).map(|field| field.snapshot())
    }

    /// Per-field snapshots in registration order.
    pub fn snapshots(&self) -> Vec<(String, FieldSnapshot)> {
        self.inner.read().snapshots()
    }

    /// Combined validity across all fields.
    pub fn is_valid(&self) -> bool {
        self.inner.read().is_valid()
    }

    /// Submit under the write lock.
    ///
    /// # Errors
    ///
    /// [`FormError::Validation`] naming the fields that failed.
    pub fn submit(&self) -> Result<BTreeMap<String, String>, FormError> {
        self.inner.write().submit()
    }

    /// Reset every field to its initial state.
    pub fn reset_all(&self) {
        self.inner.write().reset_all();
    }
}
