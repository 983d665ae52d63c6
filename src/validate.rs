//! Validation predicates.
//!
//! A validator is any pure `Fn(&str) -> bool`. The two functions here are
//! the stock checks the classic name/e-mail form uses; plain `fn` items
//! coerce to closures, so they slot directly into
//! [`FieldController::new`](crate::FieldController::new).

/// Boxed validation predicate held by a field for its whole lifetime.
pub type Validator = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Accepts any value that is non-empty after trimming whitespace.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Accepts values containing an `'@'`.
pub fn email(value: &str) -> bool {
    value.contains('@')
}
