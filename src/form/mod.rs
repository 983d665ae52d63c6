//! Multi-field aggregation and submission.

mod aggregate;
mod store;

pub use aggregate::FormAggregate;
pub use store::SharedForm;
