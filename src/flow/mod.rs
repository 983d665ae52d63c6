//! Unidirectional data-flow primitives.
//!
//! Mutation is modeled as explicit message passing: a typed action value
//! routed through a pure reducer, never ambient mutable state.
//!
//! ```text
//! Action ──→ Reducer ──→ State
//! ```
//!
//! - **State**: immutable container, cloned to produce successors
//! - **Action**: a requested mutation
//! - **Reducer**: the pure `(State, Action) -> State` transition function

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
