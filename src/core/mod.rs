//! Core engine types.
//!
//! This module contains the transition-evaluation-and-execution engine:
//! - State values via [`State`]
//! - Guard predicates via [`Guard`]
//! - Guarded edges via [`Transition`]
//! - The driving [`Machine`]
//! - The [`History`] of applied state changes

mod guard;
mod history;
mod machine;
mod state;
mod transition;

pub use guard::Guard;
pub use history::{History, TransitionRecord};
pub use machine::Machine;
pub use state::{CompletionHook, State, Work};
pub use transition::Transition;
