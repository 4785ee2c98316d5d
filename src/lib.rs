//! Reconset: a guarded state machine engine for reconciliation loops.
//!
//! An external caller — a controller, a scheduler, a plain loop — repeatedly
//! invokes a single step operation. On each step the machine evaluates the
//! guards leaving the current state in registration order, follows the first
//! satisfied guard to a new state if any, runs the current state's work
//! function, then runs its completion hook if present. Retry policy, backoff,
//! and timing all stay with the caller; the engine only decides where the
//! machine is and what runs there.
//!
//! # Core Concepts
//!
//! - **State**: a named unit of reconciliation work plus an optional
//!   post-work hook
//! - **Guard**: a no-argument predicate deciding whether an edge may be taken
//! - **Machine**: the transition graph, the active state, and the step
//!   operation
//!
//! # Example
//!
//! ```rust
//! use reconset::{Guard, Machine, State};
//!
//! // The result type is caller-defined and opaque to the engine. In a
//! // reconciler it typically carries scheduling hints.
//! #[derive(Clone, Debug, PartialEq)]
//! struct Outcome {
//!     requeue: bool,
//! }
//!
//! let mut machine: Machine<Outcome, String> = Machine::new();
//!
//! let pending = State::new("pending", || Ok(Outcome { requeue: true }));
//! let ready = State::new("ready", || Ok(Outcome { requeue: false }));
//!
//! machine.add_transition(pending.clone(), ready, Guard::new(|| Ok(true)));
//! machine.set_state(pending);
//!
//! let outcome = machine.reconcile()?;
//! assert_eq!(outcome, Outcome { requeue: false });
//! assert_eq!(machine.current_state().map(|s| s.name()), Some("ready"));
//! # Ok::<(), String>(())
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use self::builder::{BuildError, MachineBuilder};
pub use self::core::{
    CompletionHook, Guard, History, Machine, State, Transition, TransitionRecord, Work,
};
