//! Directed, guarded edges between states.

use super::guard::Guard;
use super::state::State;

/// A guarded edge.
///
/// The source state is implied by where the edge is stored: the machine
/// groups edges by source-state name, in registration order. The edge
/// itself carries only the target and the guard.
pub struct Transition<R, E> {
    target: State<R, E>,
    guard: Guard<E>,
}

impl<R, E> Transition<R, E> {
    /// Create an edge to `target` gated by `guard`.
    pub fn new(target: State<R, E>, guard: Guard<E>) -> Self {
        Transition { target, guard }
    }

    /// The state this edge leads to.
    pub fn target(&self) -> &State<R, E> {
        &self.target
    }

    /// The predicate gating this edge.
    pub fn guard(&self) -> &Guard<E> {
        &self.guard
    }
}

impl<R, E> Clone for Transition<R, E> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
            guard: self.guard.clone(),
        }
    }
}
