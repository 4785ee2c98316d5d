//! The reconcile-driving state machine.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, error};

use super::guard::Guard;
use super::history::{History, TransitionRecord};
use super::state::State;
use super::transition::Transition;

/// A finite state machine driven by an external reconciliation loop.
///
/// The machine holds a named set of states, a directed graph of guarded
/// edges between them, and the single currently active state. The caller
/// builds the graph once with [`add_transition`](Machine::add_transition),
/// picks a starting state with [`set_state`](Machine::set_state), then
/// calls [`reconcile`](Machine::reconcile) once per tick.
///
/// The machine is single-threaded: one driver steps it at a time, and
/// nothing suspends internally. Callers reconciling independent entities
/// each own a separate machine.
///
/// # Example
///
/// ```rust
/// use reconset::{Guard, Machine, State};
///
/// let mut machine: Machine<&str, String> = Machine::new();
///
/// let pending = State::new("pending", || Ok("requeue"));
/// let ready = State::new("ready", || Ok("done"));
///
/// machine.add_transition(pending.clone(), ready, Guard::always());
/// machine.set_state(pending);
///
/// // The guard is satisfied, so this step transitions to `ready` and runs
/// // its work.
/// assert_eq!(machine.reconcile(), Ok("done"));
/// assert_eq!(machine.current_state().map(|s| s.name()), Some("ready"));
///
/// // `ready` has no outgoing edges; further steps keep re-running it.
/// assert_eq!(machine.reconcile(), Ok("done"));
/// ```
pub struct Machine<R, E> {
    transitions: HashMap<String, Vec<Transition<R, E>>>,
    current_transitions: Vec<Transition<R, E>>,
    current: Option<State<R, E>>,
    states: HashMap<String, State<R, E>>,
    history: History,
}

impl<R, E> Machine<R, E> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Machine {
            transitions: HashMap::new(),
            current_transitions: Vec::new(),
            current: None,
            states: HashMap::new(),
            history: History::new(),
        }
    }

    /// Register a directed edge from `from` to `to`, gated by `guard`.
    ///
    /// The edge is appended to the end of `from`'s outgoing list; edges are
    /// evaluated in registration order, so earlier registration means
    /// higher priority. Both endpoint states are registered into the vertex
    /// set as a side effect. Registering a state name again silently
    /// replaces the stored definition — the vertex set is a plain
    /// name-keyed map and the last write wins.
    pub fn add_transition(&mut self, from: State<R, E>, to: State<R, E>, guard: Guard<E>) {
        self.transitions
            .entry(from.name().to_string())
            .or_default()
            .push(Transition::new(to.clone(), guard));

        self.states.insert(from.name().to_string(), from);
        self.states.insert(to.name().to_string(), to);
    }

    /// Set the active state.
    ///
    /// Re-entering the state with the current state's name is a no-op: the
    /// stored state, its cached edge list, and the history are untouched.
    /// Otherwise the machine records the change, stores its own copy of
    /// `state`, and recomputes the cached outgoing-edge list — empty when
    /// the new state has no registered edges, which is not an error.
    pub fn set_state(&mut self, state: State<R, E>) {
        if let Some(current) = &self.current {
            if current.name() == state.name() {
                return;
            }
            debug!("Transitioning from {} to {}", current.name(), state.name());
            self.history = self.history.record(TransitionRecord::now(
                Some(current.name().to_string()),
                state.name(),
            ));
        } else {
            debug!("Setting starting state {}", state.name());
            self.history = self
                .history
                .record(TransitionRecord::now(None, state.name()));
        }

        self.current_transitions = self
            .transitions
            .get(state.name())
            .cloned()
            .unwrap_or_default();
        self.current = Some(state);
    }

    /// Execute one step: evaluate guards, maybe transition, run the current
    /// state's work, then its completion hook.
    ///
    /// The guards leaving the current state are evaluated in registration
    /// order; the first satisfied guard selects its edge and later guards
    /// are never evaluated. A guard error aborts the step before any state
    /// change or work. The work outcome is returned unchanged unless the
    /// completion hook fails, in which case the hook's error wins.
    ///
    /// # Panics
    ///
    /// Panics if no state has ever been set. Stepping an uninitialized
    /// machine has no defined behavior and is a programming error, not a
    /// recoverable one.
    pub fn reconcile(&mut self) -> Result<R, E>
    where
        E: fmt::Display,
    {
        if let Some(target) = self.next_target()? {
            self.set_state(target);
        }

        let Some(current) = self.current.clone() else {
            panic!("reconcile called with no current state");
        };

        let outcome = current.work();

        if let Some(Err(err)) = current.run_completion() {
            error!(
                "Error running completion hook for state {}: {}",
                current.name(),
                err
            );
            return Err(err);
        }

        outcome
    }

    /// The target of the first edge whose guard is satisfied, if any.
    fn next_target(&self) -> Result<Option<State<R, E>>, E> {
        for transition in &self.current_transitions {
            if transition.guard().check()? {
                return Ok(Some(transition.target().clone()));
            }
        }
        Ok(None)
    }

    /// The full registered vertex set, keyed by state name.
    pub fn states(&self) -> &HashMap<String, State<R, E>> {
        &self.states
    }

    /// Look up a registered state by name.
    pub fn state(&self, name: &str) -> Option<&State<R, E>> {
        self.states.get(name)
    }

    /// The currently active state, or `None` before the first
    /// [`set_state`](Machine::set_state).
    pub fn current_state(&self) -> Option<&State<R, E>> {
        self.current.as_ref()
    }

    /// The log of state changes applied so far.
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl<R, E> Default for Machine<R, E> {
    fn default() -> Self {
        Self::new()
    }
}
