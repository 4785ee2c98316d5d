//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Guard, Machine, State};

/// Builder assembling a machine with a fluent API.
///
/// Transitions are registered in the order they are added, which is also
/// the order their guards are evaluated in.
///
/// # Example
///
/// ```rust
/// use reconset::{Guard, MachineBuilder, State};
///
/// let pending: State<&str, String> = State::new("pending", || Ok("requeue"));
/// let ready = State::new("ready", || Ok("done"));
///
/// let mut machine = MachineBuilder::new()
///     .initial(pending.clone())
///     .transition(pending, ready, Guard::always())
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.reconcile(), Ok("done"));
/// ```
pub struct MachineBuilder<R, E> {
    initial: Option<State<R, E>>,
    transitions: Vec<(State<R, E>, State<R, E>, Guard<E>)>,
}

impl<R, E> MachineBuilder<R, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: State<R, E>) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a guarded transition from `from` to `to`.
    pub fn transition(mut self, from: State<R, E>, to: State<R, E>, guard: Guard<E>) -> Self {
        self.transitions.push((from, to, guard));
        self
    }

    /// Build the machine: register every transition in order, then enter
    /// the initial state.
    ///
    /// A machine with an initial state and no transitions is valid — it is
    /// terminal from the start and keeps re-running the initial state's
    /// work on every step.
    pub fn build(self) -> Result<Machine<R, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = Machine::new();
        for (from, to, guard) in self.transitions {
            machine.add_transition(from, to, guard);
        }
        machine.set_state(initial);

        Ok(machine)
    }
}

impl<R, E> Default for MachineBuilder<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(name: &str, result: &'static str) -> State<&'static str, String> {
        State::new(name, move || Ok(result))
    }

    #[test]
    fn build_requires_an_initial_state() {
        let result = MachineBuilder::<(), String>::new().build();
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn initial_state_alone_is_a_valid_machine() {
        let mut machine = MachineBuilder::new()
            .initial(state("only", "still here"))
            .build()
            .unwrap();

        assert_eq!(machine.current_state().unwrap().name(), "only");
        assert_eq!(machine.reconcile(), Ok("still here"));
        assert_eq!(machine.current_state().unwrap().name(), "only");
    }

    #[test]
    fn transitions_register_their_endpoints() {
        let machine = MachineBuilder::new()
            .initial(state("a", "ra"))
            .transition(state("a", "ra"), state("b", "rb"), Guard::new(|| Ok(false)))
            .transition(state("a", "ra"), state("c", "rc"), Guard::new(|| Ok(false)))
            .build()
            .unwrap();

        assert!(machine.states().contains_key("b"));
        assert!(machine.states().contains_key("c"));
        assert_eq!(machine.states().len(), 3);
    }

    #[test]
    fn built_machine_steps_through_its_graph() {
        let mut machine = MachineBuilder::new()
            .initial(state("a", "ra"))
            .transition(state("a", "ra"), state("b", "rb"), Guard::always())
            .transition(state("b", "rb"), state("c", "rc"), Guard::always())
            .build()
            .unwrap();

        assert_eq!(machine.reconcile(), Ok("rb"));
        assert_eq!(machine.reconcile(), Ok("rc"));
        assert_eq!(machine.current_state().unwrap().name(), "c");
        assert_eq!(machine.history().path(), ["a", "b", "c"]);
    }
}
