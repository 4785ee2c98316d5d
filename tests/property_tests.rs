//! Property-based tests for the reconcile machine.
//!
//! These tests use proptest to verify the engine's ordering and stability
//! guarantees across many randomly generated graphs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use reconset::{Guard, Machine, State};

fn named_state(name: String) -> State<String, String> {
    let result = name.clone();
    State::new(name, move || Ok(result.clone()))
}

proptest! {
    #[test]
    fn guards_evaluate_in_registration_order(count in 1usize..8) {
        let evaluated = Arc::new(Mutex::new(Vec::new()));
        let mut machine: Machine<String, String> = Machine::new();

        for i in 0..count {
            let log = Arc::clone(&evaluated);
            machine.add_transition(
                named_state("source".to_string()),
                named_state(format!("target-{i}")),
                Guard::new(move || {
                    log.lock().unwrap().push(i);
                    Ok(false)
                }),
            );
        }
        machine.set_state(named_state("source".to_string()));

        // No guard is satisfied, so the step stays in place and has
        // evaluated every guard exactly once, in order.
        prop_assert_eq!(machine.reconcile(), Ok("source".to_string()));
        let order = evaluated.lock().unwrap().clone();
        prop_assert_eq!(order, (0..count).collect::<Vec<_>>());
    }

    #[test]
    fn first_true_guard_selects_its_target(
        verdicts in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let mut machine: Machine<String, String> = Machine::new();

        for (i, verdict) in verdicts.iter().copied().enumerate() {
            machine.add_transition(
                named_state("source".to_string()),
                named_state(format!("target-{i}")),
                Guard::new(move || Ok(verdict)),
            );
        }
        machine.set_state(named_state("source".to_string()));

        let outcome = machine.reconcile();
        let current = machine
            .current_state()
            .map(|s| s.name().to_string())
            .unwrap();

        match verdicts.iter().position(|&v| v) {
            Some(i) => {
                prop_assert_eq!(outcome, Ok(format!("target-{i}")));
                prop_assert_eq!(current, format!("target-{i}"));
            }
            None => {
                prop_assert_eq!(outcome, Ok("source".to_string()));
                prop_assert_eq!(current, "source".to_string());
            }
        }
    }

    #[test]
    fn terminal_state_is_stable_across_steps(steps in 1usize..16) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let mut machine: Machine<&'static str, String> = Machine::new();
        machine.set_state(State::new("terminal", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("done")
        }));

        for _ in 0..steps {
            prop_assert_eq!(machine.reconcile(), Ok("done"));
        }

        prop_assert_eq!(runs.load(Ordering::SeqCst), steps);
        prop_assert_eq!(machine.current_state().map(|s| s.name()), Some("terminal"));
    }

    #[test]
    fn set_state_is_idempotent_by_name(repeats in 1usize..8) {
        let mut machine: Machine<&'static str, String> = Machine::new();
        machine.set_state(State::new("only", || Ok("first")));

        for _ in 0..repeats {
            machine.set_state(State::new("only", || Ok("replacement")));
        }

        // The original definition stays current and only the initial set
        // was ever recorded.
        prop_assert_eq!(machine.reconcile(), Ok("first"));
        prop_assert_eq!(machine.history().records().len(), 1);
    }

    #[test]
    fn edges_only_leave_from_their_registered_source(
        sources in prop::collection::hash_set("[a-d]", 1..4)
    ) {
        let mut machine: Machine<String, String> = Machine::new();

        for source in &sources {
            machine.add_transition(
                named_state(source.clone()),
                named_state(format!("{source}-target")),
                Guard::always(),
            );
        }

        // A state with no registered edges never transitions, whatever else
        // is in the graph.
        machine.set_state(named_state("isolated".to_string()));
        prop_assert_eq!(machine.reconcile(), Ok("isolated".to_string()));
        prop_assert_eq!(
            machine.current_state().map(|s| s.name().to_string()),
            Some("isolated".to_string())
        );
    }
}
