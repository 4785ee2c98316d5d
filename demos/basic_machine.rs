//! Basic Machine
//!
//! This example demonstrates building a small machine by hand and driving
//! it from the outside.
//!
//! Key concepts:
//! - States as named value records carrying work callables
//! - Guarded transitions evaluated in registration order
//! - A terminal state keeps re-running its work on every step
//!
//! Run with: cargo run --example basic_machine

use reconset::{Guard, Machine, State};

fn main() {
    println!("=== Basic Machine Example ===\n");

    let mut machine: Machine<&str, String> = Machine::new();

    let created = State::new("created", || Ok("requeue"));
    let running = State::new("running", || Ok("done"));

    machine.add_transition(created.clone(), running, Guard::always());
    machine.set_state(created);

    let mut names: Vec<_> = machine.states().keys().collect();
    names.sort();
    println!("Registered states: {names:?}");
    println!(
        "Current state: {:?}",
        machine.current_state().map(|s| s.name())
    );

    let outcome = machine.reconcile().expect("step failed");
    println!("\nFirst step result: {outcome}");
    println!(
        "Current state: {:?}",
        machine.current_state().map(|s| s.name())
    );

    // `running` has no outgoing edges, so further steps stay put.
    let outcome = machine.reconcile().expect("step failed");
    println!("\nSecond step result: {outcome}");
    println!("Path so far: {:?}", machine.history().path());

    println!("\n=== Example Complete ===");
}
