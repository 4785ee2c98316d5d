//! Reconcile Loop
//!
//! Drives a machine the way a reconciliation controller would: an external
//! loop calls `reconcile()` once per tick, and the returned result — opaque
//! to the engine — tells the loop whether to requeue.
//!
//! Run with: RUST_LOG=debug cargo run --example reconcile_loop

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reconset::{Guard, MachineBuilder, State};

/// Scheduling hint returned by each state's work.
#[derive(Clone, Debug, PartialEq)]
struct ReconcileResult {
    requeue_after: Option<Duration>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Replica count "observed" by the guard; each pending step brings one
    // more replica up.
    let ready_replicas = Arc::new(AtomicUsize::new(0));
    let desired = 3;

    let observed = Arc::clone(&ready_replicas);
    let pending = State::new("pending", move || {
        let now_up = observed.fetch_add(1, Ordering::SeqCst) + 1;
        println!("scaling: {now_up}/{desired} replicas ready");
        Ok(ReconcileResult {
            requeue_after: Some(Duration::from_millis(100)),
        })
    });

    let ready = State::new("ready", || {
        Ok(ReconcileResult {
            requeue_after: None,
        })
    })
    .with_completion(|| {
        println!("deployment is ready");
        Ok(())
    });

    let observed = Arc::clone(&ready_replicas);
    let all_up = Guard::new(move || Ok(observed.load(Ordering::SeqCst) >= desired));

    let mut machine = MachineBuilder::new()
        .initial(pending.clone())
        .transition(pending, ready, all_up)
        .build()
        .expect("machine should build");

    loop {
        let outcome = machine.reconcile().unwrap_or_else(|err: String| {
            eprintln!("reconcile failed: {err}");
            std::process::exit(1);
        });

        match outcome.requeue_after {
            Some(delay) => std::thread::sleep(delay),
            None => break,
        }
    }

    println!("path: {:?}", machine.history().path());
}
