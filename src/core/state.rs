//! State values for the reconcile machine.
//!
//! A state is a named unit of reconciliation work plus an optional
//! post-work hook. States are immutable value records: the machine keeps
//! its own copy of whichever state is current, and copies are cheap
//! because the callables are `Arc`-shared.

use std::fmt;
use std::sync::Arc;

/// Work function executed on every step while its state is current.
///
/// `R` is the caller-defined reconciliation result, `E` the caller-defined
/// error type. Both pass through the engine untouched.
pub type Work<R, E> = Arc<dyn Fn() -> Result<R, E> + Send + Sync>;

/// Hook invoked after a state's work function has run.
pub type CompletionHook<E> = Arc<dyn Fn() -> Result<(), E> + Send + Sync>;

/// A named node in the machine.
///
/// The name is the state's identity: two states with the same name are the
/// same state for transition purposes, whatever their callables are. No two
/// registered states may share a name or they are indistinguishable.
///
/// # Example
///
/// ```rust
/// use reconset::State;
///
/// let state: State<&str, String> = State::new("pending", || Ok("requeue"));
/// assert_eq!(state.name(), "pending");
/// assert_eq!(state.work(), Ok("requeue"));
/// ```
pub struct State<R, E> {
    name: String,
    work: Work<R, E>,
    on_completion: Option<CompletionHook<E>>,
}

impl<R, E> State<R, E> {
    /// Create a state from a name and a work function.
    ///
    /// The work function is evaluated with no arguments; it closes over
    /// whatever external context it needs.
    pub fn new<F>(name: impl Into<String>, work: F) -> Self
    where
        F: Fn() -> Result<R, E> + Send + Sync + 'static,
    {
        State {
            name: name.into(),
            work: Arc::new(work),
            on_completion: None,
        }
    }

    /// Attach a completion hook, invoked after every run of this state's
    /// work function.
    ///
    /// A failing hook overrides the work outcome for that step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reconset::State;
    ///
    /// let state: State<(), String> = State::new("ready", || Ok(()))
    ///     .with_completion(|| Ok(()));
    /// assert_eq!(state.run_completion(), Some(Ok(())));
    /// ```
    pub fn with_completion<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
    {
        self.on_completion = Some(Arc::new(hook));
        self
    }

    /// The state's identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the work function.
    pub fn work(&self) -> Result<R, E> {
        (self.work)()
    }

    /// Run the completion hook, or return `None` if the state has none.
    pub fn run_completion(&self) -> Option<Result<(), E>> {
        self.on_completion.as_ref().map(|hook| hook())
    }
}

impl<R, E> Clone for State<R, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            work: Arc::clone(&self.work),
            on_completion: self.on_completion.as_ref().map(Arc::clone),
        }
    }
}

impl<R, E> fmt::Debug for State<R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("on_completion", &self.on_completion.is_some())
            .finish()
    }
}

/// States compare by name alone.
impl<R, E> PartialEq for State<R, E> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R, E> Eq for State<R, E> {}
