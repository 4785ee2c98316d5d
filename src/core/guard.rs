//! Guard predicates for controlling state transitions.
//!
//! A guard is a no-argument predicate deciding whether an edge may be
//! taken. Guards can fail: a guard whose underlying check cannot be
//! evaluated returns an error, which aborts the whole step.

use std::sync::Arc;

/// Predicate gating a transition.
///
/// Evaluated with no arguments; it closes over whatever external context
/// it needs. Returns `Ok(true)` to take the edge, `Ok(false)` to leave it,
/// and `Err` when the check itself could not be performed.
///
/// # Example
///
/// ```rust
/// use reconset::Guard;
///
/// let replicas = 3;
/// let all_up: Guard<String> = Guard::new(move || Ok(replicas >= 3));
/// assert_eq!(all_up.check(), Ok(true));
/// ```
pub struct Guard<E> {
    predicate: Arc<dyn Fn() -> Result<bool, E> + Send + Sync>,
}

impl<E> Guard<E> {
    /// Create a guard from a predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> Result<bool, E> + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// A guard that is always satisfied, for unconditional edges.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reconset::Guard;
    ///
    /// let guard: Guard<String> = Guard::always();
    /// assert_eq!(guard.check(), Ok(true));
    /// ```
    pub fn always() -> Self {
        Self::new(|| Ok(true))
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> Result<bool, E> {
        (self.predicate)()
    }
}

impl<E> Clone for Guard<E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}
