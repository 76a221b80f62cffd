//! RAII guard for cleanup that must survive a failing phase.
//!
//! [`run`](crate::run) skips `end` once `when` or `then` fails. A task that
//! acquires something in `when` and must release it regardless can hold a
//! [`CleanupGuard`] instead: the cleanup runs when the guard is dropped,
//! which happens on success, on an early `Err`, and while unwinding a panic.

use tracing::debug;

/// Runs a cleanup closure exactly once when dropped, unless disarmed.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use tstflw::CleanupGuard;
///
/// let released = Cell::new(false);
/// {
///     let _guard = CleanupGuard::new(|| released.set(true));
/// }
/// assert!(released.get());
/// ```
///
/// A cleanup closure that panics while a phase panic is already unwinding
/// aborts the process, so keep it infallible.
pub struct CleanupGuard<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> CleanupGuard<F> {
    #[must_use = "dropping the guard immediately runs the cleanup"]
    pub fn new(cleanup: F) -> Self {
        Self {
            cleanup: Some(cleanup),
        }
    }

    /// Cancel the cleanup. Dropping the guard afterwards does nothing.
    pub fn disarm(&mut self) {
        self.cleanup = None;
    }

    /// Whether dropping the guard will still run the cleanup.
    pub fn is_armed(&self) -> bool {
        self.cleanup.is_some()
    }

    /// Run the cleanup now instead of at drop.
    pub fn trigger(mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl<F: FnOnce()> Drop for CleanupGuard<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            debug!(
                panicking = std::thread::panicking(),
                "Cleanup guard dropped while armed - running cleanup"
            );
            cleanup();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_guard_runs_on_drop() {
        let runs = Cell::new(0);
        let guard = CleanupGuard::new(|| runs.set(runs.get() + 1));
        assert!(guard.is_armed());
        drop(guard);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_disarmed_guard_does_nothing() {
        let runs = Cell::new(0);
        let mut guard = CleanupGuard::new(|| runs.set(runs.get() + 1));
        guard.disarm();
        assert!(!guard.is_armed());
        drop(guard);
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn test_trigger_runs_once() {
        let runs = Cell::new(0);
        let guard = CleanupGuard::new(|| runs.set(runs.get() + 1));
        guard.trigger();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_guard_runs_during_unwind() {
        let runs = Cell::new(0);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = CleanupGuard::new(|| runs.set(runs.get() + 1));
            panic!("phase failed");
        }));

        assert!(result.is_err());
        assert_eq!(runs.get(), 1);
    }
}
