//! Phase sequencing.
//!
//! [`given`] and [`run`] execute a task's phases strictly in the order
//! `when`, `then`, `end`, synchronously on the caller's thread. The first
//! failing phase stops the sequence and its error is returned unchanged, so
//! `end` does not run after a failed `when` or `then`. Panics unwind through
//! untouched.

use tracing::debug;

use crate::phase::Phase;
use crate::task::Task;

/// Run `task` to completion, consuming it.
///
/// ```
/// use std::convert::Infallible;
/// use tstflw::{given, Task};
///
/// struct Addition {
///     sum: i32,
/// }
///
/// impl Task for Addition {
///     type Error = Infallible;
///
///     fn when(&mut self) -> Result<(), Infallible> {
///         self.sum = 2 + 2;
///         Ok(())
///     }
///
///     fn then(&mut self) -> Result<(), Infallible> {
///         assert_eq!(self.sum, 4);
///         Ok(())
///     }
/// }
///
/// given(Addition { sum: 0 }).unwrap();
/// ```
pub fn given<T: Task>(mut task: T) -> Result<(), T::Error> {
    run(&mut task)
}

/// Run a borrowed task, leaving it with the caller afterwards.
///
/// Nothing is reset between calls; running the same instance again is only
/// meaningful if its phases allow it.
pub fn run<T: Task + ?Sized>(task: &mut T) -> Result<(), T::Error> {
    enter(Phase::When);
    task.when().map_err(|e| failed(Phase::When, e))?;

    enter(Phase::Then);
    task.then().map_err(|e| failed(Phase::Then, e))?;

    enter(Phase::End);
    task.end().map_err(|e| failed(Phase::End, e))?;

    debug!("Task completed");
    Ok(())
}

fn enter(phase: Phase) {
    debug!(phase = %phase, "Running phase");
}

fn failed<E>(phase: Phase, error: E) -> E {
    debug!(phase = %phase, "Phase failed");
    error
}
