//! Tasks assembled from closures.
//!
//! Useful when phases are picked at runtime, e.g. a table of cases sharing a
//! `when` but checking different things in `then`. Unlike a [`Task`] impl,
//! a builder can be left without a required phase, so [`FnTaskBuilder::build`]
//! checks for `when` and `then` before anything runs.

use std::fmt;

use crate::error::{FlowError, Result};
use crate::phase::Phase;
use crate::task::Task;

type PhaseFn<'a, E> = Box<dyn FnMut() -> std::result::Result<(), E> + 'a>;

/// Closures indexed by [`Phase`] discriminant.
type PhaseTable<'a, E> = [Option<PhaseFn<'a, E>>; 3];

/// A [`Task`] whose phases are closures.
pub struct FnTask<'a, E> {
    phases: PhaseTable<'a, E>,
}

impl<'a, E> FnTask<'a, E> {
    /// Start an empty builder.
    pub fn builder() -> FnTaskBuilder<'a, E> {
        FnTaskBuilder::default()
    }

    /// Whether a cleanup closure was supplied.
    pub fn has_end(&self) -> bool {
        self.phases[Phase::End as usize].is_some()
    }

    fn call(&mut self, phase: Phase) -> std::result::Result<(), E> {
        match self.phases[phase as usize].as_mut() {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}

impl<E> Task for FnTask<'_, E> {
    type Error = E;

    fn when(&mut self) -> std::result::Result<(), E> {
        self.call(Phase::When)
    }

    fn then(&mut self) -> std::result::Result<(), E> {
        self.call(Phase::Then)
    }

    fn end(&mut self) -> std::result::Result<(), E> {
        self.call(Phase::End)
    }
}

impl<E> fmt::Debug for FnTask<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTask")
            .field("has_end", &self.has_end())
            .finish_non_exhaustive()
    }
}

/// Builder for [`FnTask`]. Setting a phase twice keeps the last closure.
pub struct FnTaskBuilder<'a, E> {
    phases: PhaseTable<'a, E>,
}

impl<E> Default for FnTaskBuilder<'_, E> {
    fn default() -> Self {
        Self {
            phases: [None, None, None],
        }
    }
}

impl<'a, E> FnTaskBuilder<'a, E> {
    /// Set the arrange/act closure.
    pub fn when(self, f: impl FnMut() -> std::result::Result<(), E> + 'a) -> Self {
        self.with_phase(Phase::When, Box::new(f))
    }

    /// Set the verification closure.
    pub fn then(self, f: impl FnMut() -> std::result::Result<(), E> + 'a) -> Self {
        self.with_phase(Phase::Then, Box::new(f))
    }

    /// Set the cleanup closure. Optional.
    pub fn end(self, f: impl FnMut() -> std::result::Result<(), E> + 'a) -> Self {
        self.with_phase(Phase::End, Box::new(f))
    }

    fn with_phase(mut self, phase: Phase, f: PhaseFn<'a, E>) -> Self {
        self.phases[phase as usize] = Some(f);
        self
    }

    /// First required phase without a closure, in execution order.
    pub fn missing_phase(&self) -> Option<Phase> {
        Phase::ALL
            .into_iter()
            .filter(Phase::is_required)
            .find(|phase| self.phases[*phase as usize].is_none())
    }

    /// Finish the task.
    ///
    /// Fails with [`FlowError::MissingPhase`] if `when` or `then` was never
    /// set, checking `when` first. A missing `end` becomes a no-op.
    pub fn build(self) -> Result<FnTask<'a, E>> {
        if let Some(phase) = self.missing_phase() {
            return Err(FlowError::missing(phase));
        }

        Ok(FnTask {
            phases: self.phases,
        })
    }
}
