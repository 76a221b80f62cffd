use thiserror::Error;

use crate::phase::Phase;

/// Errors raised by the framework itself.
///
/// Failures from a task's own phases are never converted into this type;
/// they reach the caller exactly as the phase returned them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Task is missing its required `{0}` phase")]
    MissingPhase(Phase),
}

impl FlowError {
    /// Create a missing phase error.
    pub fn missing(phase: Phase) -> Self {
        Self::MissingPhase(phase)
    }

    /// The phase the error refers to.
    pub fn phase(&self) -> Phase {
        match self {
            Self::MissingPhase(phase) => *phase,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FlowError::missing(Phase::Then);
        assert_eq!(error.to_string(), "Task is missing its required `then` phase");
        assert_eq!(error.phase(), Phase::Then);
    }
}
