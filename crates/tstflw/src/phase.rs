use std::fmt;

/// One of the three lifecycle hooks of a [`Task`](crate::Task).
///
/// Variants are declared in execution order, so `Ord` and the discriminant
/// follow the order in which the orchestrator runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Arrange and act.
    When,
    /// Assert.
    Then,
    /// Cleanup. Optional for implementors.
    End,
}

impl Phase {
    /// All phases, in execution order.
    pub const ALL: [Phase; 3] = [Phase::When, Phase::Then, Phase::End];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::When => "when",
            Self::Then => "then",
            Self::End => "end",
        }
    }

    /// Whether implementors must provide this phase themselves.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::End)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
