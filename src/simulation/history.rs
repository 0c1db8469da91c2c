//! Undo history for the simulation driver.

use crate::policy::Policy;
use crate::simulation::StepReport;

/// Everything needed to put the driver back where it was.
///
/// Holds a deep copy of the policy, so restoring one never shares state
/// with the live policy or with other checkpoints.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    pub policy: Policy,
    pub position: usize,
    pub last_report: Option<StepReport>,
}

/// Stack of checkpoints, newest last.
#[derive(Debug, Clone, Default)]
pub struct History {
    checkpoints: Vec<Checkpoint>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state before a mutating step.
    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.checkpoints.push(checkpoint);
    }

    /// Take the most recent checkpoint.
    pub fn pop(&mut self) -> Option<Checkpoint> {
        self.checkpoints.pop()
    }

    pub fn clear(&mut self) {
        self.checkpoints.clear();
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
