//! Eligible-job view passed to dispatching rules.

use crate::models::{Job, Operation};

/// A job that still has at least one operation to place, together with
/// its progress through the routing.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The job.
    pub job: &'a Job,
    /// Number of operations already committed.
    pub completed: usize,
}

impl<'a> Candidate<'a> {
    /// Creates a view of `job` with `completed` operations placed.
    pub fn new(job: &'a Job, completed: usize) -> Self {
        Self { job, completed }
    }

    /// The next unscheduled operation, if any.
    pub fn next_operation(&self) -> Option<&'a Operation> {
        self.job.operations.get(self.completed)
    }

    /// Operations not yet placed.
    pub fn remaining_operations(&self) -> usize {
        self.job.operations.len().saturating_sub(self.completed)
    }

    /// Processing time still to be placed.
    pub fn remaining_work(&self) -> f64 {
        self.job
            .operations
            .iter()
            .skip(self.completed)
            .map(|op| op.processing_time)
            .sum()
    }
}
