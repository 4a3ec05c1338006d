//! Errors raised while dispatching.

use thiserror::Error;

/// A structural problem that aborts a dispatch run.
///
/// Runs are deterministic, so these are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulingError {
    /// The operation's workcenter is unknown or has no machines.
    #[error(
        "no candidate machine for operation {operation} of job '{job_id}': \
         workcenter '{workcenter}' has no machines"
    )]
    NoCandidateMachine {
        /// Job that owns the operation.
        job_id: String,
        /// Routing index of the operation.
        operation: usize,
        /// Workcenter the operation names.
        workcenter: String,
    },
}
