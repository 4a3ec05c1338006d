//! Dispatching rules and the dispatch engine.
//!
//! Two rule shapes drive the engine:
//!
//! - [`DispatchRule`]: a per-step selector. The engine re-evaluates every
//!   eligible job before each commit (EDD, SPT).
//! - [`StaticPriority`]: a one-time ordering key. Jobs are sorted once and
//!   their routings committed in that order (FCFS).
//!
//! # Usage
//!
//! ```
//! use u_dispatch::dispatching::{DispatchEngine, DispatchPolicy};
//! use u_dispatch::models::{Job, Machine, Operation, Workcenter};
//!
//! let workcenters = vec![Workcenter::new("W").with_machine(Machine::new("M1"))];
//! let jobs = vec![Job::new("J1").with_due(5.0).with_operation(Operation::new("W", 2.0))];
//!
//! let schedule = DispatchEngine::new()
//!     .run(DispatchPolicy::Edd, &jobs, &workcenters)
//!     .unwrap();
//! assert_eq!(schedule.makespan, 2.0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod candidate;
mod engine;
mod policy;
pub mod rules;

pub use candidate::Candidate;
pub use engine::DispatchEngine;
pub use policy::{DispatchPolicy, PolicyParseError};

use crate::models::Job;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (scheduled first).
pub type RuleScore = f64;

/// A per-step dispatching rule.
///
/// # Score Convention
/// **Lower score = higher priority.** Ties go to the candidate that
/// comes first in the slice, which the engine keeps in job input order.
pub trait DispatchRule: Send + Sync + Debug {
    /// Rule name, stamped on the resulting schedule (e.g. "EDD").
    fn name(&self) -> &'static str;

    /// Scores one eligible job.
    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Picks the next job among `candidates`.
    ///
    /// Returns the index of the lowest-scoring candidate, the first one on
    /// ties, or `None` for an empty slice.
    fn select(&self, candidates: &[Candidate<'_>]) -> Option<usize> {
        let mut best: Option<(usize, RuleScore)> = None;
        for (idx, candidate) in candidates.iter().enumerate() {
            let score = self.evaluate(candidate);
            match best {
                Some((_, best_score)) if !score.total_cmp(&best_score).is_lt() => {}
                _ => best = Some((idx, score)),
            }
        }
        best.map(|(idx, _)| idx)
    }
}

/// A static priority: jobs are ordered once before any assignment.
pub trait StaticPriority: Send + Sync + Debug {
    /// Rule name, stamped on the resulting schedule (e.g. "FCFS").
    fn name(&self) -> &'static str;

    /// Sort key of a job. Lower keys are dispatched first.
    fn key(&self, job: &Job) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Job indices in dispatch order. The sort is stable.
    fn order(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.key(&jobs[a]).total_cmp(&self.key(&jobs[b])));
        indices
    }
}
