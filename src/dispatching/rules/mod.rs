//! Built-in dispatching rules.
//!
//! - **Dynamic**: EDD, SPT (re-evaluated before every commit)
//! - **Static**: FCFS (one sort before dispatching starts)
//!
//! # Score Convention
//! All rules return lower scores for higher priority jobs.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::{Candidate, DispatchRule, RuleScore, StaticPriority};
use crate::models::Job;

// ======================== Dynamic rules ========================

/// Earliest Due Date.
///
/// Picks the eligible job with the smallest due date.
///
/// # Reference
/// Jackson (1955), optimal for minimizing maximum lateness on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Edd;

impl DispatchRule for Edd {
    fn name(&self) -> &'static str {
        "EDD"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate.job.due
    }

    fn description(&self) -> &'static str {
        "Earliest Due Date"
    }
}

/// Shortest Processing Time.
///
/// Picks the eligible job whose next unscheduled operation is shortest.
/// A job with nothing left to place scores `+inf`.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spt;

impl DispatchRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn evaluate(&self, candidate: &Candidate<'_>) -> RuleScore {
        candidate
            .next_operation()
            .map(|op| op.processing_time)
            .unwrap_or(f64::INFINITY)
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

// ======================== Static rules ========================

/// First Come, First Served.
///
/// Orders jobs once by release time; equal releases keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl StaticPriority for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, job: &Job) -> RuleScore {
        job.release
    }

    fn description(&self) -> &'static str {
        "First Come, First Served"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;

    fn job(id: &str, release: f64, due: f64, times: &[f64]) -> Job {
        times.iter().fold(
            Job::new(id).with_release(release).with_due(due),
            |job, &t| job.with_operation(Operation::new("W", t)),
        )
    }

    #[test]
    fn test_edd_picks_earliest_due() {
        let jobs = [
            job("late", 0.0, 50.0, &[1.0]),
            job("early", 0.0, 10.0, &[9.0]),
            job("middle", 0.0, 20.0, &[1.0]),
        ];
        let candidates: Vec<Candidate> = jobs.iter().map(|j| Candidate::new(j, 0)).collect();
        assert_eq!(Edd.select(&candidates), Some(1));
    }

    #[test]
    fn test_edd_ties_keep_input_order() {
        let jobs = [job("A", 0.0, 10.0, &[5.0]), job("B", 0.0, 10.0, &[1.0])];
        let candidates: Vec<Candidate> = jobs.iter().map(|j| Candidate::new(j, 0)).collect();
        assert_eq!(Edd.select(&candidates), Some(0));
    }

    #[test]
    fn test_spt_uses_next_operation() {
        // "B" has a long first operation but a short second one.
        let jobs = [job("A", 0.0, 0.0, &[3.0, 3.0]), job("B", 0.0, 0.0, &[9.0, 1.0])];

        let fresh: Vec<Candidate> = jobs.iter().map(|j| Candidate::new(j, 0)).collect();
        assert_eq!(Spt.select(&fresh), Some(0));

        let progressed = [Candidate::new(&jobs[0], 0), Candidate::new(&jobs[1], 1)];
        assert_eq!(Spt.select(&progressed), Some(1));
    }

    #[test]
    fn test_spt_exhausted_job_never_preferred() {
        let jobs = [job("done", 0.0, 0.0, &[0.5]), job("open", 0.0, 0.0, &[100.0])];
        let candidates = [Candidate::new(&jobs[0], 1), Candidate::new(&jobs[1], 0)];

        assert_eq!(Spt.evaluate(&candidates[0]), f64::INFINITY);
        assert_eq!(Spt.select(&candidates), Some(1));
    }

    #[test]
    fn test_select_empty() {
        assert_eq!(Edd.select(&[]), None);
        assert_eq!(Spt.select(&[]), None);
    }

    #[test]
    fn test_fcfs_order_is_stable() {
        let jobs = [
            job("J1", 5.0, 0.0, &[1.0]),
            job("J2", 0.0, 0.0, &[1.0]),
            job("J3", 5.0, 0.0, &[1.0]),
            job("J4", 2.0, 0.0, &[1.0]),
        ];
        assert_eq!(Fcfs.order(&jobs), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Edd.name(), "EDD");
        assert_eq!(Spt.name(), "SPT");
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Spt.description(), "Shortest Processing Time");
    }
}
