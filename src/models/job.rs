//! Job and operation models.
//!
//! A job is a unit of work released to the shop floor. It carries a
//! routing: an ordered list of operations, each of which names the
//! workcenter that must process it.
//!
//! # Time Representation
//! Times are plain `f64` values relative to a scheduling epoch (t=0).
//! The caller decides the unit (minutes, hours, shifts).
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

use super::Rgb;

/// A single processing step of a job.
///
/// Immutable once built. Its position in [`Job::operations`] is its
/// position in the job's routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Name of the workcenter that must process this operation.
    pub workcenter: String,
    /// Processing time (non-negative).
    pub processing_time: f64,
    /// Free-form status tag (e.g. "A").
    pub status: String,
}

impl Operation {
    /// Creates an operation on the given workcenter.
    pub fn new(workcenter: impl Into<String>, processing_time: f64) -> Self {
        Self {
            workcenter: workcenter.into(),
            processing_time,
            status: String::new(),
        }
    }

    /// Sets the status tag.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// A job to be scheduled.
///
/// Owned by the caller and read-only to the dispatch engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub job_id: String,
    /// Release (ready) time: no operation may start earlier.
    pub release: f64,
    /// Due date.
    pub due: f64,
    /// Tardiness cost multiplier.
    pub weight: f64,
    /// Routing, in processing order.
    pub operations: Vec<Operation>,
    /// Display color. Ignored by the engine.
    #[serde(default)]
    pub rgb: Option<Rgb>,
}

impl Job {
    /// Creates a job released at t=0 with weight 1 and no operations.
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            release: 0.0,
            due: 0.0,
            weight: 1.0,
            operations: Vec::new(),
            rgb: None,
        }
    }

    /// Sets the release time.
    pub fn with_release(mut self, release: f64) -> Self {
        self.release = release;
        self
    }

    /// Sets the due date.
    pub fn with_due(mut self, due: f64) -> Self {
        self.due = due;
        self
    }

    /// Sets the tardiness weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Appends an operation to the routing.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, rgb: Rgb) -> Self {
        self.rgb = Some(rgb);
        self
    }

    /// Total processing time across the routing.
    pub fn total_processing_time(&self) -> f64 {
        self.operations.iter().map(|op| op.processing_time).sum()
    }

    /// Whether this job has any operations.
    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Tardiness for a given completion time: `max(0, completion - due)`.
    pub fn tardiness(&self, completion: f64) -> f64 {
        (completion - self.due).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("J1")
            .with_release(2.0)
            .with_due(10.0)
            .with_weight(3.0)
            .with_operation(Operation::new("W1", 4.0).with_status("A"))
            .with_color(Rgb(0, 64, 128));

        assert_eq!(job.job_id, "J1");
        assert_eq!(job.release, 2.0);
        assert_eq!(job.due, 10.0);
        assert_eq!(job.weight, 3.0);
        assert_eq!(job.operations.len(), 1);
        assert_eq!(job.operations[0].workcenter, "W1");
        assert_eq!(job.operations[0].status, "A");
        assert_eq!(job.rgb, Some(Rgb(0, 64, 128)));
    }

    #[test]
    fn test_total_processing_time() {
        let job = Job::new("J1")
            .with_operation(Operation::new("W1", 1.5))
            .with_operation(Operation::new("W2", 2.5));

        assert!((job.total_processing_time() - 4.0).abs() < 1e-10);
        assert!(job.has_operations());
    }

    #[test]
    fn test_empty_job() {
        let job = Job::new("empty");
        assert_eq!(job.total_processing_time(), 0.0);
        assert!(!job.has_operations());
    }

    #[test]
    fn test_tardiness() {
        let job = Job::new("J1").with_due(5.0);
        assert_eq!(job.tardiness(3.0), 0.0);
        assert_eq!(job.tardiness(5.0), 0.0);
        assert_eq!(job.tardiness(8.0), 3.0);
    }

    #[test]
    fn test_job_deserialize_without_color() {
        let json = r#"{
            "job_id": "J7",
            "release": 1,
            "due": 9,
            "weight": 2,
            "operations": [{"workcenter": "W", "processing_time": 3, "status": "A"}]
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_id, "J7");
        assert_eq!(job.operations[0].processing_time, 3.0);
        assert!(job.rgb.is_none());
    }
}
