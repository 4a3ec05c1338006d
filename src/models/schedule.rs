//! Schedule (solution) model.
//!
//! A schedule is the output of one dispatch run: the rule that produced
//! it, the makespan, the job sequence on every machine, and the committed
//! operation intervals.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};

/// The result of a dispatch run.
///
/// Immutable once built. Serialized field names follow the flat record
/// layout used for storage (`schedule_type`, `time`, `machines`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Name of the rule that produced this schedule (e.g. "EDD").
    #[serde(rename = "schedule_type")]
    pub rule: String,
    /// Latest machine availability time reached.
    #[serde(rename = "time")]
    pub makespan: f64,
    /// One entry per machine, including idle ones.
    pub machines: Vec<MachineSchedule>,
    /// Committed operations, in commit order.
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

/// The job sequence of one machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineSchedule {
    /// Owning workcenter.
    pub workcenter: String,
    /// Machine name.
    pub machine: String,
    /// Job ids in assignment order. A job appears once per committed operation.
    #[serde(rename = "operations")]
    pub job_ids: Vec<String>,
}

/// One operation committed to a machine interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Job the operation belongs to.
    pub job_id: String,
    /// Index of the operation in the job's routing.
    pub operation: usize,
    /// Workcenter the operation required.
    pub workcenter: String,
    /// Machine that processes it.
    pub machine: String,
    /// Start time.
    pub start: f64,
    /// End time.
    pub end: f64,
}

impl Assignment {
    /// Processing duration (end - start).
    #[inline]
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl MachineSchedule {
    /// Creates an empty machine sequence.
    pub fn new(workcenter: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            workcenter: workcenter.into(),
            machine: machine.into(),
            job_ids: Vec::new(),
        }
    }

    /// Whether no job was assigned to this machine.
    pub fn is_idle(&self) -> bool {
        self.job_ids.is_empty()
    }
}

impl Schedule {
    /// Creates a schedule.
    pub fn new(
        rule: impl Into<String>,
        makespan: f64,
        machines: Vec<MachineSchedule>,
        assignments: Vec<Assignment>,
    ) -> Self {
        Self {
            rule: rule.into(),
            makespan,
            machines,
            assignments,
        }
    }

    /// Makespan (C_max).
    pub fn makespan(&self) -> f64 {
        self.makespan
    }

    /// Finds the sequence of a machine by name.
    pub fn machine(&self, name: &str) -> Option<&MachineSchedule> {
        self.machines.iter().find(|m| m.machine == name)
    }

    /// Returns all assignments of a job, in commit order.
    pub fn assignments_for_job(&self, job_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .collect()
    }

    /// Returns all assignments on a machine, in commit order.
    pub fn assignments_for_machine(&self, machine: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.machine == machine)
            .collect()
    }

    /// Earliest start of any of the job's operations.
    pub fn job_start_time(&self, job_id: &str) -> Option<f64> {
        self.assignments_for_job(job_id)
            .iter()
            .map(|a| a.start)
            .reduce(f64::min)
    }

    /// Completion time of a job (latest end of its operations).
    pub fn job_completion_time(&self, job_id: &str) -> Option<f64> {
        self.assignments_for_job(job_id)
            .iter()
            .map(|a| a.end)
            .reduce(f64::max)
    }

    /// Busy time of a machine divided by the makespan.
    ///
    /// Returns `None` if the makespan is not positive.
    pub fn machine_utilization(&self, machine: &str) -> Option<f64> {
        if self.makespan <= 0.0 {
            return None;
        }
        let busy: f64 = self
            .assignments_for_machine(machine)
            .iter()
            .map(|a| a.duration())
            .sum();
        Some(busy / self.makespan)
    }

    /// Number of committed operations.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
