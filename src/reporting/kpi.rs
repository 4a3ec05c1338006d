//! Schedule quality metrics (KPIs).
//!
//! Computes the classic single-objective measures from a completed
//! schedule and its input jobs. Only jobs with at least one committed
//! operation are counted.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | C_max | Latest job completion |
//! | T_max | Largest tardiness |
//! | ΣU_j | Number of late jobs |
//! | ΣC_j / ΣwC_j | (Weighted) sum of completion times |
//! | ΣT_j / ΣwT_j | (Weighted) sum of tardiness |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::BTreeMap;

use crate::models::{Job, Schedule};

/// Timing of one job in a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct JobTiming {
    /// Job identifier.
    pub job_id: String,
    /// Start of its first committed operation.
    pub start: f64,
    /// End of its last committed operation (completion time C_j).
    pub end: f64,
    /// max(0, C_j - d_j).
    pub tardiness: f64,
    /// Tardiness times the job weight.
    pub weighted_tardiness: f64,
}

impl JobTiming {
    /// Whether the job finished after its due date.
    pub fn is_late(&self) -> bool {
        self.tardiness > 0.0
    }
}

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Earliest operation start.
    pub start_time: f64,
    /// C_max.
    pub makespan: f64,
    /// T_max.
    pub max_tardiness: f64,
    /// ΣU_j.
    pub late_jobs: usize,
    /// ΣC_j.
    pub total_completion: f64,
    /// ΣwC_j.
    pub total_weighted_completion: f64,
    /// ΣT_j.
    pub total_tardiness: f64,
    /// ΣwT_j.
    pub total_weighted_tardiness: f64,
    /// Busy time / schedule makespan, per machine.
    pub utilization_by_machine: BTreeMap<String, f64>,
    /// Per-job timings, in input job order.
    pub jobs: Vec<JobTiming>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    pub fn calculate(schedule: &Schedule, jobs: &[Job]) -> Self {
        let mut timings = Vec::new();
        let mut total_completion = 0.0;
        let mut total_weighted_completion = 0.0;
        let mut total_tardiness = 0.0;
        let mut total_weighted_tardiness = 0.0;
        let mut max_tardiness: f64 = 0.0;
        let mut late_jobs = 0;

        for job in jobs {
            let (Some(start), Some(end)) = (
                schedule.job_start_time(&job.job_id),
                schedule.job_completion_time(&job.job_id),
            ) else {
                continue;
            };

            let tardiness = job.tardiness(end);
            total_completion += end;
            total_weighted_completion += end * job.weight;
            total_tardiness += tardiness;
            total_weighted_tardiness += tardiness * job.weight;
            max_tardiness = max_tardiness.max(tardiness);
            if tardiness > 0.0 {
                late_jobs += 1;
            }

            timings.push(JobTiming {
                job_id: job.job_id.clone(),
                start,
                end,
                tardiness,
                weighted_tardiness: tardiness * job.weight,
            });
        }

        let start_time = timings.iter().map(|t| t.start).reduce(f64::min).unwrap_or(0.0);
        let makespan = timings.iter().map(|t| t.end).fold(0.0, f64::max);

        let utilization_by_machine = schedule
            .machines
            .iter()
            .filter_map(|m| {
                schedule
                    .machine_utilization(&m.machine)
                    .map(|u| (m.machine.clone(), u))
            })
            .collect();

        Self {
            start_time,
            makespan,
            max_tardiness,
            late_jobs,
            total_completion,
            total_weighted_completion,
            total_tardiness,
            total_weighted_tardiness,
            utilization_by_machine,
            jobs: timings,
        }
    }

    /// Mean machine utilization (0.0 with no machines).
    pub fn avg_utilization(&self) -> f64 {
        if self.utilization_by_machine.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.utilization_by_machine.values().sum();
        sum / self.utilization_by_machine.len() as f64
    }

    /// Timing of one job, if it was scheduled.
    pub fn job(&self, job_id: &str) -> Option<&JobTiming> {
        self.jobs.iter().find(|t| t.job_id == job_id)
    }
}
