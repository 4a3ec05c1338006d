//! Plain-text renderers for schedules.
//!
//! Each view is a small borrowing wrapper implementing [`fmt::Display`],
//! so callers can print it, write it to a file, or collect it with
//! `to_string()`.

use std::fmt;

use super::ScheduleKpi;
use crate::models::{Job, Schedule};

/// Rule, total time and the job list of every machine.
#[derive(Debug, Clone, Copy)]
pub struct MachineDetails<'a>(pub &'a Schedule);

impl fmt::Display for MachineDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schedule type: {}", self.0.rule)?;
        writeln!(f, "Total time: {}", self.0.makespan)?;
        for ms in &self.0.machines {
            writeln!(f, "{}: [{}]", ms.machine, ms.job_ids.join(", "))?;
        }
        Ok(())
    }
}

/// Per-job table: input data, begin/end and tardiness.
#[derive(Debug, Clone, Copy)]
pub struct JobDetails<'a> {
    /// Schedule to render.
    pub schedule: &'a Schedule,
    /// Jobs the schedule was built from.
    pub jobs: &'a [Job],
}

impl fmt::Display for JobDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detailed Job Schedule:")?;
        writeln!(
            f,
            "{:<6} {:<5} {:<4} {:<4} {:<7} {:<6} {:<4} {:<4} {:<4} {:<4}",
            "ID", "Wght", "Rls", "Due", "Pr.tm.", "Stat.", "Bgn", "End", "T", "wT"
        )?;

        let kpi = ScheduleKpi::calculate(self.schedule, self.jobs);
        for job in self.jobs {
            let Some(timing) = kpi.job(&job.job_id) else {
                continue;
            };
            let status = job.operations.first().map(|op| op.status.as_str()).unwrap_or("");
            writeln!(
                f,
                "{:<6} {:<5} {:<4} {:<4} {:<7} {:<6} {:<4} {:<4} {:<4} {:<4}",
                job.job_id,
                job.weight,
                job.release,
                job.due,
                job.total_processing_time(),
                status,
                timing.start,
                timing.end,
                timing.tardiness,
                timing.weighted_tardiness,
            )?;
        }
        Ok(())
    }
}

/// Per-machine sequence with start/stop of every operation.
#[derive(Debug, Clone, Copy)]
pub struct SequenceTable<'a>(pub &'a Schedule);

impl fmt::Display for SequenceTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Job Sequence per Machine:")?;
        writeln!(
            f,
            "{:<8} {:<6} {:<6} {:<6} {:<6}",
            "Mch/Job", "Setup", "Start", "Stop", "Pr.tm."
        )?;
        for ms in &self.0.machines {
            writeln!(f, "{:<8}", ms.machine)?;
            for a in self.0.assignments_for_machine(&ms.machine) {
                // No sequence-dependent setups are modelled.
                writeln!(
                    f,
                    "  {:<6} {:<6} {:<6} {:<6} {:<6}",
                    a.job_id,
                    0,
                    a.start,
                    a.end,
                    a.duration()
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ScheduleKpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "{:<10}{}", "Time", self.start_time)?;
        writeln!(f, "{:<10}{}", "C_max", self.makespan)?;
        writeln!(f, "{:<10}{}", "T_max", self.max_tardiness)?;
        writeln!(f, "{:<10}{}", "ΣU_j", self.late_jobs)?;
        writeln!(f, "{:<10}{}", "ΣC_j", self.total_completion)?;
        writeln!(f, "{:<10}{}", "ΣT_j", self.total_tardiness)?;
        writeln!(f, "{:<10}{}", "ΣwC_j", self.total_weighted_completion)?;
        writeln!(f, "{:<10}{}", "ΣwT_j", self.total_weighted_tardiness)
    }
}

/// All four views, in the order an operator reads them.
pub fn full_report(schedule: &Schedule, jobs: &[Job]) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        MachineDetails(schedule),
        JobDetails { schedule, jobs },
        SequenceTable(schedule),
        ScheduleKpi::calculate(schedule, jobs),
    )
}
