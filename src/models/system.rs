//! Scheduling environment container.
//!
//! Bundles the jobs, the workcenters and, once computed, a schedule into
//! a single document that can be stored or handed between tools.

use serde::{Deserialize, Serialize};

use super::{ColorPalette, Job, Machine, Schedule, Workcenter};

/// Jobs, workcenters and an optional computed schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct System {
    /// Jobs to schedule.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Workcenters and their machines.
    #[serde(default)]
    pub workcenters: Vec<Workcenter>,
    /// The last schedule stored on this system.
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl System {
    /// Creates an empty system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a job.
    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Adds a workcenter.
    pub fn add_workcenter(&mut self, workcenter: Workcenter) {
        self.workcenters.push(workcenter);
    }

    /// Stores a schedule, replacing any previous one.
    pub fn set_schedule(&mut self, schedule: Schedule) {
        self.schedule = Some(schedule);
    }

    /// Gives every job and workcenter without a color one from `palette`.
    ///
    /// Entities keep `None` once the palette runs dry.
    pub fn fill_colors(&mut self, palette: &mut ColorPalette) {
        for job in self.jobs.iter_mut().filter(|j| j.rgb.is_none()) {
            job.rgb = palette.next_color();
        }
        for wc in self.workcenters.iter_mut().filter(|wc| wc.rgb.is_none()) {
            wc.rgb = palette.next_color();
        }
    }

    /// All machines across workcenters, in declaration order.
    pub fn machines(&self) -> impl Iterator<Item = &Machine> + '_ {
        self.workcenters.iter().flat_map(|wc| wc.machines.iter())
    }

    /// Finds a job by id.
    pub fn job(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.job_id == job_id)
    }

    /// Finds a workcenter by name.
    pub fn workcenter(&self, name: &str) -> Option<&Workcenter> {
        self.workcenters.iter().find(|wc| wc.name == name)
    }
}
