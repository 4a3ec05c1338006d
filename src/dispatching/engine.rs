//! Dispatch engine.
//!
//! # Algorithm
//!
//! Every operation goes through the same assignment primitive:
//! 1. Candidates = machines of the operation's workcenter.
//! 2. Pick the candidate that frees up first (declaration order on ties).
//! 3. Start = max(job release, machine availability).
//! 4. End = start + processing time; the machine becomes free at End.
//!
//! What differs between rules is the order in which operations reach the
//! primitive:
//! - **Static** ([`StaticPriority`]): jobs sorted once, each routing
//!   committed in full before the next job.
//! - **Dynamic** ([`DispatchRule`]): before every commit the rule picks one
//!   job among those with work left, and only its next operation is placed.
//!
//! # Complexity
//! Static: O(n log n + o * c). Dynamic: O(o * (n + c)), where n = jobs,
//! o = operations, c = machines per workcenter.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::ops::Range;

use tracing::{debug, info, warn};

use super::rules::{Edd, Fcfs, Spt};
use super::{Candidate, DispatchPolicy, DispatchRule, StaticPriority};
use crate::error::SchedulingError;
use crate::models::{Assignment, Job, MachineSchedule, Schedule, Workcenter};

/// Greedy dispatch engine.
///
/// Holds configuration only. Machine availability lives in per-run state
/// seeded from each machine's release time, so one engine can serve any
/// number of runs, including concurrent ones over the same input.
///
/// # Example
///
/// ```
/// use u_dispatch::dispatching::{rules, DispatchEngine};
/// use u_dispatch::models::{Job, Machine, Operation, Workcenter};
///
/// let workcenters = vec![Workcenter::new("W")
///     .with_machine(Machine::new("M1"))
///     .with_machine(Machine::new("M2"))];
/// let jobs = vec![
///     Job::new("J1").with_operation(Operation::new("W", 3.0)),
///     Job::new("J2").with_operation(Operation::new("W", 1.0)),
/// ];
///
/// let schedule = DispatchEngine::new()
///     .run_dynamic(&rules::Spt, &jobs, &workcenters)
///     .unwrap();
/// assert_eq!(schedule.rule, "SPT");
/// assert_eq!(schedule.machine("M1").unwrap().job_ids, vec!["J2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatchEngine {
    routing_precedence: bool,
}

impl DispatchEngine {
    /// Creates an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes each operation wait for the previous operation of the same job.
    ///
    /// Off by default: an operation's earliest start is its job's release.
    pub fn with_routing_precedence(mut self, enabled: bool) -> Self {
        self.routing_precedence = enabled;
        self
    }

    /// Whether routing precedence is enforced.
    pub fn routing_precedence(&self) -> bool {
        self.routing_precedence
    }

    /// Runs one of the built-in policies.
    pub fn run(
        &self,
        policy: DispatchPolicy,
        jobs: &[Job],
        workcenters: &[Workcenter],
    ) -> Result<Schedule, SchedulingError> {
        match policy {
            DispatchPolicy::Edd => self.run_dynamic(&Edd, jobs, workcenters),
            DispatchPolicy::Spt => self.run_dynamic(&Spt, jobs, workcenters),
            DispatchPolicy::Fcfs => self.run_static(&Fcfs, jobs, workcenters),
        }
    }

    /// Runs every built-in policy on the same input, each on fresh state.
    pub fn compare(
        &self,
        jobs: &[Job],
        workcenters: &[Workcenter],
    ) -> Result<Vec<Schedule>, SchedulingError> {
        DispatchPolicy::ALL
            .iter()
            .map(|&policy| self.run(policy, jobs, workcenters))
            .collect()
    }

    /// Static-priority dispatch: sort once, then commit whole routings.
    pub fn run_static<P: StaticPriority + ?Sized>(
        &self,
        priority: &P,
        jobs: &[Job],
        workcenters: &[Workcenter],
    ) -> Result<Schedule, SchedulingError> {
        let mut state = DispatchState::new(jobs, workcenters, self.routing_precedence);

        for job_idx in priority.order(jobs) {
            for op_idx in 0..jobs[job_idx].operations.len() {
                state.assign(job_idx, op_idx).inspect_err(|e| {
                    warn!(rule = priority.name(), error = %e, "dispatch aborted");
                })?;
            }
        }

        Ok(state.finish(priority.name()))
    }

    /// Dynamic-priority dispatch: ask the rule before every commit.
    pub fn run_dynamic<R: DispatchRule + ?Sized>(
        &self,
        rule: &R,
        jobs: &[Job],
        workcenters: &[Workcenter],
    ) -> Result<Schedule, SchedulingError> {
        let mut state = DispatchState::new(jobs, workcenters, self.routing_precedence);
        let mut completed = vec![0usize; jobs.len()];
        let mut eligible: Vec<usize> = (0..jobs.len())
            .filter(|&idx| jobs[idx].has_operations())
            .collect();

        while !eligible.is_empty() {
            let candidates: Vec<Candidate<'_>> = eligible
                .iter()
                .map(|&idx| Candidate::new(&jobs[idx], completed[idx]))
                .collect();
            let Some(pick) = rule.select(&candidates) else {
                break;
            };

            let job_idx = eligible[pick];
            state.assign(job_idx, completed[job_idx]).inspect_err(|e| {
                warn!(rule = rule.name(), error = %e, "dispatch aborted");
            })?;

            completed[job_idx] += 1;
            if completed[job_idx] == jobs[job_idx].operations.len() {
                eligible.remove(pick);
            }
        }

        Ok(state.finish(rule.name()))
    }
}

/// Mutable availability of one machine during a run.
#[derive(Debug)]
struct MachineState<'a> {
    workcenter: &'a str,
    name: &'a str,
    available_at: f64,
    job_ids: Vec<String>,
}

/// Per-run state. Dropped (or turned into a [`Schedule`]) when the run ends.
#[derive(Debug)]
struct DispatchState<'a> {
    jobs: &'a [Job],
    workcenters: &'a [Workcenter],
    /// Machine indices of each workcenter, parallel to `workcenters`.
    ranges: Vec<Range<usize>>,
    machines: Vec<MachineState<'a>>,
    /// Earliest start of each job's next operation under routing precedence.
    job_ready: Vec<f64>,
    routing_precedence: bool,
    assignments: Vec<Assignment>,
}

impl<'a> DispatchState<'a> {
    fn new(jobs: &'a [Job], workcenters: &'a [Workcenter], routing_precedence: bool) -> Self {
        let mut machines = Vec::new();
        let mut ranges = Vec::with_capacity(workcenters.len());

        for wc in workcenters {
            let first = machines.len();
            machines.extend(wc.machines.iter().map(|m| MachineState {
                workcenter: wc.name.as_str(),
                name: m.name.as_str(),
                available_at: m.release,
                job_ids: Vec::new(),
            }));
            ranges.push(first..machines.len());
        }

        Self {
            jobs,
            workcenters,
            ranges,
            machines,
            job_ready: jobs.iter().map(|j| j.release).collect(),
            routing_precedence,
            assignments: Vec::new(),
        }
    }

    /// Candidate machine indices for a workcenter name. Empty if unknown.
    fn candidates(&self, workcenter: &str) -> Range<usize> {
        self.workcenters
            .iter()
            .position(|wc| wc.name == workcenter)
            .map(|idx| self.ranges[idx].clone())
            .unwrap_or(0..0)
    }

    /// Commits operation `op_idx` of job `job_idx`.
    ///
    /// The only place machine state changes.
    fn assign(&mut self, job_idx: usize, op_idx: usize) -> Result<(), SchedulingError> {
        let jobs = self.jobs;
        let job = &jobs[job_idx];
        let operation = &job.operations[op_idx];

        let chosen = self
            .candidates(&operation.workcenter)
            .min_by(|&a, &b| {
                self.machines[a]
                    .available_at
                    .total_cmp(&self.machines[b].available_at)
            })
            .ok_or_else(|| SchedulingError::NoCandidateMachine {
                job_id: job.job_id.clone(),
                operation: op_idx,
                workcenter: operation.workcenter.clone(),
            })?;

        let floor = if self.routing_precedence {
            self.job_ready[job_idx]
        } else {
            job.release
        };

        let machine = &mut self.machines[chosen];
        let start = floor.max(machine.available_at);
        let end = start + operation.processing_time;

        // Availability never moves backwards.
        machine.available_at = machine.available_at.max(end);
        machine.job_ids.push(job.job_id.clone());
        self.job_ready[job_idx] = self.job_ready[job_idx].max(end);

        debug!(
            job = %job.job_id,
            operation = op_idx,
            machine = machine.name,
            start,
            end,
            "operation committed"
        );

        self.assignments.push(Assignment {
            job_id: job.job_id.clone(),
            operation: op_idx,
            workcenter: machine.workcenter.to_string(),
            machine: machine.name.to_string(),
            start,
            end,
        });

        Ok(())
    }

    /// Assembles the schedule: one entry per machine, idle ones included.
    fn finish(self, rule: &str) -> Schedule {
        let makespan = if self.assignments.is_empty() {
            0.0
        } else {
            self.machines
                .iter()
                .map(|m| m.available_at)
                .fold(0.0, f64::max)
        };

        info!(
            rule,
            makespan,
            assignments = self.assignments.len(),
            machines = self.machines.len(),
            "dispatch complete"
        );

        let machines = self
            .machines
            .into_iter()
            .map(|m| MachineSchedule {
                workcenter: m.workcenter.to_string(),
                machine: m.name.to_string(),
                job_ids: m.job_ids,
            })
            .collect();

        Schedule::new(rule, makespan, machines, self.assignments)
    }
}
