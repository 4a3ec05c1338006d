//! Static production dispatching for the U-Engine ecosystem.
//!
//! Turns a set of jobs (routings of operations, each naming a workcenter)
//! and a set of workcenters (pools of interchangeable machines) into a
//! machine-by-machine timeline, using a greedy dispatching rule: EDD, SPT
//! or FCFS, or any caller-supplied rule.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Operation`, `Machine`,
//!   `Workcenter`, `Schedule`, `System`, `ColorPalette`
//! - **`dispatching`**: Rule traits, built-in rules and the `DispatchEngine`
//! - **`reporting`**: KPIs (C_max, ΣwT_j, …) and plain-text reports
//! - **`validation`**: Input integrity checks (duplicate ids, unknown refs)
//!
//! # Example
//!
//! ```
//! use u_dispatch::dispatching::{DispatchEngine, DispatchPolicy};
//! use u_dispatch::models::{Job, Machine, Operation, Workcenter};
//! use u_dispatch::reporting::ScheduleKpi;
//!
//! let workcenters = vec![Workcenter::new("W")
//!     .with_machine(Machine::new("M1"))
//!     .with_machine(Machine::new("M2"))];
//! let jobs = vec![
//!     Job::new("J1").with_due(10.0).with_operation(Operation::new("W", 3.0)),
//!     Job::new("J2").with_due(5.0).with_operation(Operation::new("W", 1.0)),
//!     Job::new("J3").with_due(8.0).with_operation(Operation::new("W", 2.0)),
//! ];
//!
//! u_dispatch::validation::validate_input(&jobs, &workcenters).unwrap();
//! let schedule = DispatchEngine::new()
//!     .run(DispatchPolicy::Edd, &jobs, &workcenters)
//!     .unwrap();
//! assert_eq!(schedule.makespan, 4.0);
//!
//! let kpi = ScheduleKpi::calculate(&schedule, &jobs);
//! assert_eq!(kpi.late_jobs, 0);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

pub mod dispatching;
pub mod error;
pub mod models;
pub mod reporting;
pub mod validation;

pub use error::SchedulingError;
