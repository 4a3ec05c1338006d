//! Schedule evaluation and text reports.
//!
//! Consumers of a finished [`Schedule`](crate::models::Schedule). Nothing
//! here feeds back into the dispatch engine.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod text;

pub use kpi::{JobTiming, ScheduleKpi};
pub use text::{full_report, JobDetails, MachineDetails, SequenceTable};
