//! Scheduling domain models.
//!
//! Passive records describing the dispatch problem and its solution.
//!
//! # Domain Mappings
//!
//! | u-dispatch | Manufacturing | Healthcare | Logistics |
//! |------------|--------------|------------|-----------|
//! | Job | Order | Patient Case | Shipment |
//! | Operation | Routing step | Procedure | Transport Leg |
//! | Workcenter | Machine group | Department | Depot |
//! | Machine | Machine | Room | Truck |
//! | Schedule | Dispatch list | OR Schedule | Route Plan |

mod job;
mod machine;
mod palette;
mod schedule;
mod system;

pub use job::{Job, Operation};
pub use machine::{Machine, Workcenter};
pub use palette::{ColorPalette, Rgb};
pub use schedule::{Assignment, MachineSchedule, Schedule};
pub use system::System;
