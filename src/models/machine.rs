//! Machine and workcenter models.
//!
//! Machines are the processing resources. A workcenter groups machines
//! that are interchangeable: any of them can run an operation that names
//! the workcenter. Declaration order inside a workcenter is significant;
//! it breaks ties when several machines become free at the same time.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2
//! (parallel machines, flexible job shops)

use serde::{Deserialize, Serialize};

use super::Rgb;

/// A single machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Unique machine name.
    pub name: String,
    /// Time at which the machine first becomes available.
    pub release: f64,
    /// Free-form status tag.
    pub status: String,
}

impl Machine {
    /// Creates a machine available from t=0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release: 0.0,
            status: String::new(),
        }
    }

    /// Sets the release (first availability) time.
    pub fn with_release(mut self, release: f64) -> Self {
        self.release = release;
        self
    }

    /// Sets the status tag.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// A pool of interchangeable machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workcenter {
    /// Unique workcenter name.
    pub name: String,
    /// Informational release time. The engine uses machine release times.
    pub release: f64,
    /// Free-form status tag.
    pub status: String,
    /// Member machines, in declaration order.
    pub machines: Vec<Machine>,
    /// Display color. Ignored by the engine.
    #[serde(default)]
    pub rgb: Option<Rgb>,
}

impl Workcenter {
    /// Creates an empty workcenter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            release: 0.0,
            status: String::new(),
            machines: Vec::new(),
            rgb: None,
        }
    }

    /// Sets the informational release time.
    pub fn with_release(mut self, release: f64) -> Self {
        self.release = release;
        self
    }

    /// Sets the status tag.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Adds a machine.
    pub fn with_machine(mut self, machine: Machine) -> Self {
        self.machines.push(machine);
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, rgb: Rgb) -> Self {
        self.rgb = Some(rgb);
        self
    }

    /// Number of machines in this workcenter.
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Finds a member machine by name.
    pub fn machine(&self, name: &str) -> Option<&Machine> {
        self.machines.iter().find(|m| m.name == name)
    }
}
