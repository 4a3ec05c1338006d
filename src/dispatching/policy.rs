//! Named dispatch policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The built-in policies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchPolicy {
    /// Earliest Due Date (dynamic).
    #[serde(rename = "EDD")]
    Edd,
    /// Shortest Processing Time (dynamic).
    #[serde(rename = "SPT")]
    Spt,
    /// First Come, First Served (static).
    #[serde(rename = "FCFS")]
    Fcfs,
}

/// Unknown policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dispatch policy '{0}' (expected EDD, SPT or FCFS)")]
pub struct PolicyParseError(pub String);

impl DispatchPolicy {
    /// All built-in policies.
    pub const ALL: [DispatchPolicy; 3] = [Self::Edd, Self::Spt, Self::Fcfs];

    /// Name stamped on schedules.
    pub fn name(self) -> &'static str {
        match self {
            Self::Edd => "EDD",
            Self::Spt => "SPT",
            Self::Fcfs => "FCFS",
        }
    }

    /// Whether the policy re-evaluates priorities before every commit.
    pub fn is_dynamic(self) -> bool {
        !matches!(self, Self::Fcfs)
    }
}

impl fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DispatchPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EDD" => Ok(Self::Edd),
            "SPT" => Ok(Self::Spt),
            "FCFS" | "FIFO" => Ok(Self::Fcfs),
            _ => Err(PolicyParseError(s.to_string())),
        }
    }
}
