//! Input validation for dispatch problems.
//!
//! The engine trusts its input. Run these checks at the boundary where
//! jobs and workcenters enter the system. Detects:
//! - Duplicate job, workcenter and machine names
//! - Operations naming unknown workcenters
//! - Workcenters without machines
//! - Negative or non-finite times and weights

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Job, Workcenter};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same identifier.
    DuplicateId,
    /// An operation references a workcenter that doesn't exist.
    UnknownWorkcenter,
    /// A workcenter has no machines.
    EmptyWorkcenter,
    /// A time, processing time or weight is negative, NaN or infinite.
    InvalidValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates jobs and workcenters before dispatching.
///
/// Checks:
/// 1. No duplicate job ids
/// 2. No duplicate workcenter names
/// 3. No duplicate machine names (across all workcenters)
/// 4. Every workcenter has at least one machine
/// 5. Every operation names an existing workcenter
/// 6. Release, due, weight, machine release and processing times are
///    finite and non-negative
///
/// Jobs without operations are allowed.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(jobs: &[Job], workcenters: &[Workcenter]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut workcenter_names = HashSet::new();
    let mut machine_names = HashSet::new();
    for wc in workcenters {
        if !workcenter_names.insert(wc.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate workcenter name: {}", wc.name),
            ));
        }
        if wc.machines.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWorkcenter,
                format!("Workcenter '{}' has no machines", wc.name),
            ));
        }
        for m in &wc.machines {
            if !machine_names.insert(m.name.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate machine name: {}", m.name),
                ));
            }
            check_value(&mut errors, &format!("Machine '{}' release", m.name), m.release);
        }
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.job_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.job_id),
            ));
        }

        check_value(&mut errors, &format!("Job '{}' release", job.job_id), job.release);
        check_value(&mut errors, &format!("Job '{}' due", job.job_id), job.due);
        check_value(&mut errors, &format!("Job '{}' weight", job.job_id), job.weight);

        for (idx, op) in job.operations.iter().enumerate() {
            if !workcenter_names.contains(op.workcenter.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownWorkcenter,
                    format!(
                        "Operation {} of job '{}' references unknown workcenter '{}'",
                        idx, job.job_id, op.workcenter
                    ),
                ));
            }
            check_value(
                &mut errors,
                &format!("Operation {} of job '{}' processing time", idx, job.job_id),
                op.processing_time,
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_value(errors: &mut Vec<ValidationError>, what: &str, value: f64) {
    if !value.is_finite() || value < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidValue,
            format!("{what} must be finite and non-negative, got {value}"),
        ));
    }
}
