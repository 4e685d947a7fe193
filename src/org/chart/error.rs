use std::path::PathBuf;

use thiserror::Error;

use crate::org::chart::model::{EmployeeId, Salary};

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Structural problems detected while assembling a [`Hierarchy`].
///
/// Every variant is terminal for the build: no partial hierarchy is returned.
///
/// [`Hierarchy`]: crate::org::chart::hierarchy::Hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An employee lists their own id as their manager.
    #[error("employee id: {id} lists themselves as their manager")]
    SelfManaged { id: EmployeeId },

    /// More than one employee carries the "no manager" sentinel.
    #[error(
        "found multiple employees without a manager (ids {first} and {second}). Only 1 expected"
    )]
    MultipleRoots {
        first: EmployeeId,
        second: EmployeeId,
    },

    /// No employee carries the "no manager" sentinel.
    #[error("found no employee without a manager. Exactly 1 expected")]
    NoRoot,

    /// A referenced manager id has no corresponding record.
    #[error("manager id: {manager_id} not found as employee")]
    UnknownManager { manager_id: EmployeeId },

    /// The salaries add up to more than a [`Salary`] can hold.
    #[error("total salary exceeds {}", Salary::MAX)]
    SalaryOverflow,

    /// Two records share the same id.
    #[error("employee id: {id} appears more than once")]
    DuplicateId { id: EmployeeId },
}

/// Error type covering the different failure cases that can occur when the
/// tool reads records, builds the hierarchy, or prepares the report.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Wrapper for IO failures such as reading the input file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the input is not a valid JSON array of employee records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when the records do not describe a well-formed hierarchy.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a subtree is requested for an id that is not in the hierarchy.
    #[error("employee id: {0} not found in hierarchy")]
    UnknownEmployee(EmployeeId),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
