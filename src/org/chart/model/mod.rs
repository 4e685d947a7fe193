use serde::{Deserialize, Serialize};

/// Identifier assigned to an employee. Unique among the records of one run.
pub type EmployeeId = u64;

/// Salary amount in a caller-defined currency unit.
pub type Salary = u64;

/// Manager id marking an employee as the head of the organisation.
pub const NO_MANAGER: EmployeeId = 0;

/// A single employee as decoded from the input source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier.
    pub id: EmployeeId,
    /// Display name, used for ordering and printing. Not required to be unique.
    pub name: String,
    /// Salary of this employee alone.
    pub salary: Salary,
    /// Identifier of the direct manager, or [`NO_MANAGER`].
    pub manager_id: EmployeeId,
}

impl EmployeeRecord {
    /// Creates a new record.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        salary: Salary,
        manager_id: EmployeeId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
            manager_id,
        }
    }

    /// Returns `true` when the record has no manager.
    pub fn is_root(&self) -> bool {
        self.manager_id == NO_MANAGER
    }
}
