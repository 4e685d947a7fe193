//! Management hierarchy reconstructed from flat employee records.
//!
//! Records are owned in a single arena and every relationship is expressed
//! through positions into that arena, so a built [`Hierarchy`] holds no
//! internal references and can be shared freely between readers. Each record
//! occupies exactly one report slot (the one of its `manager_id`), which keeps
//! the part of the graph reachable from the head acyclic by construction.

mod render;

use std::collections::HashMap;

use tracing::{debug, instrument, warn};

use crate::org::chart::error::ValidationError;
use crate::org::chart::model::{EmployeeId, EmployeeRecord, Salary};

pub use render::ChartLine;
pub(crate) use render::lines_to_text;

/// Validated, read-only management hierarchy.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    records: Vec<EmployeeRecord>,
    positions: HashMap<EmployeeId, usize>,
    reports: HashMap<EmployeeId, Vec<usize>>,
    reachable: Vec<bool>,
    root: usize,
}

impl Hierarchy {
    /// Validates the records and assembles the hierarchy.
    ///
    /// The sum of all salaries must fit in a [`Salary`]. Records are checked in input order and the first violation found is
    /// returned. Direct reports of every manager are ordered by name, ties
    /// keeping their input order.
    #[instrument(level = "debug", skip_all, fields(record_count = records.len()))]
    pub fn build(records: Vec<EmployeeRecord>) -> Result<Self, ValidationError> {
        let mut positions: HashMap<EmployeeId, usize> = HashMap::with_capacity(records.len());
        let mut reports: HashMap<EmployeeId, Vec<usize>> = HashMap::new();
        let mut root: Option<usize> = None;

        for (position, record) in records.iter().enumerate() {
            if record.id == record.manager_id {
                return Err(ValidationError::SelfManaged { id: record.id });
            }
            if positions.insert(record.id, position).is_some() {
                return Err(ValidationError::DuplicateId { id: record.id });
            }
            if record.is_root() {
                if let Some(first) = root {
                    return Err(ValidationError::MultipleRoots {
                        first: records[first].id,
                        second: record.id,
                    });
                }
                root = Some(position);
                continue;
            }
            reports.entry(record.manager_id).or_default().push(position);
        }

        let root = root.ok_or(ValidationError::NoRoot)?;
        debug!(
            head = records[root].id,
            manager_count = reports.len(),
            "partitioned employee records"
        );

        for record in records.iter().filter(|record| !record.is_root()) {
            if !positions.contains_key(&record.manager_id) {
                return Err(ValidationError::UnknownManager {
                    manager_id: record.manager_id,
                });
            }
        }

        let payroll = records
            .iter()
            .try_fold(0 as Salary, |total, record| total.checked_add(record.salary))
            .ok_or(ValidationError::SalaryOverflow)?;
        debug!(payroll, "salaries summed");

        for group in reports.values_mut() {
            group.sort_by(|&lhs, &rhs| records[lhs].name.cmp(&records[rhs].name));
        }

        let reachable = mark_reachable(&records, &reports, root);
        let orphaned = reachable.iter().filter(|seen| !**seen).count();
        if orphaned > 0 {
            warn!(orphaned, "records not reachable from the head of the hierarchy");
        }

        Ok(Self {
            records,
            positions,
            reports,
            reachable,
            root,
        })
    }

    /// The single employee without a manager.
    pub fn root(&self) -> &EmployeeRecord {
        &self.records[self.root]
    }

    /// Number of records the hierarchy was built from.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Looks up any record by id, reachable from the head or not.
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.positions.get(&id).map(|&position| &self.records[position])
    }

    /// Direct reports of the given manager, ordered by name.
    pub fn reports_of(&self, id: EmployeeId) -> impl Iterator<Item = &EmployeeRecord> + '_ {
        self.report_positions(id)
            .iter()
            .map(|&position| &self.records[position])
    }

    /// Returns `true` when the employee can be reached by walking down from the head.
    pub fn contains(&self, id: EmployeeId) -> bool {
        self.reachable_position(id).is_some()
    }

    /// Records that passed validation but hang below no path from the head.
    pub fn unreachable(&self) -> Vec<&EmployeeRecord> {
        self.records
            .iter()
            .zip(&self.reachable)
            .filter(|(_, seen)| !**seen)
            .map(|(record, _)| record)
            .collect()
    }

    /// Aggregate salary of the whole organisation.
    pub fn total_salary(&self) -> Salary {
        self.subtree_total(self.root)
    }

    /// Aggregate salary of the employee and everybody below them.
    ///
    /// Returns `None` when the id is unknown or not reachable from the head.
    pub fn subtree_salary(&self, id: EmployeeId) -> Option<Salary> {
        self.reachable_position(id)
            .map(|position| self.subtree_total(position))
    }

    // Cannot overflow: the sum of every salary was checked during build.
    fn subtree_total(&self, start: usize) -> Salary {
        let mut total: Salary = 0;
        let mut pending = vec![start];
        while let Some(position) = pending.pop() {
            let record = &self.records[position];
            total += record.salary;
            pending.extend_from_slice(self.report_positions(record.id));
        }
        total
    }

    fn report_positions(&self, manager: EmployeeId) -> &[usize] {
        self.reports
            .get(&manager)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn reachable_position(&self, id: EmployeeId) -> Option<usize> {
        self.positions
            .get(&id)
            .copied()
            .filter(|&position| self.reachable[position])
    }
}

fn mark_reachable(
    records: &[EmployeeRecord],
    reports: &HashMap<EmployeeId, Vec<usize>>,
    root: usize,
) -> Vec<bool> {
    let mut reachable = vec![false; records.len()];
    let mut pending = vec![root];
    while let Some(position) = pending.pop() {
        reachable[position] = true;
        if let Some(group) = reports.get(&records[position].id) {
            pending.extend(group.iter().copied().filter(|&report| !reachable[report]));
        }
    }
    reachable
}
