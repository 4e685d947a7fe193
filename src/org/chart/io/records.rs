use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::org::chart::error::Result;
use crate::org::chart::model::EmployeeRecord;

/// Decodes a JSON array of employee records.
///
/// Each entry carries `id`, `name`, `salary` and `manager_id`; other fields
/// are ignored.
pub fn parse_records(source: &str) -> Result<Vec<EmployeeRecord>> {
    Ok(serde_json::from_str(source)?)
}

/// Reads and decodes the employee records stored at `path`.
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn read_records(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let source = fs::read_to_string(path)?;
    let records = parse_records(&source)?;
    info!(record_count = records.len(), "decoded employee records");
    Ok(records)
}
