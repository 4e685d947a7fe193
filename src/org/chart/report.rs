use std::path::Path;

use num_format::{Locale, ToFormattedString};
use tracing::{debug, instrument};

use crate::org::chart::error::{ChartError, Result};
use crate::org::chart::hierarchy::{Hierarchy, lines_to_text};
use crate::org::chart::io::records;
use crate::org::chart::model::{EmployeeId, Salary};

/// Heading printed above the chart.
pub const CHART_HEADING: &str = "Employee hierarchy:";

/// Reads the records at `path` and validates them into a [`Hierarchy`].
#[instrument(level = "info", skip_all, fields(input = %path.display()))]
pub fn load_hierarchy(path: &Path) -> Result<Hierarchy> {
    let records = records::read_records(path)?;
    let hierarchy = Hierarchy::build(records)?;
    debug!(head = hierarchy.root().id, "hierarchy validated");
    Ok(hierarchy)
}

/// Formats an amount with a comma between every group of three digits.
pub fn format_thousands(amount: Salary) -> String {
    amount.to_formatted_string(&Locale::en)
}

/// The closing line reporting an aggregate salary.
pub fn salary_line(total: Salary) -> String {
    format!("Total salaries: ${}.", format_thousands(total))
}

/// Aggregate salary of the whole organisation or of the subtree headed by `from`.
pub fn select_total(hierarchy: &Hierarchy, from: Option<EmployeeId>) -> Result<Salary> {
    match from {
        None => Ok(hierarchy.total_salary()),
        Some(id) => hierarchy
            .subtree_salary(id)
            .ok_or(ChartError::UnknownEmployee(id)),
    }
}

/// Builds the full textual report: heading, chart, and salary total.
pub fn render_report(hierarchy: &Hierarchy, from: Option<EmployeeId>) -> Result<String> {
    let lines = match from {
        None => hierarchy.render(),
        Some(id) => hierarchy
            .render_from(id)
            .ok_or(ChartError::UnknownEmployee(id))?,
    };
    let total = select_total(hierarchy, from)?;

    let mut report = String::new();
    report.push_str(CHART_HEADING);
    report.push('\n');
    report.push_str(&lines_to_text(&lines));
    report.push_str(&salary_line(total));
    report.push('\n');
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
        assert_eq!(format_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn salary_line_uses_grouped_amount() {
        assert_eq!(salary_line(21), "Total salaries: $21.");
        assert_eq!(salary_line(2_500_000), "Total salaries: $2,500,000.");
    }
}
