use tracing::{debug, warn};

use crate::model::{Distribution, EmployeeRecord, RecordTable};
use crate::TARGET_DEPARTMENT;

/// Department counts plus the count for the target department
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSummary {
    pub distribution: Distribution,
    pub target_count: usize,
}

/// Cell texts read as "no value" rather than as a category label
pub const MISSING_MARKERS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(value: &str) -> bool {
    MISSING_MARKERS.contains(&value)
}

/// Count rows per value of the column picked out by `key`.
///
/// Missing cells are skipped, so they never form a category of their own.
pub fn frequency_distribution<F>(table: &RecordTable, key: F) -> Distribution
where
    F: Fn(&EmployeeRecord) -> &str,
{
    table.iter().map(key).filter(|value| !is_missing(value)).collect()
}

/// Count rows per `department`
pub fn department_distribution(table: &RecordTable) -> Distribution {
    frequency_distribution(table, |r| r.department.as_str())
}

/// Aggregate the table and look up the target department.
///
/// A target department with no rows yields a count of zero.
pub fn summarize(table: &RecordTable) -> DepartmentSummary {
    let distribution = department_distribution(table);
    let target_count = distribution.count_of(TARGET_DEPARTMENT);

    if target_count == 0 {
        warn!(department = TARGET_DEPARTMENT, "target department not present in data");
    }
    debug!(
        departments = distribution.len(),
        rows = distribution.total(),
        target_count,
        "aggregated departments"
    );

    DepartmentSummary { distribution, target_count }
}
