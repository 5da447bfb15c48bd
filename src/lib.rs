pub mod error;
pub mod model;
pub mod parser;
pub mod analyzer;
pub mod visualization;
pub mod cli;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analyzer::{summarize, DepartmentSummary};
use crate::error::Result;
use crate::model::{current_timestamp, RecordTable, ReportContext};
use crate::parser::load_records;
use crate::visualization::{build_report_html, encode_image, generate_html, render_bar_chart};

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "employee_id",
    "department",
    "region",
    "performance_score",
    "years_experience",
    "satisfaction_rating",
];

/// Department whose count is reported
pub const TARGET_DEPARTMENT: &str = "Operations";

/// Report file name, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "employee_report.html";

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    pub target_count: usize,
    pub output_path: PathBuf,
}

/// A loaded employee table and the report pipeline over it
#[derive(Debug)]
pub struct EmployeeReport {
    table: RecordTable,
}

impl EmployeeReport {
    /// Load and validate an employee CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let table = load_records(path)?;
        Ok(Self { table })
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    pub fn summary(&self) -> DepartmentSummary {
        summarize(&self.table)
    }

    /// Render the full HTML document stamped with the current time
    pub fn render_html(&self) -> Result<String> {
        self.render_html_at(current_timestamp())
    }

    /// Render the full HTML document with an explicit timestamp
    pub fn render_html_at(&self, generated_at: String) -> Result<String> {
        let summary = self.summary();
        let png = render_bar_chart(&summary.distribution)?;
        let encoded = encode_image(&png);
        debug!(rows = self.table.len(), encoded_len = encoded.len(), "encoded chart");

        let context = ReportContext::new(summary.target_count, encoded, generated_at);
        Ok(build_report_html(&context))
    }

    /// Render the report and write it to `output_path`
    pub fn generate<P: AsRef<Path>>(&self, output_path: P) -> Result<ReportOutcome> {
        self.generate_from(&self.summary(), output_path)
    }

    /// Like [`generate`](Self::generate), reusing an already computed summary
    pub fn generate_from<P: AsRef<Path>>(
        &self,
        summary: &DepartmentSummary,
        output_path: P,
    ) -> Result<ReportOutcome> {
        let output_path = output_path.as_ref();
        let png = render_bar_chart(&summary.distribution)?;
        let context = ReportContext::now(summary.target_count, encode_image(&png));

        generate_html(&context, output_path)?;

        Ok(ReportOutcome {
            target_count: summary.target_count,
            output_path: output_path.to_path_buf(),
        })
    }

}

/// Console line stating the target department count
pub fn count_message(count: usize) -> String {
    format!("Frequency count for '{}' department: {}", TARGET_DEPARTMENT, count)
}

/// Console line stating where the report was saved
pub fn saved_message(path: &Path) -> String {
    format!("Saved HTML report to: {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    use crate::error::{InputError, ReportError};

    const HEADER: &str =
        "employee_id,department,region,performance_score,years_experience,satisfaction_rating";

    fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
        let path = dir.join("employees.csv");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        path
    }

    #[test]
    fn test_messages() {
        assert_eq!(count_message(5), "Frequency count for 'Operations' department: 5");
        assert_eq!(
            saved_message(Path::new(DEFAULT_OUTPUT)),
            "Saved HTML report to: employee_report.html"
        );
    }

    #[test]
    fn test_pipeline_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            &["E1,Sales,N,1,1,1", "E2,Operations,S,2,2,2", "E3,Operations,E,3,3,3"],
        );
        let output = dir.path().join(DEFAULT_OUTPUT);

        let outcome = EmployeeReport::load(&input).unwrap().generate(&output).unwrap();
        assert_eq!(outcome.target_count, 2);
        assert_eq!(outcome.output_path, output);

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains(&count_message(2)));
        assert!(html.contains("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_repeated_runs_match() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), &["E1,HR,N,1,1,1", "E2,Operations,S,2,2,2"]);

        let stamp = "2024-05-06 07:08:09".to_string();
        let first = EmployeeReport::load(&input).unwrap().render_html_at(stamp.clone()).unwrap();
        let second = EmployeeReport::load(&input).unwrap().render_html_at(stamp).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_department() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), &["E1,Operations,N,1,1,1"]);
        let report = EmployeeReport::load(&input).unwrap();
        assert_eq!(report.table().len(), 1);
        assert_eq!(report.summary().distribution.len(), 1);

        let html = report.render_html().unwrap();
        assert!(html.contains(&count_message(1)));
    }

    #[test]
    fn test_empty_department_cells_are_not_charted() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), &["E1,,N,1,1,1", "E2,Operations,S,2,2,2"]);
        let summary = EmployeeReport::load(&input).unwrap().summary();

        let pairs: Vec<_> = summary.distribution.iter().collect();
        assert_eq!(pairs, vec![("Operations", 1)]);
    }

    #[test]
    fn test_missing_column_surfaces_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "employee_id,department\nE1,HR\n").unwrap();

        match EmployeeReport::load(&path) {
            Err(ReportError::Input(InputError::MissingColumns(missing))) => {
                assert!(missing.contains(&"region".to_string()));
            }
            other => panic!("expected input error, got {:?}", other),
        }
    }

    #[test]
    fn test_unwritable_output_surfaces_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), &["E1,Operations,N,1,1,1"]);
        let output = dir.path().join("no_such_dir").join(DEFAULT_OUTPUT);

        let result = EmployeeReport::load(&input).unwrap().generate(&output);
        assert!(matches!(result, Err(ReportError::Output(_))));
    }
}
