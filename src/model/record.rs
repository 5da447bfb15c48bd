use serde::Deserialize;

/// One employee row, restricted to the columns the report reads
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub department: String,
    pub region: String,
    pub performance_score: String,
    pub years_experience: String,
    pub satisfaction_rating: String,
}

/// The loaded CSV: header row plus every data row in file order
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    /// Column names exactly as they appear in the header, extras included
    pub columns: Vec<String>,
    /// Data rows
    pub records: Vec<EmployeeRecord>,
}

impl RecordTable {
    pub fn new(columns: Vec<String>, records: Vec<EmployeeRecord>) -> Self {
        Self { columns, records }
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmployeeRecord> {
        self.records.iter()
    }
}
