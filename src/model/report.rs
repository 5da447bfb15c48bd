use chrono::Local;

/// Timestamp layout used in the report metadata line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Values substituted into the HTML template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// Count for the target department
    pub target_count: usize,
    /// Base64 PNG payload of the chart
    pub encoded_image: String,
    /// Generation time, formatted with [`TIMESTAMP_FORMAT`]
    pub generated_at: String,
}

impl ReportContext {
    pub fn new(target_count: usize, encoded_image: String, generated_at: String) -> Self {
        Self { target_count, encoded_image, generated_at }
    }

    /// Build a context stamped with the current local time
    pub fn now(target_count: usize, encoded_image: String) -> Self {
        Self::new(target_count, encoded_image, current_timestamp())
    }
}

pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
