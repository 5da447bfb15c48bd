use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{OutputError, Result};
use crate::model::ReportContext;
use crate::visualization::encoder::data_uri;
use crate::visualization::templates::{HTML_TEMPLATE, STYLES_CSS};
use crate::count_message;

/// Fill the report template with the count, timestamp and chart
pub fn build_report_html(context: &ReportContext) -> String {
    let html = HTML_TEMPLATE
        .replace("/* __STYLES_PLACEHOLDER__ */", STYLES_CSS)
        .replace("__GENERATED_AT__", &context.generated_at)
        .replace("__COUNT_MESSAGE__", &count_message(context.target_count))
        .replace("__CHART_DATA_URI__", &data_uri(&context.encoded_image));

    debug!(bytes = html.len(), "built report document");
    html
}

/// Write the document as UTF-8, replacing any existing file
pub fn write_report(html: &str, output_path: &Path) -> std::result::Result<(), OutputError> {
    fs::write(output_path, html).map_err(|source| OutputError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(path = %output_path.display(), "report written");
    Ok(())
}

/// Build the HTML report and write it to `output_path`
pub fn generate_html(context: &ReportContext, output_path: &Path) -> Result<()> {
    let html = build_report_html(context);
    write_report(&html, output_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(count: usize) -> ReportContext {
        ReportContext::new(count, "iVBORw0KGgo=".to_string(), "2024-01-02 03:04:05".to_string())
    }

    #[test]
    fn test_count_message_appears_twice() {
        let html = build_report_html(&context(7));
        let message = "Frequency count for 'Operations' department: 7";
        assert!(html.matches(message).count() >= 2);
    }

    #[test]
    fn test_substitutions() {
        let html = build_report_html(&context(3));
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("Generated: 2024-01-02 03:04:05"));
        assert!(html.contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#));
        assert!(html.contains("<title>Employee Department Distribution Report</title>"));
        assert!(html.contains(".codebox"));
        assert!(!html.contains("__"));
    }

    #[test]
    fn test_zero_count() {
        let html = build_report_html(&context(0));
        assert!(html.contains("Frequency count for 'Operations' department: 0"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employee_report.html");
        fs::write(&path, "stale").unwrap();

        generate_html(&context(4), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Frequency count for 'Operations' department: 4"));
        assert!(!written.contains("stale"));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.html");
        assert!(matches!(write_report("<html></html>", &path), Err(OutputError::Write { .. })));
    }
}
