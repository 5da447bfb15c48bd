/// Embedded HTML template
pub const HTML_TEMPLATE: &str = include_str!("../../templates/report.html");

/// Embedded CSS
pub const STYLES_CSS: &str = include_str!("../../templates/styles.css");
