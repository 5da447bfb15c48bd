use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// MIME prefix for an inline PNG data URI
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Standard padded base64 with no line breaks
pub fn encode_image(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Wrap an already-encoded PNG payload as a data URI
pub fn data_uri(encoded: &str) -> String {
    format!("{}{}", PNG_DATA_URI_PREFIX, encoded)
}
