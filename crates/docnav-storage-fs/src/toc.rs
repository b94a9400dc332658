//! Decoding of `_toc.*` declaration files.
//!
//! Declarations are decoded into loosely-typed JSON values; validating their
//! shape is the navigation core's job.

use docnav_storage::MetadataError;

/// Decode a declaration file by extension.
///
/// Empty files decode to `null`, which the core treats as "no declaration".
///
/// # Errors
///
/// Returns an error if the content is not valid YAML/JSON.
pub(crate) fn decode_toc(content: &str, extension: &str) -> Result<serde_json::Value, MetadataError> {
    if content.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }

    match extension {
        "json" => serde_json::from_str(content)
            .map_err(|e| MetadataError::Parse(format!("Invalid JSON: {e}"))),
        _ => serde_yaml::from_str(content)
            .map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}"))),
    }
}
