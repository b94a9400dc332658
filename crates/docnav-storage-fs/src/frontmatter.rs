//! YAML front matter parsing for content documents.
//!
//! Front matter is optional metadata at the start of a markdown file,
//! delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Slices
//! description: Working with slices
//! ---
//!
//! # Content starts here
//! ```

use docnav_storage::{Metadata, MetadataError};

/// Extract the raw YAML block from the start of `content`.
///
/// Returns `None` when the content has no front matter or the block is never
/// closed.
fn front_matter_block(content: &str) -> Option<&str> {
    let content = content.trim_start_matches('\u{feff}');
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse the front matter of a content document.
///
/// Documents without front matter yield default metadata.
///
/// # Errors
///
/// Returns an error if a front matter block exists but is not a valid YAML
/// mapping of the expected shape.
pub(crate) fn parse_front_matter(content: &str) -> Result<Metadata, MetadataError> {
    let Some(yaml) = front_matter_block(content) else {
        return Ok(Metadata::default());
    };
    if yaml.trim().is_empty() {
        return Ok(Metadata::default());
    }

    serde_yaml::from_str(yaml).map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}")))
}
