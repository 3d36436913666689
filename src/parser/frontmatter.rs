//! YAML frontmatter extraction.

use serde_yaml::{Mapping, Value};

use crate::error::{ArtError, Result};

/// Frontmatter of one document section.
#[derive(Debug)]
pub struct FrontmatterResult {
    /// Parsed key-value pairs, in file order.
    pub values: Mapping,
    /// Byte offset where content after the closing `---` begins.
    pub content_start: usize,
}

/// Extract YAML frontmatter from the beginning of a document.
///
/// The document must open with `---`, contain a YAML mapping (or nothing),
/// and close with `---` on its own line.
pub fn extract_frontmatter(source: &str) -> Result<FrontmatterResult> {
    let trimmed = source.trim_start();
    let leading_whitespace = source.len() - trimmed.len();

    let Some(after_first) = trimmed.strip_prefix("---") else {
        return Err(ArtError::Parse {
            message: "Document must start with ---".to_string(),
            help: Some("Add YAML frontmatter: ---\\nname: my-artwork\\n---".to_string()),
        });
    };

    let first_newline = after_first.find('\n').map_or(after_first.len(), |i| i + 1);
    let yaml_start = 3 + first_newline;
    let yaml_section = &trimmed[yaml_start.min(trimmed.len())..];

    let Some(closing) = find_closing_delimiter(yaml_section) else {
        return Err(ArtError::Parse {
            message: "Unclosed frontmatter: missing closing ---".to_string(),
            help: Some("Add --- after the YAML content".to_string()),
        });
    };
    let yaml_content = &yaml_section[..closing];
    let closing_offset = yaml_start + closing;

    let parsed: Value = serde_yaml::from_str(yaml_content).map_err(|e| ArtError::Parse {
        message: format!("Invalid YAML in frontmatter: {}", e),
        help: None,
    })?;

    let values = match parsed {
        Value::Mapping(map) => map,
        Value::Null => Mapping::new(),
        _ => {
            return Err(ArtError::Parse {
                message: "Frontmatter must be a YAML mapping".to_string(),
                help: Some("Use key: value format".to_string()),
            });
        }
    };

    let after_closing = &trimmed[closing_offset + 3..];
    let newline_after = after_closing.find('\n').map_or(after_closing.len(), |i| i + 1);

    Ok(FrontmatterResult {
        values,
        content_start: leading_whitespace + closing_offset + 3 + newline_after,
    })
}

/// Offset of the first line that is exactly `---`.
fn find_closing_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    for line in s.split_inclusive('\n') {
        if line.trim() == "---" {
            return Some(offset + (line.len() - line.trim_start().len()));
        }
        offset += line.len();
    }
    None
}
