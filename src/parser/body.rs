//! Code block body extraction.

use crate::error::{ArtError, Result};

/// Info string of the fence holding stroke scripts.
pub const STROKES_FENCE: &str = "strokes";

/// A fenced code block found in a document.
#[derive(Debug)]
pub struct BodyResult {
    /// Content inside the fence, without the markers.
    pub content: String,
    /// Lines between the start of the searched text and the first content line.
    pub line_offset: usize,
    /// Byte offset just past the closing fence line.
    pub content_end: usize,
}

/// Extract the first ```` ```strokes ```` block.
///
/// Returns `Ok(None)` when the document has no such block and an error when
/// the block is never closed.
pub fn extract_body(source: &str) -> Result<Option<BodyResult>> {
    let mut lines = source.split_inclusive('\n').enumerate();
    let mut offset = 0;

    let opening = loop {
        let Some((index, line)) = lines.next() else {
            return Ok(None);
        };
        offset += line.len();
        if is_strokes_fence(line) {
            break index;
        }
    };

    let content_start = offset;
    for (_, line) in lines {
        if line.trim() == "```" {
            let content = &source[content_start..offset];
            return Ok(Some(BodyResult {
                content: content.strip_suffix('\n').unwrap_or(content).to_string(),
                line_offset: opening + 1,
                content_end: offset + line.len(),
            }));
        }
        offset += line.len();
    }

    Err(ArtError::Parse {
        message: format!("line {}: unclosed ```{} block", opening + 1, STROKES_FENCE),
        help: Some("Close the block with ``` on its own line".to_string()),
    })
}

fn is_strokes_fence(line: &str) -> bool {
    line.trim_start()
        .strip_prefix("```")
        .map(|rest| rest.trim() == STROKES_FENCE)
        .unwrap_or(false)
}
