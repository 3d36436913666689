//! Document splitting and parsing.
//!
//! A session file holds one or more artworks, each starting with `---`
//! followed by YAML frontmatter containing at least `name:`.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{ArtError, Result};
use crate::types::{ArtConfig, Session, StrokeOp};

use super::body::extract_body;
use super::frontmatter::extract_frontmatter;
use super::strokes::parse_strokes;

/// Frontmatter keys that are not [`ArtConfig`] fields.
const NAME_KEY: &str = "name";
const SCALE_KEY: &str = "scale";

/// A parsed document before its config is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub name: String,
    /// 1-based line where the document starts.
    pub line: usize,
    /// Frontmatter with `name` removed.
    pub frontmatter: Mapping,
    pub strokes: Vec<StrokeOp>,
}

impl RawDocument {
    /// Fill keys the frontmatter does not set from `defaults`.
    pub fn with_defaults(mut self, defaults: &Mapping) -> Self {
        for (key, value) in defaults {
            if !self.frontmatter.contains_key(key) {
                self.frontmatter.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Resolve the frontmatter into a session.
    pub fn into_session(mut self) -> Result<Session> {
        let scale = match self.frontmatter.remove(SCALE_KEY) {
            None | Some(Value::Null) => None,
            Some(v) => match v.as_u64() {
                Some(n) if n >= 1 => Some(n as usize),
                _ => {
                    return Err(ArtError::Parse {
                        message: format!("{}: scale must be a positive integer", self.name),
                        help: None,
                    })
                }
            },
        };

        let config = ArtConfig::from_yaml(Value::Mapping(self.frontmatter)).map_err(|e| match e {
            ArtError::Parse { message, help } => ArtError::Parse {
                message: format!("{} (line {}): {}", self.name, self.line, message),
                help,
            },
            other => other,
        })?;

        Ok(Session {
            name: self.name,
            config,
            strokes: self.strokes,
            scale,
        })
    }
}

/// Parse a file containing one or more documents.
pub fn parse_documents(source: &str) -> Result<Vec<RawDocument>> {
    let documents = split_documents(source)
        .into_iter()
        .map(|(section, line)| parse_single_document(section, line))
        .collect::<Result<Vec<_>>>()?;

    if documents.is_empty() {
        return Err(ArtError::Parse {
            message: "No documents found in file".to_string(),
            help: Some("Add a document with ---\\nname: my-artwork\\n---".to_string()),
        });
    }

    Ok(documents)
}

/// Parse every document of a source string into sessions.
pub fn parse_sessions(source: &str) -> Result<Vec<Session>> {
    parse_documents(source)?
        .into_iter()
        .map(RawDocument::into_session)
        .collect()
}

/// Read and parse a session file.
pub fn parse_session_file(path: &Path) -> Result<Vec<Session>> {
    let source = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    parse_sessions(&source).map_err(|e| match e {
        ArtError::Parse { message, help } => ArtError::Parse {
            message: format!("{}: {}", path.display(), message),
            help,
        },
        other => other,
    })
}

/// Split source into document sections with their 1-based start line.
fn split_documents(source: &str) -> Vec<(&str, usize)> {
    let lines: Vec<&str> = source.split_inclusive('\n').collect();

    let mut sections = Vec::new();
    let mut current_start = 0;
    let mut current_line = 1;
    let mut in_code_block = false;
    let mut offset = 0;

    for (i, line) in lines.iter().enumerate() {
        if line.trim().starts_with("```") {
            in_code_block = !in_code_block;
        }

        // a new document is `---` directly followed by `name:`
        if !in_code_block && line.trim() == "---" && i > 0 {
            let next_is_name = lines
                .get(i + 1)
                .map_or(false, |next| next.trim().starts_with("name:"));
            if next_is_name {
                let section = &source[current_start..offset];
                if !section.trim().is_empty() {
                    sections.push((section, current_line));
                }
                current_start = offset;
                current_line = i + 1;
            }
        }

        offset += line.len();
    }

    let final_section = &source[current_start..];
    if !final_section.trim().is_empty() {
        sections.push((final_section, current_line));
    }

    sections
}

fn parse_single_document(source: &str, line: usize) -> Result<RawDocument> {
    let frontmatter = extract_frontmatter(source).map_err(|e| at_line(e, line))?;
    let mut values = frontmatter.values;

    let name = values
        .remove(NAME_KEY)
        .and_then(|v| v.as_str().map(str::to_string))
        .ok_or_else(|| ArtError::Parse {
            message: format!("line {}: document missing required 'name' field", line),
            help: Some("Add name: my-artwork to frontmatter".to_string()),
        })?;

    let remaining = &source[frontmatter.content_start..];
    let strokes = match extract_body(remaining)? {
        Some(body) => {
            let body_line = line + source[..frontmatter.content_start].matches('\n').count() + body.line_offset;
            parse_strokes(&body.content, body_line)?
        }
        None => Vec::new(),
    };

    Ok(RawDocument {
        name,
        line,
        frontmatter: values,
        strokes,
    })
}

fn at_line(err: ArtError, line: usize) -> ArtError {
    match err {
        ArtError::Parse { message, help } => ArtError::Parse {
            message: format!("line {}: {}", line, message),
            help,
        },
        other => other,
    }
}
