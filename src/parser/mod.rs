//! Parser for `.art.md` session files.
//!
//! # Document Structure
//!
//! Each document has:
//! - YAML frontmatter between `---` markers (must include `name:`; every
//!   other key except `scale` is an [`ArtConfig`](crate::ArtConfig) field)
//! - Free text, ignored
//! - An optional ```` ```strokes ```` block replayed onto the artwork
//!
//! # Usage
//!
//! ```ignore
//! use fractalinator::parser::parse_session_file;
//!
//! for session in parse_session_file(Path::new("art/dune.art.md"))? {
//!     println!("{}: {} strokes", session.name, session.point_count());
//! }
//! ```

mod body;
mod document;
mod frontmatter;
mod strokes;

pub use body::STROKES_FENCE;
pub use document::{parse_documents, parse_session_file, parse_sessions, RawDocument};
pub use strokes::parse_strokes;
