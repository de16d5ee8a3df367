//! Error types for OFF/COFF I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for OFF/COFF I/O operations.
pub type OffResult<T> = Result<T, OffError>;

/// Errors that can occur while reading or loading OFF/COFF data.
///
/// All parse variants fail fast: the first structural violation aborts
/// the parse and no partially populated mesh is ever returned. Line
/// numbers are 1-based positions in the original text, counted before
/// comment and blank lines are stripped.
#[derive(Debug, Error)]
pub enum OffError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The first content line does not start with `OFF` or `COFF`.
    #[error("line {line}: expected OFF or COFF header, found {found:?}")]
    BadHeader {
        /// Line number of the header line (1 if the file has no content).
        line: usize,
        /// The token that was found instead.
        found: String,
    },

    /// The counts line does not carry three integers.
    #[error("line {line}: expected vertex, face and edge counts")]
    BadCounts {
        /// Line number of the counts line.
        line: usize,
    },

    /// A vertex record is too short or fails numeric parse.
    #[error("line {line}: invalid vertex record")]
    BadVertex {
        /// Line number of the vertex record.
        line: usize,
    },

    /// A face declares fewer than three vertices.
    #[error("line {line}: face with {count} vertices, polygons need at least 3")]
    DegenerateFace {
        /// Line number of the face record.
        line: usize,
        /// The declared vertex count.
        count: usize,
    },

    /// A face record has fewer index tokens than declared, or an index
    /// token fails integer parse.
    #[error("line {line}: invalid face record")]
    BadFace {
        /// Line number of the face record.
        line: usize,
    },

    /// The file ran out of content lines before the declared vertex or
    /// face count was met.
    #[error("truncated file: expected {expected} {record} records, got {got}")]
    TruncatedFile {
        /// Which block ran short ("vertex" or "face").
        record: &'static str,
        /// The count the header declared.
        expected: usize,
        /// How many records were actually present.
        got: usize,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
