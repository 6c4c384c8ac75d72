//! Error types for DFML parsing.
//!
//! Every parse failure carries the 1-based source line where it was
//! detected. A malformed token aborts the whole parse; no partial tree is
//! returned and no recovery is attempted — callers own any resilience
//! policy (e.g. re-fetching a malformed document).
//!
//! Building is infallible: the element set is closed, so the "unrecognized
//! element type" fault of dynamically-typed renditions has no Rust
//! counterpart.
//!
//! ## Examples
//!
//! ```rust
//! use dfml::{parse, ParseError};
//!
//! let err = parse("node {\n  (\n}").unwrap_err();
//! assert_eq!(err.line(), 2);
//! assert!(matches!(err, ParseError::InvalidChildCharacter { .. }));
//! ```

use thiserror::Error;

/// All failures the parser can report.
///
/// Each variant carries the 1-based line where the violation was detected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// An unrecognized character appeared where an element was expected.
    #[error("invalid character {ch:?} for node child on line {line}")]
    InvalidChildCharacter { ch: char, line: usize },

    /// A node position yielded zero identifier characters.
    #[error("empty node name encountered on line {line}")]
    EmptyNodeName { line: usize },

    /// A second `(...)` list followed a node's name.
    #[error("double attribute list found in the node on line {line}")]
    DuplicateAttributeList { line: usize },

    /// An identifier in value position was neither `true` nor `false`.
    #[error("boolean conversion error for {word:?} on line {line}")]
    BooleanConversion { word: String, line: usize },

    /// Input ended before a `/*` comment was closed, or a lone `/` was not
    /// followed by `/` or `*`.
    #[error("unexpected comment termination on line {line}")]
    UnterminatedComment { line: usize },

    /// A numeric run could not be converted to an integer or double.
    #[error("number conversion error for {literal:?} on line {line}")]
    NumberConversion { literal: String, line: usize },
}

impl ParseError {
    /// Returns the 1-based source line where the failure was detected.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            ParseError::InvalidChildCharacter { line, .. }
            | ParseError::EmptyNodeName { line }
            | ParseError::DuplicateAttributeList { line }
            | ParseError::BooleanConversion { line, .. }
            | ParseError::UnterminatedComment { line }
            | ParseError::NumberConversion { line, .. } => *line,
        }
    }
}

/// Alias for `Result` with [`ParseError`] as the error type.
pub type Result<T> = std::result::Result<T, ParseError>;
