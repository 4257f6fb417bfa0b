//! Error types for mocex-trace
//!
//! Every failure is fatal for the file or query that raised it. Callers decide
//! whether to abort the whole run or skip the offending logfile.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// mocex-trace error types
#[derive(Error, Debug)]
pub enum Error {
    /// Logfile content does not match the expected layout
    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    /// Query asked for an unknown metric or ran on an empty collection
    #[error("Not found: {0}")]
    NotFound(String),

    /// Subsystem tag not recognized by a tag-specific query
    #[error("Unknown solver tag: {0:?} (expected MOC, CMFD or MIX)")]
    UnknownTag(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error comes from malformed log content.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Malformed log content. Line numbers are 1-based and count from the top of
/// the file, preamble included.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// The solve block never starts
    #[error("begin marker {marker:?} not found")]
    MissingBeginMarker {
        /// Marker text that was searched for
        marker: String,
    },

    /// A classified data row is shorter than the fixed layout
    #[error("line {line}: expected at least {expected} '|'-separated fields, found {found}")]
    TooFewFields {
        /// Offending line
        line: usize,
        /// Minimum field count
        expected: usize,
        /// Fields actually present
        found: usize,
    },

    /// A compound field is missing one of its whitespace-separated tokens
    #[error("line {line}: field {field} needs {expected} tokens, found {found}")]
    TooFewTokens {
        /// Offending line
        line: usize,
        /// Positional index of the field
        field: usize,
        /// Token count required
        expected: usize,
        /// Tokens actually present
        found: usize,
    },

    /// A token does not parse as the metric's type
    #[error("line {line}: invalid value {value:?} for {name}")]
    InvalidValue {
        /// Offending line
        line: usize,
        /// Metric or quantity being read
        name: String,
        /// Raw token
        value: String,
    },

    /// A `Group` header disagrees with the running group counter
    #[error("line {line}: group header index {found} does not match running group counter {expected}")]
    GroupMismatch {
        /// Offending line
        line: usize,
        /// Counter value after increment
        expected: u32,
        /// Index printed in the log
        found: u32,
    },

    /// A residual sample appears before any right hand side norm
    #[error("line {line}: residual sample before any Right Hand Side Norm")]
    MissingRhsNorm {
        /// Offending line
        line: usize,
    },

    /// A residual sample would be divided by a zero, negative or NaN norm
    #[error("line {line}: residual sample with non-positive Right Hand Side Norm {norm}")]
    NonPositiveRhsNorm {
        /// Offending line
        line: usize,
        /// Norm in effect for the group
        norm: f64,
    },

    /// An input deck key has no value
    #[error("line {line}: missing argument value for {key:?}")]
    MissingInputValue {
        /// Offending line
        line: usize,
        /// Key without a value
        key: String,
    },
}
