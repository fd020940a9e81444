//! Error types for conversion and pattern parsing.

use thiserror::Error;

/// Errors that can occur when parsing a date pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("empty date pattern")]
    EmptyPattern,

    #[error("dangling escape at position {position}")]
    DanglingEscape { position: usize },
}

/// Errors that can occur when converting a value to words.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("invalid input: '{input}' is not a number")]
    InvalidInput { input: String },

    #[error("out of range: '{input}' exceeds {max}", max = i64::MAX)]
    OutOfRange { input: String },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    #[error("invalid date: '{input}'")]
    InvalidDate { input: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),
}
