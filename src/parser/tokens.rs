//! Token types for the date pattern lexer.

use crate::ast::DateField;

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A pattern letter naming a date/time field
    Field(DateField),
    /// Any other character
    Literal(char),
    /// A backslash-escaped character (`\x`)
    EscapedChar(char),

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
