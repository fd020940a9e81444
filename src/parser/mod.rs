//! Parser for date patterns.

pub mod lexer;
pub mod tokens;

use crate::ast::{DatePattern, PatternPart};
use crate::error::PatternError;
use lexer::Lexer;
use tokens::Token;

/// Parse a date pattern string into a DatePattern.
pub fn parse(pattern: &str) -> Result<DatePattern, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::EmptyPattern);
    }

    let mut builder = PatternBuilder::new();
    for spanned in Lexer::new(pattern) {
        match spanned?.token {
            Token::Field(field) => builder.add_part(PatternPart::Field(field)),
            Token::Literal(ch) | Token::EscapedChar(ch) => builder.add_literal(ch),
            Token::Eof => break,
        }
    }
    Ok(builder.build())
}

/// Collects pattern parts, merging adjacent literal characters.
struct PatternBuilder {
    parts: Vec<PatternPart>,
    literal: String,
}

impl PatternBuilder {
    fn new() -> Self {
        Self {
            parts: Vec::new(),
            literal: String::new(),
        }
    }

    fn add_literal(&mut self, ch: char) {
        self.literal.push(ch);
    }

    fn add_part(&mut self, part: PatternPart) {
        self.flush_literal();
        self.parts.push(part);
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            let text = std::mem::take(&mut self.literal);
            self.parts.push(PatternPart::Literal(text));
        }
    }

    fn build(mut self) -> DatePattern {
        self.flush_literal();
        DatePattern::from_parts(self.parts)
    }
}
