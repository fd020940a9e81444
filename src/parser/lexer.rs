//! Lexer for tokenizing date pattern strings.
//!
//! Every character is one token:
//! - Pattern letters (`d`, `j`, `F`, `Y`, ...) become Field tokens
//! - `\x` becomes an EscapedChar token, so `\j` is a literal `j`
//! - Everything else is a Literal

use crate::ast::DateField;
use crate::error::PatternError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = if ch == '\\' {
            self.lex_escaped_char()?
        } else {
            self.advance();
            match DateField::from_letter(ch) {
                Some(field) => Token::Field(field),
                None => Token::Literal(ch),
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the backslash

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(PatternError::DanglingEscape { position: start }),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<SpannedToken, PatternError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(SpannedToken {
                token: Token::Eof, ..
            }) => None,
            other => Some(other),
        }
    }
}
