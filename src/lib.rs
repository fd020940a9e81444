//! numwords - English words for numbers
//!
//! This crate spells numbers the way they are read aloud in English: plain
//! cardinals, currency amounts, percentages, degrees, decimal fractions,
//! ordinals, and (with the `chrono` feature) whole dates built from a pattern.
//!
//! ```
//! use numwords::{to_ordinal, to_words};
//!
//! assert_eq!(to_words("$1.506").unwrap(), "One Dollar and Fifty-one Cents");
//! assert_eq!(to_words("32%").unwrap(), "Thirty-two Percent");
//! assert_eq!(to_ordinal(123), "One Hundred and Twenty-third");
//! ```

pub mod ast;
pub mod error;
pub mod lexicon;
pub mod options;
pub mod parser;
pub mod value;

#[cfg(feature = "chrono")]
mod cache;
mod converter;

pub use ast::{DateField, DatePattern, PatternPart};
#[cfg(feature = "chrono")]
pub use converter::DEFAULT_DATE_PATTERN;
pub use converter::WordConverter;
pub use error::{ConvertError, PatternError};
pub use lexicon::Lexicon;
pub use options::{ConversionMode, ConversionOptions};
pub use value::Value;

/// Convert a value to words with default options.
pub fn to_words<'a>(value: impl Into<Value<'a>>) -> Result<String, ConvertError> {
    WordConverter::new().convert_to_words(value, None)
}

/// Spell the ordinal form of an integer with default options.
pub fn to_ordinal(n: i64) -> String {
    WordConverter::new().get_number_ordinal(n)
}

/// Spell a date with default options and the given pattern.
#[cfg(feature = "chrono")]
pub fn date_to_words<'a>(
    date: impl Into<Value<'a>>,
    pattern: &str,
) -> Result<String, ConvertError> {
    WordConverter::new().convert_date_to_words(date, pattern)
}
