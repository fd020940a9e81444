//! Number-to-words conversion engine

mod capitalize;
mod cardinal;
#[cfg(feature = "chrono")]
mod date;
mod input;
mod ordinal;

#[cfg(feature = "chrono")]
pub use date::DEFAULT_DATE_PATTERN;

use crate::error::ConvertError;
use crate::lexicon::Lexicon;
use crate::options::{ConversionMode, ConversionOptions};
use crate::value::Value;
use input::Normalized;

/// Converts numbers to English words.
///
/// The lexicon is fixed at construction. Options may be changed between
/// calls; a call never changes them, so a shared `&WordConverter` can be used
/// from many threads at once.
#[derive(Debug, Clone, Default)]
pub struct WordConverter {
    lexicon: Lexicon,
    options: ConversionOptions,
}

impl WordConverter {
    /// Create a converter with English words and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with the given options.
    pub fn with_options(options: ConversionOptions) -> Self {
        WordConverter {
            lexicon: Lexicon::default(),
            options,
        }
    }

    /// Replace the word tables.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut ConversionOptions {
        &mut self.options
    }

    pub fn set_options(&mut self, options: ConversionOptions) {
        self.options = options;
    }

    /// Set the mode used by calls that pass no explicit override.
    pub fn set_mode(&mut self, mode: ConversionMode) {
        self.options.mode = mode;
    }

    pub fn mode(&self) -> ConversionMode {
        self.options.mode
    }

    /// Convert a number, or numeric text, to words.
    ///
    /// Text may start with `$` (currency) and end with `%` (percent) or `°`
    /// (degrees), and may contain thousands commas. Markers only affect this
    /// call. `mode` overrides the configured mode; markers override both.
    ///
    /// # Examples
    ///
    /// ```
    /// use numwords::WordConverter;
    ///
    /// let words = WordConverter::new();
    /// assert_eq!(words.convert_to_words(120, None).unwrap(), "One Hundred and Twenty");
    /// assert_eq!(words.convert_to_words("$1.1", None).unwrap(), "One Dollar and Ten Cents");
    /// ```
    pub fn convert_to_words<'a>(
        &self,
        value: impl Into<Value<'a>>,
        mode: Option<ConversionMode>,
    ) -> Result<String, ConvertError> {
        let value = value.into();
        let mode = mode.unwrap_or(self.options.mode);

        let number = input::normalize(&value, mode).inspect_err(|err| {
            tracing::debug!(input = %input::describe(&value), error = %err, "rejected number");
        })?;

        let mut negative = number.negative;
        let phrase = if number.mode.is_currency() {
            let (whole, cents) =
                number
                    .round_to_cents()
                    .ok_or_else(|| ConvertError::OutOfRange {
                        input: input::describe(&value),
                    })?;
            // Rounding can bring a tiny negative amount to zero.
            negative = number.negative && (whole != 0 || cents != 0);
            self.currency_phrase(whole, cents)
        } else {
            self.plain_phrase(&number)
        };

        Ok(self.finish(phrase.trim(), negative))
    }

    /// Spell the ordinal form of an integer. The sign is ignored.
    ///
    /// ```
    /// use numwords::WordConverter;
    ///
    /// let words = WordConverter::new();
    /// assert_eq!(words.get_number_ordinal(21), "Twenty-first");
    /// assert_eq!(words.get_number_ordinal(-3), "Third");
    /// ```
    pub fn get_number_ordinal(&self, n: i64) -> String {
        let phrase = ordinal::ordinal_phrase(n.unsigned_abs(), &self.lexicon, &self.options);
        self.finish(&phrase, false)
    }

    /// Dollars and cents, each with its unit name.
    fn currency_phrase(&self, whole: u64, cents: u64) -> String {
        let opts = &self.options;
        let mut phrase = String::new();

        if whole != 0 || opts.include_zero_major {
            phrase.push_str(&cardinal::spell(whole, &self.lexicon, opts));
            phrase.push(' ');
            phrase.push_str(&pluralize(&opts.currency_major, whole != 1));
        }

        if cents != 0 || opts.include_zero_minor {
            if !phrase.is_empty() {
                phrase.push(' ');
                phrase.push_str(&opts.conjunction);
                phrase.push(' ');
            }
            phrase.push_str(&cardinal::spell(cents, &self.lexicon, opts));
            phrase.push(' ');
            phrase.push_str(&pluralize(&opts.currency_minor, cents != 1));
        }

        phrase
    }

    /// Whole part, spoken fraction digits and any percent/degree unit.
    fn plain_phrase(&self, number: &Normalized) -> String {
        let opts = &self.options;
        let mut phrase = String::new();

        if number.whole != 0 || opts.include_zero_major {
            phrase.push_str(&cardinal::spell(number.whole, &self.lexicon, opts));
        }

        if let Some(fraction) = &number.fraction {
            phrase.push(' ');
            phrase.push_str(&opts.decimal);
            for digit in fraction.bytes() {
                phrase.push(' ');
                phrase.push_str(self.lexicon.small[(digit - b'0') as usize]);
            }
        }

        if let Some(unit) = number.unit {
            let word = match unit {
                input::Unit::Percent => &opts.percent,
                input::Unit::Degree => &opts.degree,
            };
            let plural = unit.pluralizes() && (number.whole != 1 || number.fraction.is_some());
            phrase.push(' ');
            phrase.push_str(&pluralize(word, plural));
        }

        phrase
    }

    /// Apply the negative prefix and capitalization.
    fn finish(&self, phrase: &str, negative: bool) -> String {
        let opts = &self.options;
        let mut result = if negative {
            format!("{}{}", opts.negative, phrase)
        } else {
            phrase.to_string()
        };
        if opts.capitalize {
            result = capitalize::capitalize_words(&result, &opts.conjunction);
        }
        result.trim().to_string()
    }
}

fn pluralize(word: &str, plural: bool) -> String {
    if plural {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}
