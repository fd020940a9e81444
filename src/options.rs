//! Conversion options and configuration.

/// How a bare number is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversionMode {
    /// Plain count; fractional digits are read one by one after the decimal word.
    #[default]
    Automatic,
    /// Monetary amount; always two implied decimal places and unit names.
    Currency,
}

impl ConversionMode {
    /// Returns true if this is currency mode.
    pub fn is_currency(&self) -> bool {
        matches!(self, ConversionMode::Currency)
    }
}

/// Options for converting values to words.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOptions {
    /// Joins tens and ones ("twenty-one").
    pub hyphen: String,
    /// Joins hundreds to their remainder, and dollars to cents.
    pub conjunction: String,
    /// Placed after a power-of-1000 group when the remainder is 100 or more.
    pub separator: String,
    /// Prefix for negative values, including any trailing space.
    pub negative: String,
    /// Word between the whole part and spoken fraction digits.
    pub decimal: String,
    /// Unit word for a trailing `%`. Never pluralised.
    pub percent: String,
    /// Unit word for a trailing `°`.
    pub degree: String,
    /// Singular name of the major currency unit.
    pub currency_major: String,
    /// Singular name of the minor currency unit.
    pub currency_minor: String,
    /// Capitalise every word except the conjunction.
    pub capitalize: bool,
    /// Emit "zero dollars" when the whole amount is zero.
    pub include_zero_major: bool,
    /// Emit "zero cents" when the fractional amount is zero.
    pub include_zero_minor: bool,
    /// Mode used when a call passes no explicit override.
    pub mode: ConversionMode,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        ConversionOptions {
            hyphen: "-".to_string(),
            conjunction: "and".to_string(),
            separator: ",".to_string(),
            negative: "negative ".to_string(),
            decimal: "point".to_string(),
            percent: "percent".to_string(),
            degree: "degree".to_string(),
            currency_major: "dollar".to_string(),
            currency_minor: "cent".to_string(),
            capitalize: true,
            include_zero_major: true,
            include_zero_minor: true,
            mode: ConversionMode::Automatic,
        }
    }
}

impl ConversionOptions {
    /// Returns a copy of these options with a different default mode.
    pub fn with_mode(mut self, mode: ConversionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy of these options with capitalisation switched on or off.
    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize = capitalize;
        self
    }

    /// Returns a copy of these options using other currency unit names.
    pub fn with_currency(mut self, major: &str, minor: &str) -> Self {
        self.currency_major = major.to_string();
        self.currency_minor = minor.to_string();
        self
    }
}
