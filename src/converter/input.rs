//! Input normalization: unit markers, sign, whole and fractional digits.

use crate::error::ConvertError;
use crate::options::ConversionMode;
use crate::value::Value;

const CURRENCY_MARKER: char = '$';
const PERCENT_MARKER: char = '%';
const DEGREE_MARKER: char = '°';
const THOUSANDS_MARKER: char = ',';

/// Largest magnitude accepted for the whole part.
pub const MAX_MAGNITUDE: u64 = i64::MAX as u64;

/// A unit recognised from a trailing marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Percent,
    Degree,
}

impl Unit {
    /// Returns true if the unit word takes a plural form.
    pub fn pluralizes(&self) -> bool {
        matches!(self, Unit::Degree)
    }
}

/// A number split into sign, whole part and fraction digits.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub negative: bool,
    pub whole: u64,
    /// Fraction digits as written, without the decimal point. Never empty.
    pub fraction: Option<String>,
    pub mode: ConversionMode,
    pub unit: Option<Unit>,
}

impl Normalized {
    /// Round the fraction half-up to whole cents.
    ///
    /// A single fraction digit counts tens of cents. Returns `None` if
    /// rounding carries the whole part past [`MAX_MAGNITUDE`].
    pub fn round_to_cents(&self) -> Option<(u64, u64)> {
        let digits: Vec<u64> = self
            .fraction
            .as_deref()
            .unwrap_or("")
            .bytes()
            .map(|b| (b - b'0') as u64)
            .collect();

        let mut cents = match digits.as_slice() {
            [] => 0,
            [tenths] => tenths * 10,
            [tenths, hundredths, ..] => tenths * 10 + hundredths,
        };
        if digits.get(2).is_some_and(|d| *d >= 5) {
            cents += 1;
        }

        if cents == 100 {
            let whole = self.whole.checked_add(1).filter(|w| *w <= MAX_MAGNITUDE)?;
            Some((whole, 0))
        } else {
            Some((self.whole, cents))
        }
    }
}

/// Render a value the way it was supplied, for error messages and logs.
pub fn describe(value: &Value<'_>) -> String {
    match value {
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Text(s) => s.to_string(),
        #[cfg(feature = "chrono")]
        Value::DateTime(dt) => dt.to_string(),
        #[cfg(feature = "chrono")]
        Value::Date(d) => d.to_string(),
    }
}

/// Normalize a value for conversion, starting from `mode`.
pub fn normalize(value: &Value<'_>, mode: ConversionMode) -> Result<Normalized, ConvertError> {
    match value {
        Value::Integer(n) => from_integer(*n, mode),
        Value::Float(n) => from_float(*n, mode),
        Value::Text(s) => from_text(s, mode),
        #[cfg(feature = "chrono")]
        Value::DateTime(_) | Value::Date(_) => Err(ConvertError::TypeMismatch {
            expected: "number",
            got: value.type_name(),
        }),
    }
}

fn from_integer(n: i64, mode: ConversionMode) -> Result<Normalized, ConvertError> {
    // The negated magnitude of i64::MIN is not representable as a positive i64.
    if n == i64::MIN {
        return Err(ConvertError::OutOfRange {
            input: n.to_string(),
        });
    }
    Ok(Normalized {
        negative: n < 0,
        whole: n.unsigned_abs(),
        fraction: None,
        mode,
        unit: None,
    })
}

fn from_float(n: f64, mode: ConversionMode) -> Result<Normalized, ConvertError> {
    if n.is_nan() {
        return Err(ConvertError::InvalidInput {
            input: n.to_string(),
        });
    }
    if n.is_infinite() {
        return Err(ConvertError::OutOfRange {
            input: n.to_string(),
        });
    }
    // Keep 15 significant digits so binary noise such as 0.1 + 0.2 is not
    // spoken. Display then gives the shortest form, never with an exponent.
    let n = format!("{:.14e}", n).parse::<f64>().unwrap_or(n);
    let text = n.to_string();
    let (negative, whole, fraction) = split_decimal(&text, &text)?
        .ok_or_else(|| ConvertError::InvalidInput { input: text.clone() })?;
    Ok(finish(negative, whole, fraction, mode, None))
}

fn from_text(text: &str, mode: ConversionMode) -> Result<Normalized, ConvertError> {
    let trimmed = text.trim();
    let mut mode = mode;
    let mut unit = None;

    let unsigned = trimmed.trim_start_matches(['-', '+']);
    if unsigned.starts_with(CURRENCY_MARKER) {
        mode = ConversionMode::Currency;
    }
    if trimmed.ends_with(PERCENT_MARKER) {
        mode = ConversionMode::Automatic;
        unit = Some(Unit::Percent);
    }
    if trimmed.ends_with(DEGREE_MARKER) {
        mode = ConversionMode::Automatic;
        unit = Some(Unit::Degree);
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| {
            !matches!(
                *c,
                CURRENCY_MARKER | PERCENT_MARKER | DEGREE_MARKER | THOUSANDS_MARKER
            )
        })
        .collect();

    if let Some((negative, whole, fraction)) = split_decimal(&cleaned, text)? {
        return Ok(finish(negative, whole, fraction, mode, unit));
    }

    // Exponent notation and the like: go through the float path. Spelled-out
    // "inf" and "nan" have no digits and stay invalid.
    let has_digit = cleaned.bytes().any(|b| b.is_ascii_digit());
    match cleaned.parse::<f64>() {
        Ok(n) if has_digit && n.is_finite() => {
            let mut normalized = from_float(n, mode)?;
            normalized.unit = unit;
            Ok(normalized)
        }
        Ok(n) if has_digit && n.is_infinite() => Err(ConvertError::OutOfRange {
            input: text.to_string(),
        }),
        _ => Err(ConvertError::InvalidInput {
            input: text.to_string(),
        }),
    }
}

fn finish(
    negative: bool,
    whole: u64,
    fraction: Option<String>,
    mode: ConversionMode,
    unit: Option<Unit>,
) -> Normalized {
    let nonzero = whole != 0
        || fraction
            .as_deref()
            .is_some_and(|f| f.bytes().any(|b| b != b'0'));
    Normalized {
        negative: negative && nonzero,
        whole,
        fraction,
        mode,
        unit,
    }
}

/// Split plain decimal text (`[+-]digits[.digits]`) into its parts.
///
/// Returns `Ok(None)` if the text is not plain decimal notation, and an
/// out-of-range error if the whole part is too large.
#[allow(clippy::type_complexity)]
fn split_decimal(
    text: &str,
    original: &str,
) -> Result<Option<(bool, u64, Option<String>)>, ConvertError> {
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (whole_digits, fraction_digits) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole_digits)
        || !all_digits(fraction_digits)
        || (whole_digits.is_empty() && fraction_digits.is_empty())
    {
        return Ok(None);
    }

    let out_of_range = || ConvertError::OutOfRange {
        input: original.to_string(),
    };
    let significant = whole_digits.trim_start_matches('0');
    // u64 holds every 19-digit number; anything longer is out of range.
    if significant.len() > 19 {
        return Err(out_of_range());
    }
    let whole = if significant.is_empty() {
        0
    } else {
        significant.parse::<u64>().map_err(|_| out_of_range())?
    };
    if whole > MAX_MAGNITUDE {
        return Err(out_of_range());
    }

    let fraction = (!fraction_digits.is_empty()).then(|| fraction_digits.to_string());
    Ok(Some((negative, whole, fraction)))
}
