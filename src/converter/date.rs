//! Date and time phrases built from a date pattern

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use super::WordConverter;
use crate::ast::{DateField, PatternPart};
use crate::cache;
use crate::error::ConvertError;
use crate::lexicon::Lexicon;
use crate::options::ConversionMode;
use crate::value::Value;

/// Pattern used when none is given: "Saturday, January First, Two Thousand".
pub const DEFAULT_DATE_PATTERN: &str = "l, F jS, Y";

/// Layouts tried, in order, when a date is given as text.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];
const DATE_LAYOUTS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%B %d, %Y", "%d %B %Y"];

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A pattern field resolved against a date.
enum Resolved {
    Number(i64),
    Text(String),
}

impl WordConverter {
    /// Spell a date using a date pattern.
    ///
    /// Numeric fields are converted to words, names pass through, and `S`
    /// after a numeric field turns it into an ordinal.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use numwords::{WordConverter, DEFAULT_DATE_PATTERN};
    ///
    /// let words = WordConverter::new();
    /// let date = NaiveDate::from_ymd_opt(2012, 3, 21).unwrap();
    /// assert_eq!(
    ///     words.convert_date_to_words(date, DEFAULT_DATE_PATTERN).unwrap(),
    ///     "Wednesday, March Twenty-first, Two Thousand and Twelve"
    /// );
    /// ```
    pub fn convert_date_to_words<'a>(
        &self,
        date: impl Into<Value<'a>>,
        pattern: &str,
    ) -> Result<String, ConvertError> {
        let moment = to_datetime(&date.into())?;
        let pattern = cache::get_or_parse(pattern)?;

        let mut pieces: Vec<String> = Vec::with_capacity(pattern.parts().len());
        // Value of the field just emitted, if it was numeric.
        let mut previous: Option<i64> = None;

        for part in pattern.parts() {
            match part {
                PatternPart::Literal(text) => {
                    pieces.push(text.clone());
                    previous = None;
                }
                PatternPart::Field(DateField::OrdinalSuffix) => match previous.take() {
                    Some(value) => {
                        pieces.pop();
                        pieces.push(self.get_number_ordinal(value));
                    }
                    None => pieces.push(english_suffix(moment.day()).to_string()),
                },
                PatternPart::Field(field) => {
                    match resolve(*field, &moment, &self.lexicon) {
                        Resolved::Number(value) => {
                            let phrase =
                                self.convert_to_words(value, Some(ConversionMode::Automatic))?;
                            pieces.push(phrase);
                            previous = Some(value);
                        }
                        Resolved::Text(text) => {
                            pieces.push(text);
                            previous = None;
                        }
                    }
                }
            }
        }

        Ok(pieces.concat().trim().to_string())
    }
}

/// Accept chrono values directly, or text in one of the known layouts.
fn to_datetime(value: &Value<'_>) -> Result<NaiveDateTime, ConvertError> {
    match value {
        Value::DateTime(dt) => Ok(*dt),
        Value::Date(d) => d.and_hms_opt(0, 0, 0).ok_or_else(|| ConvertError::InvalidDate {
            input: d.to_string(),
        }),
        Value::Text(text) => parse_date_text(text.trim()).ok_or_else(|| {
            tracing::debug!(input = %text, "unrecognised date text");
            ConvertError::InvalidDate {
                input: text.to_string(),
            }
        }),
        other => Err(ConvertError::TypeMismatch {
            expected: "date",
            got: other.type_name(),
        }),
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(text, layout).ok())
        .or_else(|| {
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Resolve a single pattern field.
fn resolve(field: DateField, moment: &NaiveDateTime, lexicon: &Lexicon) -> Resolved {
    let weekday = moment.weekday();
    let month_index = moment.month0() as usize;

    match field {
        // Day fields
        DateField::Day | DateField::Day2 => Resolved::Number(moment.day() as i64),
        DateField::DayAbbr => Resolved::Text(
            lexicon.day_names_short[weekday.num_days_from_sunday() as usize].to_string(),
        ),
        DateField::DayFull => Resolved::Text(
            lexicon.day_names_full[weekday.num_days_from_sunday() as usize].to_string(),
        ),
        DateField::IsoWeekday => Resolved::Number(weekday.number_from_monday() as i64),
        DateField::Weekday => Resolved::Number(weekday.num_days_from_sunday() as i64),
        DateField::DayOfYear => Resolved::Number(moment.ordinal0() as i64),
        DateField::OrdinalSuffix => Resolved::Text(english_suffix(moment.day()).to_string()),

        // Week
        DateField::IsoWeek => Resolved::Number(moment.iso_week().week() as i64),

        // Month fields
        DateField::MonthFull => Resolved::Text(lexicon.month_names_full[month_index].to_string()),
        DateField::MonthAbbr => {
            Resolved::Text(lexicon.month_names_short[month_index].to_string())
        }
        DateField::Month | DateField::Month2 => Resolved::Number(moment.month() as i64),
        DateField::DaysInMonth => {
            Resolved::Number(days_in_month(moment.year(), moment.month()) as i64)
        }

        // Year fields
        DateField::LeapYear => Resolved::Number(is_leap_year(moment.year()) as i64),
        DateField::IsoYear => Resolved::Number(moment.iso_week().year() as i64),
        DateField::Year4 => Resolved::Number(moment.year() as i64),
        DateField::Year2 => Resolved::Number(moment.year().rem_euclid(100) as i64),

        // Time fields
        DateField::AmPmLower => Resolved::Text(meridiem(moment.hour(), lexicon).to_lowercase()),
        DateField::AmPmUpper => Resolved::Text(meridiem(moment.hour(), lexicon).to_uppercase()),
        DateField::Hour12 | DateField::Hour12Padded => {
            Resolved::Number(to_12_hour(moment.hour()) as i64)
        }
        DateField::Hour | DateField::Hour2 => Resolved::Number(moment.hour() as i64),
        DateField::Minute2 => Resolved::Number(moment.minute() as i64),
        DateField::Second2 => Resolved::Number(moment.second() as i64),
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn meridiem(hour: u32, lexicon: &Lexicon) -> &'static str {
    if hour >= 12 {
        lexicon.pm_string
    } else {
        lexicon.am_string
    }
}

/// English suffix for a day of the month: "st", "nd", "rd" or "th".
fn english_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Returns true if the given year is a leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month/year
fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(1), 1);
        assert_eq!(to_12_hour(11), 11);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn test_english_suffix() {
        assert_eq!(english_suffix(1), "st");
        assert_eq!(english_suffix(2), "nd");
        assert_eq!(english_suffix(3), "rd");
        assert_eq!(english_suffix(4), "th");
        assert_eq!(english_suffix(11), "th");
        assert_eq!(english_suffix(12), "th");
        assert_eq!(english_suffix(13), "th");
        assert_eq!(english_suffix(21), "st");
        assert_eq!(english_suffix(22), "nd");
        assert_eq!(english_suffix(31), "st");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2012, 4), 30);
        assert_eq!(days_in_month(2012, 12), 31);
    }

    #[test]
    fn test_parse_date_text_layouts() {
        let expected = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(parse_date_text("01/1/2000"), Some(expected));
        assert_eq!(parse_date_text("2000-01-01"), Some(expected));
        assert_eq!(parse_date_text("January 1, 2000"), Some(expected));
        assert_eq!(
            parse_date_text("2003-04-08 22:35:00").map(|dt| (dt.hour(), dt.minute())),
            Some((22, 35))
        );
        assert_eq!(parse_date_text("not a date"), None);
    }
}
