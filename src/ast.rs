//! AST types for parsed date patterns.

use crate::error::PatternError;

/// Date/time fields a pattern can refer to, one per pattern letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// `d` - Day of month with leading zero (01-31)
    Day2,
    /// `D` - Weekday as abbreviated name (Mon, Tue, etc.)
    DayAbbr,
    /// `j` - Day of month without leading zero (1-31)
    Day,
    /// `l` - Weekday as full name (Monday, Tuesday, etc.)
    DayFull,
    /// `N` - ISO weekday number (1 = Monday through 7 = Sunday)
    IsoWeekday,
    /// `S` - Ordinal suffix of the preceding number, or of the day
    OrdinalSuffix,
    /// `w` - Weekday number (0 = Sunday through 6 = Saturday)
    Weekday,
    /// `z` - Day of the year, starting at 0
    DayOfYear,
    /// `W` - ISO week number
    IsoWeek,
    /// `F` - Month as full name (January, February, etc.)
    MonthFull,
    /// `m` - Month as number with leading zero (01-12)
    Month2,
    /// `M` - Month as abbreviated name (Jan, Feb, etc.)
    MonthAbbr,
    /// `n` - Month as number without leading zero (1-12)
    Month,
    /// `t` - Number of days in the month
    DaysInMonth,
    /// `L` - 1 in a leap year, otherwise 0
    LeapYear,
    /// `o` - ISO week-numbering year
    IsoYear,
    /// `Y` - Full year
    Year4,
    /// `y` - Two-digit year
    Year2,
    /// `a` - Lowercase meridiem (am/pm)
    AmPmLower,
    /// `A` - Uppercase meridiem (AM/PM)
    AmPmUpper,
    /// `g` - 12-hour hour without leading zero (1-12)
    Hour12,
    /// `G` - 24-hour hour without leading zero (0-23)
    Hour,
    /// `h` - 12-hour hour with leading zero (01-12)
    Hour12Padded,
    /// `H` - 24-hour hour with leading zero (00-23)
    Hour2,
    /// `i` - Minutes with leading zero (00-59)
    Minute2,
    /// `s` - Seconds with leading zero (00-59)
    Second2,
}

impl DateField {
    /// Look up the field for a pattern letter.
    pub fn from_letter(ch: char) -> Option<Self> {
        let field = match ch {
            'd' => DateField::Day2,
            'D' => DateField::DayAbbr,
            'j' => DateField::Day,
            'l' => DateField::DayFull,
            'N' => DateField::IsoWeekday,
            'S' => DateField::OrdinalSuffix,
            'w' => DateField::Weekday,
            'z' => DateField::DayOfYear,
            'W' => DateField::IsoWeek,
            'F' => DateField::MonthFull,
            'm' => DateField::Month2,
            'M' => DateField::MonthAbbr,
            'n' => DateField::Month,
            't' => DateField::DaysInMonth,
            'L' => DateField::LeapYear,
            'o' => DateField::IsoYear,
            'Y' => DateField::Year4,
            'y' => DateField::Year2,
            'a' => DateField::AmPmLower,
            'A' => DateField::AmPmUpper,
            'g' => DateField::Hour12,
            'G' => DateField::Hour,
            'h' => DateField::Hour12Padded,
            'H' => DateField::Hour2,
            'i' => DateField::Minute2,
            's' => DateField::Second2,
            _ => return None,
        };
        Some(field)
    }

    /// The pattern letter for this field.
    pub fn letter(&self) -> char {
        match self {
            DateField::Day2 => 'd',
            DateField::DayAbbr => 'D',
            DateField::Day => 'j',
            DateField::DayFull => 'l',
            DateField::IsoWeekday => 'N',
            DateField::OrdinalSuffix => 'S',
            DateField::Weekday => 'w',
            DateField::DayOfYear => 'z',
            DateField::IsoWeek => 'W',
            DateField::MonthFull => 'F',
            DateField::Month2 => 'm',
            DateField::MonthAbbr => 'M',
            DateField::Month => 'n',
            DateField::DaysInMonth => 't',
            DateField::LeapYear => 'L',
            DateField::IsoYear => 'o',
            DateField::Year4 => 'Y',
            DateField::Year2 => 'y',
            DateField::AmPmLower => 'a',
            DateField::AmPmUpper => 'A',
            DateField::Hour12 => 'g',
            DateField::Hour => 'G',
            DateField::Hour12Padded => 'h',
            DateField::Hour2 => 'H',
            DateField::Minute2 => 'i',
            DateField::Second2 => 's',
        }
    }

    /// Returns true if the field resolves to a name rather than a number.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            DateField::DayAbbr
                | DateField::DayFull
                | DateField::MonthFull
                | DateField::MonthAbbr
                | DateField::AmPmLower
                | DateField::AmPmUpper
                | DateField::OrdinalSuffix
        )
    }
}

/// A single element of a date pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternPart {
    /// A field resolved from the date
    Field(DateField),
    /// Text copied to the output unchanged
    Literal(String),
}

/// A parsed date pattern such as `l, F jS, Y`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePattern {
    parts: Vec<PatternPart>,
}

impl DatePattern {
    /// Parse a date pattern.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        crate::parser::parse(pattern)
    }

    pub(crate) fn from_parts(parts: Vec<PatternPart>) -> Self {
        DatePattern { parts }
    }

    /// Returns the parts of this pattern.
    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// Returns true if the pattern contains the given field.
    pub fn has_field(&self, field: DateField) -> bool {
        self.parts
            .iter()
            .any(|p| matches!(p, PatternPart::Field(f) if *f == field))
    }
}

impl std::str::FromStr for DatePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
