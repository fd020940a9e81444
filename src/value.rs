//! Value types that can be converted to words.

/// A value that can be converted to words.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// A whole number
    Integer(i64),
    /// A floating point number
    Float(f64),
    /// Numeric text, optionally carrying `$`, `%`, `°` markers and thousands commas
    Text(&'a str),
    /// A chrono DateTime (requires `chrono` feature)
    #[cfg(feature = "chrono")]
    DateTime(chrono::NaiveDateTime),
    /// A chrono Date (requires `chrono` feature)
    #[cfg(feature = "chrono")]
    Date(chrono::NaiveDate),
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(n: u32) -> Self {
        Value::Integer(n as i64)
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Text(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Text(s.as_str())
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDateTime> for Value<'a> {
    fn from(dt: chrono::NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

#[cfg(feature = "chrono")]
impl<'a> From<chrono::NaiveDate> for Value<'a> {
    fn from(d: chrono::NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl<'a> Value<'a> {
    /// Returns true if this value is a plain number (not text or a date).
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Returns the value as text if it is text.
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            #[cfg(feature = "chrono")]
            Value::DateTime(_) => "datetime",
            #[cfg(feature = "chrono")]
            Value::Date(_) => "date",
        }
    }
}
