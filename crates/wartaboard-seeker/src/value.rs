//! Runtime value types for field access.
//!
//! The [`Value`] enum represents the runtime value of a field extracted from a
//! record. Every value has exactly one textual form, produced by
//! [`Value::to_text`], which search, filter rules and default cell rendering
//! all share.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, SecondsFormat};

/// Runtime value of a record field, borrowed from the record where possible.
///
/// # Example
///
/// ```
/// use wartaboard_seeker::{Value, Number};
///
/// struct Event {
///     name: String,
///     seats: u32,
/// }
///
/// fn accessor<'a>(event: &'a Event, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::from(event.name.as_str()),
///         "seats" => Value::Number(Number::from(event.seats)),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value, borrowed from the record or owned when it had to be formatted.
    String(Cow<'a, str>),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch, UTC).
    Timestamp(Timestamp),
    /// Enum variant label.
    Enum(&'a str),
    /// Boolean value.
    Bool(bool),
    /// Field not present, null, or unsupported.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the timestamp value, if present.
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Extracts the enum label, if present.
    pub fn as_enum(&self) -> Option<&'a str> {
        match self {
            Value::Enum(label) => Some(label),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the textual form of this value.
    ///
    /// `None` stringifies to the empty string, so missing fields render blank
    /// and only ever match an empty search or an `equals ""` rule.
    pub fn to_text(&self) -> Cow<'a, str> {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Timestamp(t) => Cow::Owned(t.to_string()),
            Value::Enum(label) => Cow::Borrowed(label),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::None => Cow::Borrowed(""),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value<'_> {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers are stored in one of three variants to preserve precision:
/// - `I64` for signed integers
/// - `U64` for unsigned integers
/// - `F64` for floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $wide:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )+
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// Displays as RFC 3339 in UTC with second precision, e.g.
/// `2025-01-05T10:00:00Z`. Out-of-range values fall back to the raw
/// millisecond count.
///
/// ```
/// use wartaboard_seeker::Timestamp;
///
/// assert_eq!(Timestamp::from_secs(0).to_string(), "1970-01-01T00:00:00Z");
/// assert!(Timestamp(1000) < Timestamp(2000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    ///
    /// Saturates at the bounds of the millisecond range.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0 / 1000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Timestamp(millis)
    }
}
