//! Runtime cell values.
//!
//! A [`Value`] is what a column accessor reads out of a row. The engine only
//! ever compares values (for sorting) and turns them into text (for the
//! global filter and for default cell rendering); it never interprets what a
//! field means.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Value read out of a row by a column accessor.
///
/// String values may borrow from the row or be computed and owned, so both
/// field accessors and computed accessors return the same type.
///
/// # Example
///
/// ```
/// use tablekit_engine::{Number, Value};
///
/// struct Transfer {
///     memo: String,
///     lamports: u64,
/// }
///
/// fn read<'a>(t: &'a Transfer, key: &str) -> Value<'a> {
///     match key {
///         "memo" => Value::from(t.memo.as_str()),
///         "lamports" => Value::Number(Number::U64(t.lamports)),
///         _ => Value::None,
///     }
/// }
///
/// let t = Transfer { memo: "rent".into(), lamports: 5000 };
/// assert_eq!(read(&t, "lamports").display(), "5000");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// Text, borrowed from the row or computed.
    String(Cow<'a, str>),
    /// Numeric value.
    Number(Number),
    /// Point in time (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Field absent, null, or not readable.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` if this is a `String` value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if this is a `Number` value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
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

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Raw text form of the value.
    ///
    /// Used for default cell rendering and for global filter matching.
    /// `None` renders as the empty string.
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_ref()),
            Value::Number(n) => Cow::Owned(n.to_string()),
            Value::Timestamp(t) => Cow::Owned(t.as_millis().to_string()),
            Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Value::None => Cow::Borrowed(""),
        }
    }

    /// Detaches the value from the row it was read from.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
            Value::Number(n) => Value::Number(n),
            Value::Timestamp(t) => Value::Timestamp(t),
            Value::Bool(b) => Value::Bool(b),
            Value::None => Value::None,
        }
    }

    /// Position of this value's type in the cross-type ordering.
    pub(crate) fn type_rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Number(_) => 1,
            Value::Timestamp(_) => 2,
            Value::String(_) => 3,
            Value::None => 4,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
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

impl From<Timestamp> for Value<'_> {
    fn from(t: Timestamp) -> Self {
        Value::Timestamp(t)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::None)
    }
}

macro_rules! value_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Numeric value.
///
/// Integers keep their signedness so that large values compare exactly;
/// floats are compared with a total order so NaN never breaks sorting.
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

    /// Compares two numbers, handling mixed representations.
    pub fn compare(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::I64(a), Number::U64(b)) => {
                if a < 0 {
                    Ordering::Less
                } else {
                    (a as u64).cmp(&b)
                }
            }
            (Number::U64(a), Number::I64(b)) => {
                if b < 0 {
                    Ordering::Greater
                } else {
                    a.cmp(&(b as u64))
                }
            }
            _ => self.to_f64().total_cmp(&other.to_f64()),
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
    ($variant:ident as $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $target)
                }
            }
        )*
    };
}

number_from!(I64 as i64: i8, i16, i32, i64, isize);
number_from!(U64 as u64: u8, u16, u32, u64, usize);
number_from!(F64 as f64: f32, f64);

/// Timestamp as milliseconds since Unix epoch.
///
/// ```
/// use tablekit_engine::Timestamp;
///
/// assert!(Timestamp::from_secs(1) < Timestamp::from_millis(1500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp as whole seconds since Unix epoch.
    pub fn as_secs(self) -> i64 {
        self.0.div_euclid(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_type_checks() {
        assert!(Value::from("abc").is_string());
        assert!(Value::from(42i32).is_number());
        assert!(Value::None.is_none());
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(
            Value::Timestamp(Timestamp(5)).as_timestamp(),
            Some(Timestamp(5))
        );
        assert_eq!(Value::from("x").as_number(), None);
    }

    #[test]
    fn display_text() {
        assert_eq!(Value::from("Raydium").display(), "Raydium");
        assert_eq!(Value::from(123456u64).display(), "123456");
        assert_eq!(Value::from(-3i64).display(), "-3");
        assert_eq!(Value::from(0.5f64).display(), "0.5");
        assert_eq!(Value::Timestamp(Timestamp(1500)).display(), "1500");
        assert_eq!(Value::from(false).display(), "false");
        assert_eq!(Value::None.display(), "");
    }

    #[test]
    fn option_conversion() {
        let present: Option<i64> = Some(7);
        let absent: Option<i64> = None;
        assert_eq!(Value::from(present), Value::Number(Number::I64(7)));
        assert_eq!(Value::from(absent), Value::None);
    }

    #[test]
    fn owned_values_survive_the_row() {
        let owned = {
            let text = String::from("temporary");
            Value::from(text.as_str()).into_owned()
        };
        assert_eq!(owned.as_str(), Some("temporary"));
    }

    #[test]
    fn number_comparisons_mixed_types() {
        assert_eq!(Number::I64(5).compare(Number::U64(10)), Ordering::Less);
        assert_eq!(Number::I64(-1).compare(Number::U64(0)), Ordering::Less);
        assert_eq!(Number::U64(3).compare(Number::I64(-9)), Ordering::Greater);
        assert_eq!(Number::I64(5).compare(Number::F64(5.0)), Ordering::Equal);
        assert_eq!(Number::U64(10).compare(Number::F64(5.5)), Ordering::Greater);
    }

    #[test]
    fn number_nan_is_ordered() {
        // total_cmp places positive NaN above every other float
        assert_eq!(
            Number::F64(f64::NAN).compare(Number::F64(1.0)),
            Ordering::Greater
        );
        assert_eq!(
            Number::F64(f64::NAN).compare(Number::F64(f64::NAN)),
            Ordering::Equal
        );
    }

    #[test]
    fn timestamp_conversions() {
        assert_eq!(Timestamp::from_secs(1).as_millis(), 1000);
        assert_eq!(Timestamp::from_millis(5000).as_secs(), 5);
        assert_eq!(Timestamp::from_millis(-1).as_secs(), -1);
    }
}
