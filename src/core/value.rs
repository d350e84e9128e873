//! Attribute values
//!
//! Attributes are passed as a flat slice of [`Value`]s where keys and values
//! alternate. Keys go through the same stringification as values, so any
//! value kind can be used as a key.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Placeholder rendered for a key that has no matching value
pub const MISSING_VALUE: &str = "<MISSING>";

/// A single attribute key or value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    /// Rendered as `[a b c]`
    List(Vec<Value>),
    /// Rendered as `{key:value other:value}`
    Map(Vec<(String, Value)>),
    /// Partner of an unmatched trailing key, rendered as `<MISSING>`
    Missing,
}

impl Value {
    /// Capture anything with a `Display` impl as a string value
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Str(value.to_string())
    }

    /// Build a map value from key/value pairs
    pub fn map<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Borrow the text directly when no formatting is needed
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Missing => Some(MISSING_VALUE),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{}", i),
            Value::Uint(u) => write!(f, "{}", u),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Duration(d) => write_duration(f, *d),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Missing => f.write_str(MISSING_VALUE),
        }
    }
}

/// Compact duration notation: `0s`, `750ns`, `1.5µs`, `57ms`, `30s`, `2m0s`,
/// `1h2m3.5s`.
fn write_duration(f: &mut fmt::Formatter<'_>, d: Duration) -> fmt::Result {
    const MICRO: u128 = 1_000;
    const MILLI: u128 = 1_000_000;
    const SECOND: u128 = 1_000_000_000;

    let nanos = d.as_nanos();
    if nanos == 0 {
        return f.write_str("0s");
    }
    if nanos < MICRO {
        return write!(f, "{}ns", nanos);
    }
    if nanos < MILLI {
        return write_scaled(f, nanos, MICRO, "µs");
    }
    if nanos < SECOND {
        return write_scaled(f, nanos, MILLI, "ms");
    }

    let secs = d.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if hours > 0 {
        write!(f, "{}h", hours)?;
    }
    if hours > 0 || minutes > 0 {
        write!(f, "{}m", minutes)?;
    }
    write!(f, "{}", seconds)?;
    write_fraction(f, u128::from(d.subsec_nanos()), SECOND)?;
    f.write_str("s")
}

fn write_scaled(f: &mut fmt::Formatter<'_>, nanos: u128, unit: u128, suffix: &str) -> fmt::Result {
    write!(f, "{}", nanos / unit)?;
    write_fraction(f, nanos % unit, unit)?;
    f.write_str(suffix)
}

fn write_fraction(f: &mut fmt::Formatter<'_>, remainder: u128, unit: u128) -> fmt::Result {
    if remainder == 0 {
        return Ok(());
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{:0width$}", remainder, width = width);
    write!(f, ".{}", digits.trim_end_matches('0'))
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<&Path> for Value {
    fn from(p: &Path) -> Self {
        Value::Str(p.display().to_string())
    }
}

impl From<&PathBuf> for Value {
    fn from(p: &PathBuf) -> Self {
        Value::from(p.as_path())
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(u: $t) -> Self {
                Value::Uint(u as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::from(-12).to_string(), "-12");
        assert_eq!(Value::from(200u16).to_string(), "200");
        assert_eq!(Value::from(2.5).to_string(), "2.5");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Missing.to_string(), "<MISSING>");
    }

    #[test]
    fn test_duration_display() {
        let cases = [
            (Duration::ZERO, "0s"),
            (Duration::from_nanos(750), "750ns"),
            (Duration::from_nanos(1_500), "1.5µs"),
            (Duration::from_millis(57), "57ms"),
            (Duration::from_millis(500), "500ms"),
            (Duration::from_micros(1_250), "1.25ms"),
            (Duration::from_secs(30), "30s"),
            (Duration::from_secs(120), "2m0s"),
            (Duration::from_secs(3600), "1h0m0s"),
            (Duration::from_millis(3_723_500), "1h2m3.5s"),
        ];

        for (duration, want) in cases {
            assert_eq!(Value::from(duration).to_string(), want);
        }
    }

    #[test]
    fn test_list_display() {
        let choices = Value::from(vec!["merlot", "malbec", "rioja"]);
        assert_eq!(choices.to_string(), "[merlot malbec rioja]");

        let empty: Vec<i32> = Vec::new();
        assert_eq!(Value::from(empty).to_string(), "[]");
    }

    #[test]
    fn test_map_display() {
        let map = Value::map([("name", Value::from("oven")), ("temp", Value::from(220))]);
        assert_eq!(map.to_string(), "{name:oven temp:220}");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Missing.as_str(), Some(MISSING_VALUE));
        assert_eq!(Value::from(1).as_str(), None);
    }
}
