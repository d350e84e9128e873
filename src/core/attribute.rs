//! `key=value` attribute formatting
//!
//! Keys are written as-is (styled). Values are stringified and then wrapped
//! in double quotes with escaping when they are empty or contain whitespace,
//! non-printable characters, or the Unicode replacement character. The rule
//! is the same for every value kind.

use super::style::{paint, StyleRole};
pub use super::value::MISSING_VALUE;
use super::value::Value;
use std::borrow::Cow;
use std::fmt::Write;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Default stringification of a value
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(value.to_string()),
    }
}

/// Whether `s` must be written as a quoted string
pub fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.chars().any(|c| {
            c == char::REPLACEMENT_CHARACTER || c.is_whitespace() || !is_printable(c)
        })
}

/// Printable in the sense of "renders as a visible glyph or a plain space":
/// letters, marks, numbers, punctuation and symbols, plus ASCII space.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || !matches!(
            get_general_category(c),
            Control
                | Format
                | Surrogate
                | PrivateUse
                | Unassigned
                | SpaceSeparator
                | LineSeparator
                | ParagraphSeparator
        )
}

/// Append `s` as a double-quoted, escaped string.
pub fn write_quoted(buf: &mut String, s: &str) {
    buf.reserve(s.len() + 2);
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            '\u{07}' => buf.push_str("\\a"),
            '\u{08}' => buf.push_str("\\b"),
            '\u{0B}' => buf.push_str("\\v"),
            '\u{0C}' => buf.push_str("\\f"),
            c if is_printable(c) => buf.push(c),
            c if (c as u32) < 0x80 => {
                let _ = write!(buf, "\\x{:02x}", c as u32);
            }
            c if (c as u32) <= 0xFFFF => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(buf, "\\U{:08x}", c as u32);
            }
        }
    }
    buf.push('"');
}

/// Append the value, quoting it if needed
pub fn write_value(buf: &mut String, value: &Value) {
    let text = stringify(value);
    if needs_quotes(&text) {
        write_quoted(buf, &text);
    } else {
        buf.push_str(&text);
    }
}

/// Append `key=value`
pub fn write_pair(buf: &mut String, key: &Value, value: &Value) {
    buf.push_str(&paint(StyleRole::Key, &stringify(key)));
    buf.push('=');
    write_value(buf, value);
}

/// Append every pair in `kv`, each preceded by a single space.
///
/// A trailing unmatched key is paired with `<MISSING>`.
pub fn write_kvs(buf: &mut String, kv: &[Value]) {
    let mut pairs = kv.chunks_exact(2);
    for pair in pairs.by_ref() {
        buf.push(' ');
        write_pair(buf, &pair[0], &pair[1]);
    }
    if let [key] = pairs.remainder() {
        buf.push(' ');
        write_pair(buf, key, &Value::Missing);
    }
}

/// Append persistent attributes followed by call-site attributes.
pub fn write_attributes(buf: &mut String, persistent: &[Value], call_site: &[Value]) {
    write_kvs(buf, persistent);
    write_kvs(buf, call_site);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::style::{set_color_mode, ColorMode};
    use std::time::Duration;

    fn render(kv: &[Value]) -> String {
        set_color_mode(ColorMode::Never);
        let mut buf = String::new();
        write_kvs(&mut buf, kv);
        buf
    }

    #[test]
    fn test_plain_values_unquoted() {
        let got = render(&[
            "number".into(),
            12.into(),
            "duration".into(),
            Duration::from_secs(30).into(),
            "enabled".into(),
            true.into(),
        ]);
        assert_eq!(got, " number=12 duration=30s enabled=true");
    }

    #[test]
    fn test_spaces_are_quoted() {
        let got = render(&["sentence".into(), "this has spaces".into()]);
        assert_eq!(got, r#" sentence="this has spaces""#);
    }

    #[test]
    fn test_escape_chars() {
        let got = render(&["sentence".into(), "ooh\t\nstuff".into()]);
        assert_eq!(got, r#" sentence="ooh\t\nstuff""#);
    }

    #[test]
    fn test_empty_value_quoted() {
        assert_eq!(render(&["key".into(), "".into()]), r#" key="""#);
    }

    #[test]
    fn test_odd_count_uses_missing() {
        let got = render(&[
            "enabled".into(),
            true.into(),
            "file".into(),
            "./file.txt".into(),
            "elapsed".into(),
        ]);
        assert_eq!(got, " enabled=true file=./file.txt elapsed=<MISSING>");
    }

    #[test]
    fn test_composite_values_go_through_same_rule() {
        let got = render(&["choices".into(), vec!["merlot", "malbec"].into()]);
        assert_eq!(got, r#" choices="[merlot malbec]""#);

        let got = render(&["single".into(), vec!["rioja"].into()]);
        assert_eq!(got, " single=[rioja]");
    }

    #[test]
    fn test_keys_are_never_quoted() {
        assert_eq!(render(&["a key".into(), 1.into()]), " a key=1");
    }

    #[test]
    fn test_needs_quotes() {
        assert!(needs_quotes(""));
        assert!(needs_quotes("a b"));
        assert!(needs_quotes("a\u{00A0}b"));
        assert!(needs_quotes("zero\u{200B}width"));
        assert!(needs_quotes("bell\u{07}"));
        assert!(needs_quotes("bad\u{FFFD}"));
        assert!(!needs_quotes("caf\u{E9}\u{1F600}"));
        assert!(!needs_quotes("plain"));
        assert!(!needs_quotes("ünïcödé"));
        assert!(!needs_quotes("quote\"inside"));
    }

    #[test]
    fn test_write_quoted_escapes() {
        let mut buf = String::new();
        write_quoted(&mut buf, "say \"hi\"\\ \u{01}\u{200B}é");
        assert_eq!(buf, r#""say \"hi\"\\ \x01\u200bé""#);
    }

    #[test]
    fn test_invisible_characters_are_escaped() {
        let cases = [
            ("x\u{E0041}y", r#""x\U000e0041y""#),
            ("x\u{F0000}y", r#""x\U000f0000y""#),
            ("x\u{0378}y", r#""x\u0378y""#),
            ("x\u{FDD0}y", r#""x\ufdd0y""#),
            ("x\u{1D173}y", r#""x\U0001d173y""#),
        ];

        for (raw, expected) in cases {
            assert!(needs_quotes(raw), "{:?} left bare", raw);
            assert_eq!(render(&[Value::from("k"), Value::from(raw)]), format!(" k={}", expected));
        }
    }

    #[test]
    fn test_missing_stays_unquoted() {
        let mut buf = String::new();
        write_value(&mut buf, &Value::Missing);
        assert_eq!(buf, "<MISSING>");
    }
}
