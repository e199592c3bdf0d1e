#![forbid(unsafe_code)]

//! Numeric interpretation of raw host values.
//!
//! Values arrive as text (field values, attributes), as numbers
//! (configuration presets), or not at all (unresolved elements). Parsing is
//! lexical and non-strict: a number is read off the front of the text and
//! trailing garbage is ignored, so `"12px"` is 12 and `"3.5 items"` is 3.5.
//! Integer mode truncates the scan at the first non-digit (`"12.9"` is 12);
//! already-numeric input is rounded to the nearest integer instead.

use crate::diagnostics::{DiagnosticsSink, Issue};

/// Whether values are interpreted as integers or as floats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberMode {
    /// Leading-integer lexical form; numeric input rounds to nearest.
    #[default]
    Integer,
    /// Leading-decimal lexical form; numeric input passes through.
    Float,
}

/// A raw value sourced from the host, before numeric interpretation.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// Textual content: a field value or an attribute.
    Text(String),
    /// Already-numeric content, e.g. a configuration preset.
    Number(f64),
    /// Nothing readable, e.g. a missing attribute.
    Absent,
}

impl RawValue {
    /// Wrap an optional host read.
    #[must_use]
    pub fn from_host(read: Option<String>) -> Self {
        match read {
            Some(text) => RawValue::Text(text),
            None => RawValue::Absent,
        }
    }
}

/// Scan a number off the front of `text`, ignoring what follows.
///
/// Leading whitespace is skipped. Returns `None` when no digits are found.
/// Float mode accepts one decimal point and an exponent; an incomplete
/// exponent (`"1e"`) is truncated away rather than rejected.
#[must_use]
pub fn lexical(text: &str, mode: NumberMode) -> Option<f64> {
    let s = text.trim_start();
    let b = s.as_bytes();
    let mut i = 0;

    if matches!(b.first(), Some(&(b'+' | b'-'))) {
        i += 1;
    }
    let int_start = i;
    while b.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut has_digits = i > int_start;

    let end = match mode {
        NumberMode::Integer => i,
        NumberMode::Float => {
            let mut end = i;
            if b.get(end) == Some(&b'.') {
                let mut j = end + 1;
                while b.get(j).is_some_and(u8::is_ascii_digit) {
                    j += 1;
                }
                // "5." and ".5" are both acceptable, "." alone is not.
                if j > end + 1 || has_digits {
                    has_digits = has_digits || j > end + 1;
                    end = j;
                }
            }
            if has_digits && matches!(b.get(end), Some(&(b'e' | b'E'))) {
                let mut j = end + 1;
                if matches!(b.get(j), Some(&(b'+' | b'-'))) {
                    j += 1;
                }
                let exp_digits = j;
                while b.get(j).is_some_and(u8::is_ascii_digit) {
                    j += 1;
                }
                if j > exp_digits {
                    end = j;
                }
            }
            end
        }
    };

    if !has_digits {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

/// Interpret a raw value, reporting unparsable text through `sink`.
///
/// With `empty_is_absent` set, empty text is treated as absent (no report)
/// rather than as a parse failure. Absent input never reports.
pub fn checked(
    raw: &RawValue,
    mode: NumberMode,
    empty_is_absent: bool,
    sink: &dyn DiagnosticsSink,
) -> Option<f64> {
    match raw {
        RawValue::Absent => None,
        RawValue::Number(n) => Some(match mode {
            NumberMode::Integer => n.round(),
            NumberMode::Float => *n,
        }),
        RawValue::Text(text) => {
            if empty_is_absent && text.is_empty() {
                return None;
            }
            let parsed = lexical(text, mode);
            if parsed.is_none() {
                sink.report(Issue::ParseFailure { raw: text.clone() });
            }
            parsed
        }
    }
}

/// Shortest display form of a number: integral values print without a
/// fractional part.
#[must_use]
pub(crate) fn format_number(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CaptureSink {
        issues: RefCell<Vec<Issue>>,
    }

    impl DiagnosticsSink for CaptureSink {
        fn report(&self, issue: Issue) {
            self.issues.borrow_mut().push(issue);
        }
    }

    #[test]
    fn integer_lexical_truncates() {
        assert_eq!(lexical("12", NumberMode::Integer), Some(12.0));
        assert_eq!(lexical("12.9", NumberMode::Integer), Some(12.0));
        assert_eq!(lexical("12abc", NumberMode::Integer), Some(12.0));
        assert_eq!(lexical("0x10", NumberMode::Integer), Some(0.0));
        assert_eq!(lexical("  +5", NumberMode::Integer), Some(5.0));
        assert_eq!(lexical("-3", NumberMode::Integer), Some(-3.0));
    }

    #[test]
    fn integer_lexical_rejects_digitless_input() {
        assert_eq!(lexical("", NumberMode::Integer), None);
        assert_eq!(lexical("abc", NumberMode::Integer), None);
        assert_eq!(lexical("-", NumberMode::Integer), None);
        assert_eq!(lexical(".5", NumberMode::Integer), None);
    }

    #[test]
    fn float_lexical_reads_leading_decimal() {
        assert_eq!(lexical("3.14xyz", NumberMode::Float), Some(3.14));
        assert_eq!(lexical(".5", NumberMode::Float), Some(0.5));
        assert_eq!(lexical("5.", NumberMode::Float), Some(5.0));
        assert_eq!(lexical("1e3", NumberMode::Float), Some(1000.0));
        assert_eq!(lexical("-2.5e-1", NumberMode::Float), Some(-0.25));
        assert_eq!(lexical("2.5.6", NumberMode::Float), Some(2.5));
    }

    #[test]
    fn float_lexical_truncates_incomplete_exponent() {
        assert_eq!(lexical("1e", NumberMode::Float), Some(1.0));
        assert_eq!(lexical("1e+", NumberMode::Float), Some(1.0));
    }

    #[test]
    fn float_lexical_rejects_bare_punctuation() {
        assert_eq!(lexical(".", NumberMode::Float), None);
        assert_eq!(lexical("e3", NumberMode::Float), None);
        assert_eq!(lexical("+.", NumberMode::Float), None);
    }

    #[test]
    fn numeric_input_rounds_in_integer_mode() {
        let sink = CaptureSink::default();
        let v = checked(&RawValue::Number(2.6), NumberMode::Integer, false, &sink);
        assert_eq!(v, Some(3.0));
        let v = checked(&RawValue::Number(2.6), NumberMode::Float, false, &sink);
        assert_eq!(v, Some(2.6));
        assert!(sink.issues.borrow().is_empty());
    }

    #[test]
    fn absent_input_is_silent() {
        let sink = CaptureSink::default();
        assert_eq!(checked(&RawValue::Absent, NumberMode::Integer, false, &sink), None);
        assert!(sink.issues.borrow().is_empty());
    }

    #[test]
    fn empty_text_is_absent_only_when_allowed() {
        let sink = CaptureSink::default();
        let raw = RawValue::Text(String::new());
        assert_eq!(checked(&raw, NumberMode::Integer, true, &sink), None);
        assert!(sink.issues.borrow().is_empty());

        assert_eq!(checked(&raw, NumberMode::Integer, false, &sink), None);
        assert_eq!(
            sink.issues.borrow().as_slice(),
            &[Issue::ParseFailure { raw: String::new() }]
        );
    }

    #[test]
    fn unparsable_text_reports_and_yields_none() {
        let sink = CaptureSink::default();
        let raw = RawValue::Text("ten".into());
        assert_eq!(checked(&raw, NumberMode::Integer, true, &sink), None);
        assert_eq!(
            sink.issues.borrow().as_slice(),
            &[Issue::ParseFailure { raw: "ten".into() }]
        );
    }

    #[test]
    fn format_drops_integral_fraction() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-9.0), "-9");
    }
}
