//! Lenient parsing of numbers typed into form fields.
//!
//! Only the leading number is read, so `"180.5 lbs"` parses as `180.5` and
//! `"12abc"` as `12`. Callers treat `None` as "do not dispatch".

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+))").expect("valid leading decimal regex")
});
static LEADING_INTEGER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid leading integer regex"));

fn leading_decimal(raw: &str) -> Option<f64> {
    let captures = LEADING_DECIMAL_RE.captures(raw)?;
    captures.get(1)?.as_str().parse::<f64>().ok()
}

fn leading_integer(raw: &str) -> Option<i64> {
    let captures = LEADING_INTEGER_RE.captures(raw)?;
    captures.get(1)?.as_str().parse::<i64>().ok()
}

/// Body weight: leading decimal, positive and finite.
pub fn parse_weight(raw: &str) -> Option<f64> {
    leading_decimal(raw).filter(|value| value.is_finite() && *value > 0.0)
}

/// Step count: leading integer, zero or more.
pub fn parse_steps(raw: &str) -> Option<u32> {
    leading_integer(raw).and_then(|value| u32::try_from(value).ok())
}

/// Sets, reps or a step target: leading integer greater than zero.
pub fn parse_positive_count(raw: &str) -> Option<u32> {
    parse_steps(raw).filter(|value| *value > 0)
}

/// Like `parse_positive_count`, substituting `fallback` for bad input.
pub fn parse_count_or(raw: &str, fallback: u32) -> u32 {
    parse_positive_count(raw).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::{parse_count_or, parse_positive_count, parse_steps, parse_weight};

    #[test]
    fn weight_reads_leading_decimal() {
        assert_eq!(parse_weight("180.5"), Some(180.5));
        assert_eq!(parse_weight(" 72kg"), Some(72.0));
        assert_eq!(parse_weight(".5"), Some(0.5));
    }

    #[test]
    fn weight_rejects_zero_negative_and_text() {
        assert_eq!(parse_weight("0"), None);
        assert_eq!(parse_weight("-3"), None);
        assert_eq!(parse_weight("heavy"), None);
        assert_eq!(parse_weight(""), None);
    }

    #[test]
    fn steps_accept_zero_and_reject_negative() {
        assert_eq!(parse_steps("0"), Some(0));
        assert_eq!(parse_steps("8421 steps"), Some(8421));
        assert_eq!(parse_steps("-1"), None);
        assert_eq!(parse_steps("99999999999"), None);
    }

    #[test]
    fn counts_fall_back_on_bad_input() {
        assert_eq!(parse_positive_count("0"), None);
        assert_eq!(parse_count_or("", 3), 3);
        assert_eq!(parse_count_or("abc", 10), 10);
        assert_eq!(parse_count_or("-2", 4), 4);
        assert_eq!(parse_count_or("5", 4), 5);
    }
}
