//! Small helpers shared by the services, state, and UI layers.

use chrono::{Local, NaiveDateTime, Timelike};
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

/// Display format used for timestamps across the UI and logs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What: Round a floating-point value to a fixed number of decimal places.
///
/// Inputs:
/// - `value`: Value to round.
/// - `places`: Number of decimal places to keep.
///
/// Output:
/// - Rounded value (half away from zero).
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// What: Return the current local time truncated to whole seconds.
///
/// Output:
/// - `NaiveDateTime` in local time with the sub-second part dropped.
#[must_use]
pub fn now_local() -> NaiveDateTime {
    truncate_to_seconds(Local::now().naive_local())
}

/// What: Drop the sub-second component of a date-time.
///
/// Inputs:
/// - `ts`: Date-time to truncate.
///
/// Output:
/// - Same instant with nanoseconds set to zero.
#[must_use]
pub fn truncate_to_seconds(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

/// What: Format a date-time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_ts(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// What: Extract a finite `f64` from a JSON object field.
///
/// Inputs:
/// - `v`: JSON value expected to be an object.
/// - `key`: Field name.
///
/// Output:
/// - `Some(f64)` when the field exists and is a finite number; `None` otherwise.
#[must_use]
pub fn f64_of(v: &Value, key: &str) -> Option<f64> {
    v.get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
}

/// What: Replace every occurrence of a secret inside a string with `***`.
///
/// Inputs:
/// - `text`: Text that may contain the secret (typically a URL).
/// - `secret`: Secret to mask; empty secrets leave the text untouched.
///
/// Output:
/// - Owned string safe to write to logs.
#[must_use]
pub fn redact(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        text.to_string()
    } else {
        text.replace(secret, "***")
    }
}

/// What: Truncate a string to a maximum display width, appending an ellipsis when cut.
///
/// Inputs:
/// - `text`: Text to fit.
/// - `max_width`: Maximum terminal column width.
///
/// Output:
/// - The original text if it fits, otherwise a prefix followed by `…`.
///
/// Details:
/// - Width is measured in terminal columns so wide glyphs are accounted for.
#[must_use]
pub fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Rounding keeps the requested number of decimals.
    ///
    /// Inputs:
    /// - Values with more precision than requested.
    ///
    /// Output:
    /// - Values rounded half away from zero.
    fn util_round_to_four_places() {
        assert!((round_to(10.123_456, 4) - 10.1235).abs() < 1e-12);
        assert!((round_to(0.000_04, 4) - 0.0).abs() < 1e-12);
        assert!((round_to(2.5, 0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn util_redact_masks_secret_only_when_present() {
        assert_eq!(
            redact("https://host/v6/abc123/latest/USD", "abc123"),
            "https://host/v6/***/latest/USD"
        );
        assert_eq!(redact("https://host/x", ""), "https://host/x");
    }

    #[test]
    /// What: `f64_of` only accepts numeric fields.
    ///
    /// Inputs:
    /// - Object with a number, a string, and a missing field.
    ///
    /// Output:
    /// - `Some` for the number, `None` for the rest.
    fn util_f64_of_reads_numbers() {
        let v = serde_json::json!({"rate": 0.92, "label": "x"});
        assert_eq!(f64_of(&v, "rate"), Some(0.92));
        assert_eq!(f64_of(&v, "label"), None);
        assert_eq!(f64_of(&v, "missing"), None);
    }

    #[test]
    fn util_fit_width_appends_ellipsis() {
        assert_eq!(fit_width("USD → EUR", 20), "USD → EUR");
        assert_eq!(fit_width("abcdefgh", 5), "abcd…");
        assert_eq!(fit_width("abc", 0), "");
    }

    #[test]
    fn util_truncate_drops_subseconds() {
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_nano_opt(10, 20, 30, 123_456_789))
            .expect("valid date");
        assert_eq!(format_ts(&truncate_to_seconds(ts)), "2024-03-01 10:20:30");
        assert_eq!(truncate_to_seconds(ts).nanosecond(), 0);
    }
}
