//! System locale detection utilities.

use std::env;

/// Variables consulted, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// What: Detect the system locale from environment variables.
///
/// Output:
/// - Normalized locale code (e.g., "de-DE") or `None`.
///
/// Details:
/// - Checks `LC_ALL`, `LC_MESSAGES`, and `LANG` in order; `C` and `POSIX` are skipped.
pub fn detect_system_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .find_map(|var| env::var(var).ok().as_deref().and_then(parse_locale_string))
}

/// What: Normalize a locale string like `de_DE.UTF-8` to `de-DE`.
///
/// Output:
/// - `None` for empty, `C`, or `POSIX` values.
///
/// Details:
/// - Drops the encoding and `@modifier` suffixes.
/// - Language is lowercased, region uppercased.
pub(crate) fn parse_locale_string(locale_str: &str) -> Option<String> {
    let base = locale_str.trim().split(['.', '@']).next()?;
    if base.is_empty() || base.eq_ignore_ascii_case("C") || base.eq_ignore_ascii_case("POSIX") {
        return None;
    }
    let mut parts = base.split(['_', '-']);
    let language = parts.next()?.to_ascii_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => {
            Some(format!("{language}-{}", region.to_ascii_uppercase()))
        }
        _ => Some(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_locale_string_normalizes() {
        assert_eq!(parse_locale_string("de_DE.UTF-8"), Some("de-DE".to_string()));
        assert_eq!(parse_locale_string("en_us.utf8"), Some("en-US".to_string()));
        assert_eq!(parse_locale_string("fr-FR"), Some("fr-FR".to_string()));
        assert_eq!(parse_locale_string("sr_RS@latin"), Some("sr-RS".to_string()));
        assert_eq!(parse_locale_string("en"), Some("en".to_string()));
        assert_eq!(parse_locale_string("C.UTF-8"), None);
        assert_eq!(parse_locale_string("POSIX"), None);
        assert_eq!(parse_locale_string(""), None);
    }
}
