//! Translation map and lookup utilities.

use std::collections::HashMap;
use std::fmt::Display;

use super::keys::MessageKey;

/// Translation map: dot-notation key -> translated template.
pub type TranslationMap = HashMap<String, String>;

/// What: Look up a key, falling back to the built-in English template.
///
/// Inputs:
/// - `key`: Message key.
/// - `translations`: Locale overrides.
///
/// Output:
/// - Override when present and non-empty, English otherwise.
#[must_use]
pub fn translate(key: MessageKey, translations: &TranslationMap) -> String {
    if let Some(s) = translations.get(key.key()).filter(|s| !s.is_empty()) {
        return s.clone();
    }
    if !translations.is_empty() {
        tracing::trace!(key = key.key(), "translation missing, using English");
    }
    key.english().to_string()
}

/// What: Replace `{}` placeholders positionally.
///
/// Details:
/// - The first `{}` gets the first argument, and so on. Extra placeholders are left
///   as-is; extra arguments are ignored.
#[must_use]
pub fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    let mut result = template.to_string();
    for arg in args {
        result = result.replacen("{}", &arg.to_string(), 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_prefers_override_then_english() {
        let mut tr = TranslationMap::new();
        tr.insert("favorites.title".into(), "Favoriten".into());
        tr.insert("history.title".into(), String::new());
        assert_eq!(translate(MessageKey::FavoritesTitle, &tr), "Favoriten");
        assert_eq!(translate(MessageKey::HistoryTitle, &tr), "Conversion History");
    }

    #[test]
    /// What: Positional formatting fills placeholders in order.
    ///
    /// Inputs:
    /// - Template with four `{}` and four, then two, arguments.
    ///
    /// Output:
    /// - Fully filled string; then a partially filled one.
    fn format_positional_in_order() {
        let tpl = MessageKey::ResultLine.english();
        assert_eq!(
            format_positional(tpl, &[&"10.00", &"USD", &"9.20", &"EUR"]),
            "10.00 USD = 9.20 EUR"
        );
        assert_eq!(format_positional(tpl, &[&1, &"USD"]), "1 USD = {} {}");
    }
}
