//! Locale file loading and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::translations::TranslationMap;

/// Why a locale file could not be used.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// Locale code is empty or malformed.
    #[error("invalid locale code '{0}' (expected language[-region], e.g. de-DE)")]
    InvalidCode(String),
    /// File could not be read.
    #[error("failed to read locale file {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// File is not valid YAML.
    #[error("failed to parse locale file {path}: {source}")]
    Yaml {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: serde_norway::Error,
    },
}

/// What: Load `{locales_dir}/{locale}.yml` into a flat `TranslationMap`.
///
/// Inputs:
/// - `locale`: Locale code (e.g., "de-DE").
/// - `locales_dir`: Directory holding locale files.
///
/// Output:
/// - Flattened translations.
///
/// # Errors
/// - `InvalidCode`, `Io`, or `Yaml` as described on [`LocaleError`].
pub fn load_locale_file(locale: &str, locales_dir: &Path) -> Result<TranslationMap, LocaleError> {
    if !is_valid_locale_format(locale) {
        return Err(LocaleError::InvalidCode(locale.to_string()));
    }
    let path = locales_dir.join(format!("{locale}.yml"));
    let contents = fs::read_to_string(&path).map_err(|source| LocaleError::Io {
        path: path.clone(),
        source,
    })?;
    parse_locale_yaml(&contents).map_err(|source| LocaleError::Yaml { path, source })
}

/// What: Validate locale code format.
///
/// Output:
/// - `true` for ASCII alphanumerics separated by single hyphens, at most 20 chars.
pub(crate) fn is_valid_locale_format(locale: &str) -> bool {
    !locale.is_empty()
        && locale.len() <= 20
        && locale.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !locale.starts_with('-')
        && !locale.ends_with('-')
        && !locale.contains("--")
}

/// What: Parse YAML content into a `TranslationMap`.
///
/// Details:
/// - Nested maps flatten into dot keys. A single top-level mapping named after a
///   locale (e.g. `de-DE:`) is unwrapped first.
fn parse_locale_yaml(yaml_content: &str) -> Result<TranslationMap, serde_norway::Error> {
    let doc: serde_norway::Value = serde_norway::from_str(yaml_content)?;
    let mut translations = TranslationMap::new();
    let root = match doc.as_mapping() {
        Some(map) if map.len() == 1 => map
            .iter()
            .next()
            .filter(|(k, v)| k.as_str().is_some_and(is_locale_like) && v.is_mapping())
            .map_or(&doc, |(_, v)| v),
        _ => &doc,
    };
    flatten_yaml_value(root, "", &mut translations);
    Ok(translations)
}

/// Whether a top-level key looks like `xx-YY` rather than a message section.
fn is_locale_like(key: &str) -> bool {
    key.contains('-') && is_valid_locale_format(key)
}

/// What: Recursively flatten YAML structure into dot-notation keys.
///
/// Details:
/// - Scalars become strings; sequences and nulls are skipped.
fn flatten_yaml_value(value: &serde_norway::Value, prefix: &str, out: &mut TranslationMap) {
    use serde_norway::Value;
    match value {
        Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key_str) = key.as_str() {
                    let next = if prefix.is_empty() {
                        key_str.to_string()
                    } else {
                        format!("{prefix}.{key_str}")
                    };
                    flatten_yaml_value(val, &next, out);
                }
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Nested YAML flattens to dot keys, with or without a locale wrapper.
    ///
    /// Inputs:
    /// - `de-DE:`-wrapped document and an unwrapped one.
    ///
    /// Output:
    /// - Both yield `favorites.title`.
    fn loader_flattens_nested_yaml() {
        let wrapped = "de-DE:\n  favorites:\n    title: Favoriten\n  app:\n    title: Währungsrechner\n";
        let map = parse_locale_yaml(wrapped).expect("yaml");
        assert_eq!(map.get("favorites.title").map(String::as_str), Some("Favoriten"));
        assert_eq!(map.get("app.title").map(String::as_str), Some("Währungsrechner"));

        let bare = "favorites:\n  title: Favoris\n";
        let map = parse_locale_yaml(bare).expect("yaml");
        assert_eq!(map.get("favorites.title").map(String::as_str), Some("Favoris"));
    }

    #[test]
    fn loader_rejects_bad_codes_and_missing_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(
            load_locale_file("../etc", dir.path()),
            Err(LocaleError::InvalidCode(_))
        ));
        assert!(matches!(
            load_locale_file("fr-FR", dir.path()),
            Err(LocaleError::Io { .. })
        ));
        std::fs::write(dir.path().join("fr-FR.yml"), "a: [unclosed").expect("write");
        assert!(matches!(
            load_locale_file("fr-FR", dir.path()),
            Err(LocaleError::Yaml { .. })
        ));
    }
}
