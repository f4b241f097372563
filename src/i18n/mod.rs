//! Internationalization (i18n) for the dashboard.
//!
//! Every string the UI shows is a [`MessageKey`] with a built-in English
//! template. Locale files override templates:
//!
//! ```yaml
//! de-DE:
//!   favorites:
//!     title: "Favoriten"
//! ```
//!
//! Files live in `{config_dir}/locales/{locale}.yml` and are flattened to dot
//! keys (`favorites.title`). Missing keys fall back to English; missing or
//! broken files are logged and ignored.
//!
//! Locale resolution order: `locale` in `settings.conf`, then `LC_ALL`,
//! `LC_MESSAGES`, `LANG`, then `en-US`.

mod detection;
mod keys;
mod loader;
pub mod translations;

pub use detection::detect_system_locale;
pub use keys::MessageKey;
pub use loader::{LocaleError, load_locale_file};
pub use translations::{TranslationMap, format_positional, translate};

use std::fmt::Display;
use std::path::Path;

use crate::state::session::Notice;

/// Locale whose strings are compiled in.
pub const DEFAULT_LOCALE: &str = "en-US";

/// What: Pick the locale to start with.
///
/// Inputs:
/// - `setting`: `locale` value from settings (may be empty).
/// - `system`: Result of [`detect_system_locale`].
///
/// Output:
/// - The first non-empty, well-formed candidate; [`DEFAULT_LOCALE`] otherwise.
#[must_use]
pub fn resolve_locale(setting: &str, system: Option<&str>) -> String {
    let setting = setting.trim();
    if !setting.is_empty() {
        if loader::is_valid_locale_format(setting) {
            return setting.to_string();
        }
        tracing::warn!(locale = setting, "invalid locale in settings, detecting from environment");
    }
    system
        .filter(|s| loader::is_valid_locale_format(s))
        .map_or_else(|| DEFAULT_LOCALE.to_string(), ToString::to_string)
}

/// What: List selectable locales.
///
/// Output:
/// - [`DEFAULT_LOCALE`] followed by the sorted stems of `*.yml` files in `dir`.
///
/// Details:
/// - A missing directory yields only the default.
#[must_use]
pub fn available_locales(dir: &Path) -> Vec<String> {
    let mut found: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|x| x == "yml"))
                .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_string))
                .filter(|s| s != DEFAULT_LOCALE && loader::is_valid_locale_format(s))
                .collect()
        })
        .unwrap_or_default();
    found.sort();
    found.dedup();
    let mut out = vec![DEFAULT_LOCALE.to_string()];
    out.extend(found);
    out
}

/// What: Locale after `current` in `available`, wrapping around.
///
/// Details:
/// - An unknown `current` moves to the first entry.
#[must_use]
pub fn next_locale(available: &[String], current: &str) -> String {
    let next = available
        .iter()
        .position(|l| l == current)
        .map_or(0, |i| (i + 1) % available.len().max(1));
    available
        .get(next)
        .cloned()
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
}

/// Active locale and its overrides.
#[derive(Clone, Debug, Default)]
pub struct Translator {
    /// Locale code.
    locale: String,
    /// Overrides loaded from the locale file.
    overrides: TranslationMap,
}

impl Translator {
    /// English-only translator.
    #[must_use]
    pub fn english() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            overrides: TranslationMap::new(),
        }
    }

    /// What: Load overrides for `locale` from `locales_dir`.
    ///
    /// Output:
    /// - Translator for `locale`; English templates when the file is missing or invalid.
    #[must_use]
    pub fn load(locale: &str, locales_dir: &Path) -> Self {
        let overrides = match load_locale_file(locale, locales_dir) {
            Ok(map) => {
                tracing::info!(locale, keys = map.len(), "loaded locale overrides");
                map
            }
            Err(e) if locale == DEFAULT_LOCALE => {
                tracing::debug!(error = %e, "no English overrides");
                TranslationMap::new()
            }
            Err(e) => {
                tracing::warn!(locale, error = %e, "locale unavailable, falling back to English");
                TranslationMap::new()
            }
        };
        Self {
            locale: locale.to_string(),
            overrides,
        }
    }

    /// Build a translator from an in-memory map.
    #[must_use]
    pub fn from_map(locale: &str, overrides: TranslationMap) -> Self {
        Self {
            locale: locale.to_string(),
            overrides,
        }
    }

    /// Active locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Translate a key.
    #[must_use]
    pub fn t(&self, key: MessageKey) -> String {
        translate(key, &self.overrides)
    }

    /// Translate a key and fill its `{}` placeholders in order.
    #[must_use]
    pub fn t_fmt(&self, key: MessageKey, args: &[&dyn Display]) -> String {
        format_positional(&self.t(key), args)
    }

    /// Translate a key with a single argument.
    #[must_use]
    pub fn t_fmt1<T: Display>(&self, key: MessageKey, arg: T) -> String {
        self.t_fmt(key, &[&arg])
    }
}

/// Message shown for a session notice.
#[must_use]
pub const fn notice_message(notice: Notice) -> MessageKey {
    match notice {
        Notice::FavoriteAdded => MessageKey::FavoriteAdded,
        Notice::FavoriteRemoved => MessageKey::FavoriteRemoved,
        Notice::FavoriteNotFound => MessageKey::FavoriteNotFound,
        Notice::HistoryCleared => MessageKey::HistoryCleared,
        Notice::ApiLimitReached => MessageKey::ApiLimit,
    }
}
