use std::fs;
use std::path::Path;

use crate::theme::paths::resolve_settings_path;
use crate::theme::types::Settings;
use tracing::{debug, info, warn};

mod normalize;
mod parse_keybinds;
mod parse_settings;

use normalize::normalize;
pub use parse_settings::parse_settings;

/// Environment variable that overrides `api_key`.
pub const API_KEY_ENV: &str = "FXDASH_API_KEY";

/// What: Load user settings from `settings.conf`.
///
/// Inputs:
/// - `explicit`: Path given on the command line; the default config path otherwise.
///
/// Output:
/// - Parsed and normalized `Settings`; defaults when the file is missing or unreadable.
///
/// Details:
/// - `FXDASH_API_KEY`, when set and non-empty, wins over the file.
#[must_use]
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = resolve_settings_path(explicit);
    let mut out = Settings::default();
    match fs::read_to_string(&path) {
        Ok(content) => {
            let recognized = parse_settings(&content, &mut out);
            debug!(path = %path.display(), bytes = content.len(), recognized, "[Config] Loaded settings.conf");
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "[Config] settings.conf missing or unreadable, using defaults");
        }
    }
    apply_env_overrides(&mut out, std::env::var(API_KEY_ENV).ok().as_deref());
    normalize(&mut out);
    if out.api_key.is_empty() {
        info!("no API key configured; remote calls will fail until one is set");
    }
    out
}

/// What: Apply environment overrides to parsed settings.
///
/// Inputs:
/// - `api_key`: Value of `FXDASH_API_KEY`, if any.
pub fn apply_env_overrides(settings: &mut Settings, api_key: Option<&str>) {
    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        settings.api_key = key.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    /// What: Parsed values override defaults, URLs survive, and bad values are ignored.
    ///
    /// Inputs:
    /// - Settings text with comments, a base URL, booleans, numbers, a keybind, and junk lines.
    ///
    /// Output:
    /// - Overridden fields, untouched defaults for invalid values, and the recognized count.
    fn settings_parse_values_and_keybinds() {
        let text = "\
# fxdash settings
api_key = abc123   # personal key
api_base_url = http://127.0.0.1:8080/v6
show_analytics = no
cache_ttl_secs = 120
data_timeout_secs = soon
default_to = gbp
keybind_convert = F9
mystery = 1
no equals here
";
        let mut s = Settings::default();
        let recognized = parse_settings(text, &mut s);
        normalize(&mut s);
        assert_eq!(recognized, 7);
        assert_eq!(s.api_key, "abc123");
        assert_eq!(s.api_base_url, "http://127.0.0.1:8080/v6");
        assert!(!s.show_analytics);
        assert_eq!(s.cache_ttl_secs, 120);
        assert_eq!(s.data_timeout_secs, 10);
        assert_eq!(s.default_to, "GBP");
        assert_eq!(s.keymap.convert[0].code, KeyCode::F(9));
    }

    #[test]
    fn settings_env_key_wins_over_file() {
        let mut s = Settings {
            api_key: "from-file".into(),
            ..Settings::default()
        };
        apply_env_overrides(&mut s, Some("  "));
        assert_eq!(s.api_key, "from-file");
        apply_env_overrides(&mut s, Some("from-env"));
        assert_eq!(s.api_key, "from-env");
    }

    #[test]
    fn settings_normalize_clamps_amount_and_timeouts() {
        let mut s = Settings {
            default_amount: -3.0,
            data_timeout_secs: 0,
            default_from: "  ".into(),
            ..Settings::default()
        };
        normalize(&mut s);
        assert!((s.default_amount - 1.0).abs() < f64::EPSILON);
        assert_eq!(s.data_timeout_secs, 1);
        assert_eq!(s.default_from, "USD");
    }

    #[test]
    fn settings_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let s = load_settings(Some(&dir.path().join("absent.conf")));
        assert_eq!(s.default_from, "USD");
        assert_eq!(s.cache_ttl_secs, 3600);
    }
}
