use crate::theme::parsing::{parse_bool, strip_inline_comment};
use crate::theme::types::Settings;

use super::parse_keybinds::apply_keybind;

/// Assign `val` through `parse` when it parses; log and keep the old value otherwise.
fn set_parsed<T: std::str::FromStr>(key: &str, val: &str, target: &mut T) {
    match val.parse::<T>() {
        Ok(v) => *target = v,
        Err(_) => tracing::warn!(key, value = val, "ignoring invalid setting value"),
    }
}

/// Assign a boolean spelling, logging anything unrecognized.
fn set_bool(key: &str, val: &str, target: &mut bool) {
    match parse_bool(val) {
        Some(b) => *target = b,
        None => tracing::warn!(key, value = val, "ignoring invalid boolean setting"),
    }
}

/// What: Parse `settings.conf` content onto `settings`.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to populate (usually defaults).
///
/// Output:
/// - Number of recognized keys.
///
/// Details:
/// - `key = value` lines; blank lines and lines starting with `#` or `//` are skipped.
/// - Keys are case-insensitive and `.`/`-`/space normalize to `_`.
/// - `keybind_*` entries go to the keymap.
/// - Unknown keys and invalid values are logged and otherwise ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) -> usize {
    let mut recognized = 0usize;
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            tracing::debug!(line = idx + 1, "skipping settings line without '='");
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw);
        let known = match key.as_str() {
            "api_key" => {
                settings.api_key = val.to_string();
                true
            }
            "api_base_url" | "api_base" => {
                settings.api_base_url = val.to_string();
                true
            }
            "animation_url" => {
                settings.animation_url = val.to_string();
                true
            }
            "show_animation" => {
                set_bool(&key, val, &mut settings.show_animation);
                true
            }
            "show_analytics" | "show_charts" => {
                set_bool(&key, val, &mut settings.show_analytics);
                true
            }
            "cache_ttl_secs" => {
                set_parsed(&key, val, &mut settings.cache_ttl_secs);
                true
            }
            "data_timeout_secs" => {
                set_parsed(&key, val, &mut settings.data_timeout_secs);
                true
            }
            "animation_timeout_secs" => {
                set_parsed(&key, val, &mut settings.animation_timeout_secs);
                true
            }
            "start_dark_mode" | "dark_mode" => {
                set_bool(&key, val, &mut settings.start_dark_mode);
                true
            }
            "locale" | "language" => {
                settings.locale = val.to_string();
                true
            }
            "default_from" => {
                settings.default_from = val.to_string();
                true
            }
            "default_to" => {
                settings.default_to = val.to_string();
                true
            }
            "default_amount" => {
                set_parsed(&key, val, &mut settings.default_amount);
                true
            }
            k if k.starts_with("keybind_") => apply_keybind(k, val, &mut settings.keymap),
            _ => false,
        };
        if known {
            recognized += 1;
        } else {
            tracing::warn!(key = %key, line = idx + 1, "unknown settings key ignored");
        }
    }
    recognized
}
