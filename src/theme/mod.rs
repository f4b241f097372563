//! Appearance and user configuration: palettes, settings file, key bindings, paths.

/// Settings skeleton management.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Light and dark palettes.
mod palette;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Theme and settings type definitions.
mod types;

pub use config::{SETTINGS_SKELETON_CONTENT, ensure_settings_file};
pub use palette::theme;
pub use paths::{config_dir, locales_dir, logs_dir, resolve_settings_path, settings_path};
pub use settings::{API_KEY_ENV, apply_env_overrides, load_settings, parse_settings};
pub use types::{KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize environment-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
