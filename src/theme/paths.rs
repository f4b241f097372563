use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "fxdash";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    home_default
        .iter()
        .fold(PathBuf::from(home), |base, seg| base.join(seg))
}

/// Create `dir` if needed and hand it back.
fn ensured(dir: PathBuf) -> PathBuf {
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create directory");
    }
    dir
}

/// Config directory: `$HOME/.config/fxdash`, or `$XDG_CONFIG_HOME/fxdash` when set (ensured to exist).
pub fn config_dir() -> PathBuf {
    ensured(xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR))
}

/// Logs directory under config (ensured to exist).
pub fn logs_dir() -> PathBuf {
    ensured(config_dir().join("logs"))
}

/// Locale override directory under config (not created).
pub fn locales_dir() -> PathBuf {
    config_dir().join("locales")
}

/// Default settings file path.
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Settings file to read: `explicit` when given, the default path otherwise.
pub fn resolve_settings_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(settings_path, Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Paths are rooted at `XDG_CONFIG_HOME/fxdash`.
    ///
    /// Inputs:
    /// - Temporary `XDG_CONFIG_HOME`.
    ///
    /// Output:
    /// - Config, logs, locales, and settings paths under it; logs directory created.
    fn paths_config_logs_locales_under_xdg() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig = std::env::var_os("XDG_CONFIG_HOME");
        let tmp = tempfile::tempdir().expect("tempdir");
        unsafe { std::env::set_var("XDG_CONFIG_HOME", tmp.path()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert_eq!(cfg, tmp.path().join("fxdash"));
        assert!(logs.is_dir());
        assert!(super::locales_dir().ends_with("fxdash/locales"));
        assert!(super::settings_path().ends_with("fxdash/settings.conf"));
        let explicit = std::path::Path::new("/tmp/custom.conf");
        assert_eq!(super::resolve_settings_path(Some(explicit)), explicit);
        unsafe {
            if let Some(v) = orig {
                std::env::set_var("XDG_CONFIG_HOME", v);
            } else {
                std::env::remove_var("XDG_CONFIG_HOME");
            }
        }
    }
}
