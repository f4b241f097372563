use std::fs;
use std::io;
use std::path::Path;

mod skeletons;

pub use skeletons::SETTINGS_SKELETON_CONTENT;

/// What: Write the commented settings skeleton when the file is missing or empty.
///
/// Inputs:
/// - `path`: Settings file location.
///
/// Output:
/// - `Ok(true)` when the skeleton was written; `Ok(false)` when a non-empty file already exists.
///
/// # Errors
/// - Directory creation or write failures.
///
/// Details:
/// - Existing content is never touched.
pub fn ensure_settings_file(path: &Path) -> io::Result<bool> {
    let needs_skeleton = fs::metadata(path).map_or(true, |m| m.len() == 0);
    if !needs_skeleton {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    tracing::info!(path = %path.display(), "wrote default settings skeleton");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::settings::parse_settings;
    use crate::theme::types::Settings;

    #[test]
    /// What: The skeleton is written once and parses back to the defaults.
    ///
    /// Inputs:
    /// - Missing file, then the same path again after editing it.
    ///
    /// Output:
    /// - First call writes; second call leaves the edited file alone; skeleton values equal defaults.
    fn config_skeleton_written_once_and_matches_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("settings.conf");
        assert!(ensure_settings_file(&path).expect("write"));
        fs::write(&path, "default_to = JPY\n").expect("edit");
        assert!(!ensure_settings_file(&path).expect("check"));
        assert_eq!(fs::read_to_string(&path).expect("read"), "default_to = JPY\n");

        let mut parsed = Settings::default();
        parse_settings(SETTINGS_SKELETON_CONTENT, &mut parsed);
        assert_eq!(parsed, Settings::default());
    }
}
