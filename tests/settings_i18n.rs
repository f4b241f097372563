//! Integration tests for settings files and locale overrides on disk.

use crossterm::event::{KeyCode, KeyModifiers};

use fxdash::i18n::{MessageKey, Translator, available_locales};
use fxdash::theme::{Settings, ensure_settings_file, load_settings, parse_settings};

#[test]
/// What: A settings file on disk overrides defaults and keeps URLs intact.
///
/// Inputs:
/// - Temp `settings.conf` with comments, a custom base URL, codes, toggles and a keybind.
///
/// Output:
/// - Parsed values normalized (uppercase codes); the URL survives comment stripping.
fn settings_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.conf");
    std::fs::write(
        &path,
        "# fxdash settings\n\
         api_base_url = http://127.0.0.1:9000/v6 # local mock\n\
         default_from = gbp\n\
         default_to = jpy\n\
         default_amount = 25\n\
         show_analytics = off\n\
         cache_ttl_secs = 60\n\
         keybind_convert = F9\n\
         no_such_key = 1\n",
    )
    .expect("write");

    let s = load_settings(Some(&path));
    assert_eq!(s.api_base_url, "http://127.0.0.1:9000/v6");
    assert_eq!(s.default_from, "GBP");
    assert_eq!(s.default_to, "JPY");
    assert!((s.default_amount - 25.0).abs() < f64::EPSILON);
    assert!(!s.show_analytics);
    assert_eq!(s.cache_ttl_secs, 60);
    assert!(
        s.keymap
            .convert
            .iter()
            .any(|c| c.matches(KeyCode::F(9), KeyModifiers::NONE))
    );
}

#[test]
/// What: A missing explicit file yields defaults.
fn settings_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let s = load_settings(Some(&dir.path().join("absent.conf")));
    assert_eq!(s.default_from, Settings::default().default_from);
    assert_eq!(s.data_timeout_secs, 10);
    assert_eq!(s.animation_timeout_secs, 8);
}

#[test]
/// What: The first-run skeleton is written once and parses back to the defaults.
///
/// Output:
/// - `true` on first call, `false` afterwards; contents unchanged by the second call.
fn settings_skeleton_written_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("settings.conf");
    assert!(ensure_settings_file(&path).expect("create"));
    std::fs::write(&path, "default_from = CHF\n").expect("edit");
    assert!(!ensure_settings_file(&path).expect("exists"));
    let mut s = Settings::default();
    parse_settings(&std::fs::read_to_string(&path).expect("read"), &mut s);
    assert_eq!(s.default_from, "CHF");
}

#[test]
/// What: Locale files in a directory become selectable and override strings.
///
/// Inputs:
/// - `fr-FR.yml` with nested keys and a positional placeholder, and a broken `it-IT.yml`.
///
/// Output:
/// - Both files listed; French overrides applied; the broken file falls back to English.
fn locale_directory_overrides() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("fr-FR.yml"),
        "fr-FR:\n  history:\n    cleared: \"Historique effacé\"\n  result:\n    rate: \"1 {} = {} {}\"\n  settings:\n    language: \"Langue : {}\"\n",
    )
    .expect("write");
    std::fs::write(dir.path().join("it-IT.yml"), "it-IT: [unclosed").expect("write");

    assert_eq!(
        available_locales(dir.path()),
        vec!["en-US".to_string(), "fr-FR".to_string(), "it-IT".to_string()]
    );
    let it = Translator::load("it-IT", dir.path());
    assert_eq!(it.t(MessageKey::HistoryCleared), "History cleared");
    let fr = Translator::load("fr-FR", dir.path());
    assert_eq!(fr.t(MessageKey::HistoryCleared), "Historique effacé");
    assert_eq!(fr.t_fmt1(MessageKey::Language, "fr-FR"), "Langue : fr-FR");
    assert_eq!(fr.t(MessageKey::AppTitle), "Global Currency Converter Pro");
}
