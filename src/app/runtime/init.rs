use std::path::Path;

use crate::i18n::{self, Translator};
use crate::sources::FxService;
use crate::state::{AppState, SessionState};
use crate::theme::{
    Settings, ensure_settings_file, load_settings, locales_dir, resolve_settings_path,
};

/// What: Load settings, writing the commented skeleton on first run.
///
/// Inputs:
/// - `explicit`: Path from `--config`; such files are never created.
///
/// Output:
/// - Effective settings (defaults when nothing could be read).
pub fn load_effective_settings(explicit: Option<&Path>) -> Settings {
    if explicit.is_none() {
        let path = resolve_settings_path(None);
        match ensure_settings_file(&path) {
            Ok(true) => tracing::info!(path = %path.display(), "[Config] wrote settings skeleton"),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Config] could not write settings skeleton");
            }
        }
    }
    load_settings(explicit)
}

/// What: Build the application state and the rate service for a session.
///
/// Inputs:
/// - `settings`: Effective settings.
/// - `force_dark`: `--dark` flag.
///
/// Output:
/// - `(AppState, FxService)` with the fallback currency list selected.
///
/// Details:
/// - Locale comes from settings, then the environment, then `en-US`.
pub fn initialize_app_state(settings: &Settings, force_dark: bool) -> (AppState, FxService) {
    let dir = locales_dir();
    let locale = i18n::resolve_locale(&settings.locale, i18n::detect_system_locale().as_deref());
    let translator = Translator::load(&locale, &dir);
    let locales = i18n::available_locales(&dir);
    tracing::info!(locale = %locale, available = locales.len(), "[Init] locale resolved");

    let session = SessionState::new(settings.start_dark_mode || force_dark, locale);
    let app = AppState::new(settings, session, translator, locales, dir);
    (app, FxService::from_settings(settings))
}

/// What: Fetch the live currency list and the header animation.
///
/// Details:
/// - Keeps the current selection when the codes still exist.
/// - Failures leave the fallback list and no animation; both are logged by the service.
pub async fn load_remote_data(app: &mut AppState, service: &mut FxService) {
    let currencies = service.list_currencies(&mut app.session).await;
    let (from, to) = (app.from_code().to_string(), app.to_code().to_string());
    app.set_currencies(currencies, &from, &to);
    app.animation = service.load_animation(&mut app.session).await;
    tracing::info!(
        currencies = app.currencies.len(),
        animation = app.animation.is_some(),
        "[Init] remote data loaded"
    );
}
