//! Keys for the favorites list and the history table.

use crossterm::event::{KeyCode, KeyEvent};

use super::EventOutcome;
use crate::state::{AppState, Focus, ToastKind};

/// What: Handle a key while the favorites list is focused.
///
/// Details:
/// - Up/Down (or k/j) move the highlight.
/// - Enter loads the highlighted pair into the selectors and moves focus to the amount.
pub fn handle_favorites_key(ke: &KeyEvent, app: &mut AppState) -> EventOutcome {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.step_favorite(-1),
        KeyCode::Down | KeyCode::Char('j') => app.step_favorite(1),
        KeyCode::Enter => {
            let Some(idx) = app.selected_favorite() else {
                app.toast_key(
                    crate::i18n::MessageKey::FavoritesEmpty,
                    ToastKind::Info,
                );
                return EventOutcome::Continue;
            };
            match app.apply_favorite(idx) {
                Ok(pair) => {
                    tracing::debug!(pair = %pair, "favorite applied");
                    app.focus = Focus::Amount;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stale favorite selection");
                    app.toast_key(crate::i18n::MessageKey::FavoriteNotFound, ToastKind::Warning);
                }
            }
        }
        _ => {}
    }
    EventOutcome::Continue
}

/// Handle a key while the history table is focused.
pub fn handle_history_key(ke: &KeyEvent, app: &mut AppState) -> EventOutcome {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_history(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_history(1),
        KeyCode::PageUp => app.scroll_history(-10),
        KeyCode::PageDown => app.scroll_history(10),
        KeyCode::Home => app.history_scroll = 0,
        _ => {}
    }
    EventOutcome::Continue
}
