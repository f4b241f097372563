//! Event handling layer for the dashboard TUI.
//!
//! [`handle_event`] applies global shortcuts first, then hands the key to the
//! focused panel. Work that needs the network is returned to the runtime as an
//! [`EventOutcome`] instead of being performed here.

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};

use crate::state::session::SessionAction;
use crate::state::{AppState, Focus};
use crate::theme::KeyChord;

mod converter;
mod lists;

/// What the runtime should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Nothing beyond redrawing.
    Continue,
    /// Run a conversion for the current selection.
    Convert,
    /// Leave the application.
    Quit,
}

/// Whether `ke` matches any chord in `list`.
pub(crate) fn matches_any(list: &[KeyChord], ke: &KeyEvent) -> bool {
    list.iter().any(|c| c.matches(ke.code, ke.modifiers))
}

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event.
/// - `app`: Application state.
///
/// Output:
/// - [`EventOutcome`] telling the runtime whether to convert or quit.
///
/// Details:
/// - Only key presses are handled; repeats, releases, mouse, and resize are ignored.
/// - The previous toast is cleared by every key press.
/// - Keys are ignored while a request is in flight, except exit.
/// - Remove-favorite takes the highlighted entry when the favorites list has focus
///   and the pair in the selectors otherwise.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> EventOutcome {
    let CEvent::Key(ke) = ev else {
        return EventOutcome::Continue;
    };
    if ke.kind != KeyEventKind::Press {
        return EventOutcome::Continue;
    }
    if matches_any(&app.keymap.exit, ke) {
        return EventOutcome::Quit;
    }
    if app.busy {
        return EventOutcome::Continue;
    }
    app.toast = None;
    if let Some(outcome) = handle_global(ke, app) {
        return outcome;
    }
    match app.focus {
        Focus::Amount | Focus::From | Focus::To => converter::handle_key(ke, app),
        Focus::Favorites => lists::handle_favorites_key(ke, app),
        Focus::History => lists::handle_history_key(ke, app),
    }
}

/// What: Apply shortcuts that work regardless of focus.
///
/// Output:
/// - `Some(outcome)` when the key was consumed.
fn handle_global(ke: &KeyEvent, app: &mut AppState) -> Option<EventOutcome> {
    let km = &app.keymap;
    if matches_any(&km.focus_next, ke) {
        app.focus = app.focus.next();
    } else if matches_any(&km.focus_prev, ke) {
        app.focus = app.focus.prev();
    } else if matches_any(&km.toggle_theme, ke) {
        app.toggle_theme();
    } else if matches_any(&km.cycle_language, ke) {
        app.cycle_language();
    } else if matches_any(&km.clear_history, ke) {
        app.dispatch(SessionAction::ClearHistory);
        app.history_scroll = 0;
    } else if matches_any(&km.next_tab, ke) {
        app.chart_tab = app.chart_tab.next();
    } else if matches_any(&km.prev_tab, ke) {
        app.chart_tab = app.chart_tab.prev();
    } else if matches_any(&km.add_favorite, ke) {
        let pair = app.current_pair();
        if app.dispatch(SessionAction::AddFavorite(pair)).is_none() {
            tracing::debug!("favorite already present");
        }
    } else if matches_any(&km.remove_favorite, ke) {
        let action = match app.selected_favorite() {
            Some(index) if app.focus == Focus::Favorites => {
                SessionAction::RemoveFavoriteAt(index)
            }
            _ => SessionAction::RemoveFavorite(app.current_pair()),
        };
        app.dispatch(action);
    } else {
        return None;
    }
    Some(EventOutcome::Continue)
}

#[cfg(test)]
mod tests;
