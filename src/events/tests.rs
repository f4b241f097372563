use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::*;
use crate::state::types::{ChartTab, CurrencyPair};

fn press(code: KeyCode, mods: KeyModifiers) -> CEvent {
    CEvent::Key(KeyEvent::new(code, mods))
}

fn key(code: KeyCode) -> CEvent {
    press(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> CEvent {
    press(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

#[test]
/// What: Typing edits the amount and Enter requests a conversion.
///
/// Inputs:
/// - Backspace, `2`, `.`, `5`, `.` (ignored), then Enter on the amount field.
///
/// Output:
/// - Amount text `2.5` and outcome `Convert`.
fn events_amount_typing_and_convert() {
    let mut app = AppState::default();
    handle_event(&key(KeyCode::Backspace), &mut app);
    for c in ['2', '.', '5', '.'] {
        handle_event(&key(KeyCode::Char(c)), &mut app);
    }
    assert_eq!(app.amount_input, "2.5");
    assert_eq!(handle_event(&key(KeyCode::Enter), &mut app), EventOutcome::Convert);
}

#[test]
fn events_exit_and_release_filtering() {
    let mut app = AppState::default();
    assert_eq!(handle_event(&ctrl('c'), &mut app), EventOutcome::Quit);
    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(
        handle_event(&CEvent::Key(release), &mut app),
        EventOutcome::Continue
    );
    app.busy = true;
    assert_eq!(handle_event(&key(KeyCode::Enter), &mut app), EventOutcome::Continue);
    assert_eq!(handle_event(&ctrl('q'), &mut app), EventOutcome::Quit);
}

#[test]
/// What: Global shortcuts cycle focus, tabs, and theme.
///
/// Inputs:
/// - Tab, Shift+Tab (BackTab), Ctrl+N twice, Ctrl+P, Ctrl+T.
///
/// Output:
/// - Focus returns to Amount, tab is Candlestick, dark mode on.
fn events_global_focus_tabs_theme() {
    let mut app = AppState::default();
    handle_event(&key(KeyCode::Tab), &mut app);
    assert_eq!(app.focus, Focus::From);
    handle_event(&key(KeyCode::BackTab), &mut app);
    assert_eq!(app.focus, Focus::Amount);
    handle_event(&ctrl('n'), &mut app);
    handle_event(&ctrl('n'), &mut app);
    handle_event(&ctrl('p'), &mut app);
    assert_eq!(app.chart_tab, ChartTab::Candlestick);
    handle_event(&ctrl('t'), &mut app);
    assert!(app.session.theme_dark);
}

#[test]
/// What: Favorites can be added, applied by index, and removed.
///
/// Inputs:
/// - Ctrl+F on `USD → EUR`, change selectors, focus favorites, Enter, Ctrl+D twice.
///
/// Output:
/// - Selectors restored to the favorite; second removal reports not found.
fn events_favorites_flow() {
    let mut app = AppState::default();
    handle_event(&ctrl('f'), &mut app);
    assert_eq!(app.session.favorites.len(), 1);
    assert!(app.toast.is_some());

    app.focus = Focus::To;
    handle_event(&key(KeyCode::Down), &mut app);
    assert_ne!(app.current_pair(), CurrencyPair::new("USD", "EUR"));

    app.focus = Focus::Favorites;
    handle_event(&key(KeyCode::Enter), &mut app);
    assert_eq!(app.current_pair(), CurrencyPair::new("USD", "EUR"));
    assert_eq!(app.focus, Focus::Amount);

    handle_event(&ctrl('d'), &mut app);
    assert!(app.session.favorites.is_empty());
    handle_event(&ctrl('d'), &mut app);
    assert_eq!(
        app.toast.as_ref().map(|t| t.kind),
        Some(crate::state::ToastKind::Warning)
    );
}

#[test]
fn events_selector_letter_jump() {
    let mut app = AppState::default();
    app.focus = Focus::From;
    handle_event(&key(KeyCode::Char('j')), &mut app);
    assert_eq!(app.from_code(), "JPY");
    handle_event(&key(KeyCode::Up), &mut app);
    assert_eq!(app.from_code(), "EUR");
}

#[test]
fn events_clear_history_resets_scroll() {
    let mut app = AppState::default();
    app.history_scroll = 4;
    handle_event(&ctrl('x'), &mut app);
    assert_eq!(app.history_scroll, 0);
    assert_eq!(
        app.toast.as_ref().map(|t| t.text.as_str()),
        Some("History cleared")
    );
}

#[test]
/// What: Remove-favorite resolves by focus.
///
/// Inputs:
/// - Favorites `USD → EUR`, `GBP → JPY` with the highlight on the first entry.
/// - Selectors on `GBP → JPY`; Ctrl+D from the amount field, then from the list.
///
/// Output:
/// - The current pair goes first; the highlighted entry goes once the list has focus.
fn events_remove_favorite_current_pair_or_highlighted() {
    let mut app = AppState::default();
    app.dispatch(SessionAction::AddFavorite(CurrencyPair::new("USD", "EUR")));
    app.dispatch(SessionAction::AddFavorite(CurrencyPair::new("GBP", "JPY")));
    app.select_codes("GBP", "JPY");
    assert_eq!(app.selected_favorite(), Some(0));

    app.focus = Focus::Amount;
    handle_event(&ctrl('d'), &mut app);
    assert_eq!(app.session.favorites.labels(), vec!["USD → EUR".to_string()]);

    app.session
        .dispatch(SessionAction::AddFavorite(CurrencyPair::new("GBP", "JPY")));
    app.focus = Focus::Favorites;
    handle_event(&ctrl('d'), &mut app);
    assert_eq!(app.session.favorites.labels(), vec!["GBP → JPY".to_string()]);
}
