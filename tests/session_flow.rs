//! Integration tests driving the dashboard state through key events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use fxdash::events::{EventOutcome, handle_event};
use fxdash::state::{
    AppState, Conversion, CurrencyPair, HistoryEntry, Notice, SessionAction, SessionState,
};

fn key(code: KeyCode, mods: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, mods))
}

fn entry(minute: u32, from: &str, to: &str) -> HistoryEntry {
    let ts = chrono::NaiveDate::from_ymd_opt(2025, 5, 1)
        .and_then(|d| d.and_hms_opt(10, minute, 0))
        .expect("ts");
    HistoryEntry::new(
        ts,
        &CurrencyPair::new(from, to),
        1.0,
        Conversion {
            result: 1.5,
            rate: 1.5,
        },
    )
}

#[test]
/// What: The reducer is pure: `apply` returns a new state and leaves the input untouched.
///
/// Inputs:
/// - Favorite add, duplicate add, removal of a missing pair.
///
/// Output:
/// - Notices `FavoriteAdded`, none for the duplicate, `FavoriteNotFound`.
fn reducer_favorites_and_notices() {
    let start = SessionState::default();
    let pair = CurrencyPair::new("USD", "JPY");
    let t1 = start.clone().apply(SessionAction::AddFavorite(pair.clone()));
    assert_eq!(t1.notice, Some(Notice::FavoriteAdded));
    assert!(start.favorites.is_empty());

    let t2 = t1.state.clone().apply(SessionAction::AddFavorite(pair));
    assert_eq!(t2.state.favorites.len(), 1);
    assert_ne!(t2.notice, Some(Notice::FavoriteAdded));

    let t3 = t2
        .state
        .apply(SessionAction::RemoveFavorite(CurrencyPair::new("EUR", "GBP")));
    assert_eq!(t3.notice, Some(Notice::FavoriteNotFound));
    assert_eq!(t3.state.favorites.len(), 1);
}

#[test]
/// What: History is listed newest first and clearing empties it.
fn reducer_history_order_and_clear() {
    let mut s = SessionState::default();
    s.dispatch(SessionAction::RecordConversion(entry(5, "USD", "EUR")));
    s.dispatch(SessionAction::RecordConversion(entry(1, "USD", "GBP")));
    s.dispatch(SessionAction::RecordConversion(entry(9, "EUR", "JPY")));
    let order: Vec<&str> = s
        .history
        .sorted_by_timestamp_desc()
        .iter()
        .map(|e| e.to())
        .collect();
    assert_eq!(order, vec!["JPY", "EUR", "GBP"]);
    assert_eq!(
        s.dispatch(SessionAction::ClearHistory),
        Some(Notice::HistoryCleared)
    );
    assert!(s.history.is_empty());
}

#[test]
/// What: A keyboard session selects currencies, saves a favorite and requests a conversion.
///
/// Inputs:
/// - Type `42`, Tab to From, jump to `G`, Tab to To, Ctrl+F, Enter.
///
/// Output:
/// - Amount 42, pair `GBP → EUR` saved as favorite, last key yields `Convert`.
fn keyboard_session_builds_a_conversion_request() {
    let mut app = AppState::default();
    app.amount_input.clear();
    for c in ['4', '2'] {
        handle_event(&key(KeyCode::Char(c), KeyModifiers::NONE), &mut app);
    }
    handle_event(&key(KeyCode::Tab, KeyModifiers::NONE), &mut app);
    handle_event(&key(KeyCode::Char('g'), KeyModifiers::NONE), &mut app);
    assert_eq!(app.from_code(), "GBP");
    handle_event(&key(KeyCode::Tab, KeyModifiers::NONE), &mut app);
    handle_event(&key(KeyCode::Char('f'), KeyModifiers::CONTROL), &mut app);
    assert!(
        app.session
            .favorites
            .contains(&CurrencyPair::new("GBP", "EUR"))
    );
    assert_eq!(app.parsed_amount(), Some(42.0));
    assert_eq!(
        handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), &mut app),
        EventOutcome::Convert
    );
    assert_eq!(
        handle_event(&key(KeyCode::Char('q'), KeyModifiers::CONTROL), &mut app),
        EventOutcome::Quit
    );
}
