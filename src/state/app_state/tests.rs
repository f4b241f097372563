use super::*;
use crate::state::session::{Notice, SessionAction};
use crate::state::types::{CurrencyPair, ToastKind};

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
/// What: Defaults select USD and EUR from the fallback list and parse the default amount.
///
/// Output:
/// - Pair `USD → EUR`, amount text `1`, parsed amount `Some(1.0)`.
fn app_state_defaults_select_configured_pair() {
    let app = AppState::default();
    assert_eq!(app.current_pair(), CurrencyPair::new("USD", "EUR"));
    assert_eq!(app.amount_input, "1");
    assert_eq!(app.parsed_amount(), Some(1.0));
    assert!(app.toast.is_none());
}

#[test]
/// What: Unknown codes fall back to positions 0 and 1.
///
/// Inputs:
/// - Currency list `[AUD, CAD, CHF]`, favorite `XXX → YYY`.
///
/// Output:
/// - Selectors on `AUD → CAD`; a single-code list selects index 0 for both.
fn app_state_use_favorite_falls_back_to_positions() {
    let mut app = AppState::default();
    app.set_currencies(codes(&["AUD", "CAD", "CHF"]), "CHF", "AUD");
    assert_eq!(app.current_pair(), CurrencyPair::new("CHF", "AUD"));
    app.session.favorites.add(CurrencyPair::new("XXX", "YYY"));
    let used = app.apply_favorite(0).expect("favorite exists");
    assert_eq!(used.label(), "XXX → YYY");
    assert_eq!(app.current_pair(), CurrencyPair::new("AUD", "CAD"));
    assert!(app.apply_favorite(5).is_err());

    app.set_currencies(codes(&["USD"]), "EUR", "GBP");
    assert_eq!((app.from_idx, app.to_idx), (0, 0));
}

#[test]
fn app_state_amount_parsing_enforces_minimum() {
    let mut app = AppState::default();
    for (text, expected) in [
        ("12.5", Some(12.5)),
        ("0,5", Some(0.5)),
        ("0.01", Some(0.01)),
        ("0.001", None),
        ("-4", None),
        ("abc", None),
        ("", None),
        ("inf", None),
    ] {
        app.amount_input = text.to_string();
        assert_eq!(app.parsed_amount(), expected, "input {text:?}");
    }
}

#[test]
/// What: Dispatch turns notices into toasts and keeps the favorites highlight valid.
///
/// Inputs:
/// - Add two favorites, highlight the second, remove it by index, remove again.
///
/// Output:
/// - Success toasts, highlight clamped to 0, then a warning toast for the stale index.
fn app_state_dispatch_sets_toasts_and_clamps_selection() {
    let mut app = AppState::default();
    app.dispatch(SessionAction::AddFavorite(CurrencyPair::new("USD", "EUR")));
    app.dispatch(SessionAction::AddFavorite(CurrencyPair::new("USD", "JPY")));
    assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Success));
    app.step_favorite(1);
    assert_eq!(app.selected_favorite(), Some(1));
    let n = app.dispatch(SessionAction::RemoveFavoriteAt(1));
    assert_eq!(n, Some(Notice::FavoriteRemoved));
    assert_eq!(app.selected_favorite(), Some(0));
    let n = app.dispatch(SessionAction::RemoveFavoriteAt(3));
    assert_eq!(n, Some(Notice::FavoriteNotFound));
    assert_eq!(app.toast.as_ref().map(|t| t.kind), Some(ToastKind::Warning));
    assert_eq!(app.session.favorites.len(), 1);
}

#[test]
fn app_state_selectors_wrap() {
    let mut app = AppState::default();
    app.set_currencies(codes(&["AUD", "CAD", "CHF"]), "AUD", "CAD");
    app.step_from(-1);
    assert_eq!(app.from_code(), "CHF");
    app.step_to(2);
    assert_eq!(app.to_code(), "AUD");
}

#[test]
fn app_state_cycle_language_and_theme() {
    let mut app = AppState::default();
    app.locales = vec!["en-US".into(), "de-DE".into()];
    app.cycle_language();
    assert_eq!(app.session.language, "de-DE");
    assert_eq!(app.translator.locale(), "de-DE");
    app.cycle_language();
    assert_eq!(app.session.language, "en-US");
    let light = app.theme();
    app.toggle_theme();
    assert!(app.session.theme_dark);
    assert_ne!(app.theme().base, light.base);
}
