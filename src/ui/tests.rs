use chrono::NaiveDate;
use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::logic::convert::ConversionOutcome;
use crate::logic::trend::{Analytics, RateChange};
use crate::state::{ChartTab, Conversion, CurrencyPair, SessionAction};

/// Draw one frame and flatten the buffer into a string.
fn render(app: &mut AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn outcome() -> ConversionOutcome {
    let today = NaiveDate::from_ymd_opt(2025, 3, 1).expect("date");
    ConversionOutcome {
        pair: CurrencyPair::new("USD", "EUR"),
        amount: 10.0,
        conversion: Conversion {
            result: 9.2,
            rate: 0.92,
        },
        previous_rate: Some(0.9),
        change: Some(RateChange::Increased(2.22)),
        analytics: Some(Analytics::synthetic("USD", 0.92, today)),
        at: today.and_hms_opt(10, 0, 0).expect("time"),
    }
}

#[test]
/// What: A fresh dashboard shows the title, placeholders, and key hints.
///
/// Output:
/// - Title, empty-result text, empty history dash, and footer provider note.
fn ui_initial_frame_renders_placeholders() {
    let mut app = AppState::default();
    let screen = render(&mut app, 140, 48);
    assert!(screen.contains("Global Currency Converter Pro"));
    assert!(screen.contains("No conversion yet."));
    assert!(screen.contains("Last API call: never"));
    assert!(screen.contains("No favorites yet."));
    assert!(screen.contains("ExchangeRate-API"));
    assert!(!screen.contains("API rate limit reached"));
}

#[test]
/// What: A finished conversion renders the result, rate change and every analytics tab.
///
/// Inputs:
/// - Outcome for 10 USD → EUR with analytics, each chart tab in turn.
///
/// Output:
/// - Headline, unit rate, change line, and the sample-data disclaimer on each tab.
fn ui_result_and_analytics_tabs() {
    let mut app = AppState::default();
    app.last_outcome = Some(outcome());
    for tab in ChartTab::ALL {
        app.chart_tab = tab;
        let screen = render(&mut app, 160, 60);
        assert!(screen.contains("10.00 USD = 9.20 EUR"), "{tab:?}");
        assert!(screen.contains("1 USD = 0.9200 EUR"));
        assert!(screen.contains("2.22%"));
        assert!(screen.contains("illustrative sample data"), "{tab:?}");
    }
}

#[test]
/// What: The rate-limit banner appears once failures exceed the threshold.
///
/// Inputs:
/// - Four consecutive failed calls.
///
/// Output:
/// - Banner present in the header.
fn ui_api_limit_banner() {
    let mut app = AppState::default();
    for _ in 0..=crate::state::API_WARNING_THRESHOLD {
        app.session.dispatch(SessionAction::ApiCallFailed);
    }
    let screen = render(&mut app, 140, 48);
    assert!(screen.contains("API rate limit reached"));
}

#[test]
fn ui_busy_overlay_and_small_terminal() {
    let mut app = AppState::default();
    app.busy = true;
    let screen = render(&mut app, 140, 48);
    assert!(screen.contains("Converting..."));
    // Tiny areas must not panic.
    let _ = render(&mut app, 20, 6);
}

#[test]
fn ui_centered_rect_fits_area() {
    let area = Rect::new(0, 0, 10, 4);
    let r = centered(area, 20, 3);
    assert_eq!((r.width, r.height), (10, 3));
    assert_eq!(r.y, 0);
}
