//! Keys for the conversion card: amount field and currency selectors.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{EventOutcome, matches_any};
use crate::state::{AppState, Focus};

/// Longest accepted amount text.
const MAX_AMOUNT_LEN: usize = 18;

/// What: Handle a key while the amount field or a selector is focused.
///
/// Details:
/// - Amount: digits plus one `.`/`,` are typed, Backspace deletes; Up/Down adjust by 1.
/// - Selectors: Up/Down/Left/Right step through currencies, PageUp/PageDown by 10,
///   and a letter jumps to the next code starting with it.
/// - The convert chord runs a conversion from any of the three.
pub fn handle_key(ke: &KeyEvent, app: &mut AppState) -> EventOutcome {
    if matches_any(&app.keymap.convert, ke) {
        return EventOutcome::Convert;
    }
    match app.focus {
        Focus::Amount => edit_amount(ke, app),
        Focus::From | Focus::To => step_selector(ke, app),
        Focus::Favorites | Focus::History => {}
    }
    EventOutcome::Continue
}

/// Edit the amount text.
fn edit_amount(ke: &KeyEvent, app: &mut AppState) {
    if ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return;
    }
    match ke.code {
        KeyCode::Char(c) if c.is_ascii_digit() && app.amount_input.len() < MAX_AMOUNT_LEN => {
            app.amount_input.push(c);
        }
        KeyCode::Char('.' | ',') if !app.amount_input.contains(['.', ',']) => {
            if app.amount_input.is_empty() {
                app.amount_input.push('0');
            }
            app.amount_input.push('.');
        }
        KeyCode::Backspace => {
            app.amount_input.pop();
        }
        KeyCode::Delete => app.amount_input.clear(),
        KeyCode::Up => nudge_amount(app, 1.0),
        KeyCode::Down => nudge_amount(app, -1.0),
        _ => {}
    }
}

/// Add `delta` to the parsed amount, never going below the minimum.
fn nudge_amount(app: &mut AppState, delta: f64) {
    let current = app.parsed_amount().unwrap_or(0.0);
    let next = crate::util::round_to((current + delta).max(crate::logic::MIN_AMOUNT), 2);
    app.amount_input = format!("{next}");
}

/// Step the focused currency selector.
fn step_selector(ke: &KeyEvent, app: &mut AppState) {
    let delta: isize = match ke.code {
        KeyCode::Up | KeyCode::Left => -1,
        KeyCode::Down | KeyCode::Right => 1,
        KeyCode::PageUp => -10,
        KeyCode::PageDown => 10,
        KeyCode::Char(c) if c.is_ascii_alphabetic() && ke.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            jump_to_letter(app, c);
            return;
        }
        _ => return,
    };
    if app.focus == Focus::From {
        app.step_from(delta);
    } else {
        app.step_to(delta);
    }
}

/// Move the focused selector to the next code starting with `letter`.
fn jump_to_letter(app: &mut AppState, letter: char) {
    let letter = letter.to_ascii_uppercase();
    let len = app.currencies.len();
    let start = if app.focus == Focus::From {
        app.from_idx
    } else {
        app.to_idx
    };
    let hit = (1..=len)
        .map(|off| (start + off) % len.max(1))
        .find(|&i| app.currencies[i].starts_with(letter));
    if let Some(i) = hit {
        if app.focus == Focus::From {
            app.from_idx = i;
        } else {
            app.to_idx = i;
        }
    }
}
