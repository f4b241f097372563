//! Frame composition for the dashboard.
//!
//! Layout, top to bottom: header, body (sidebar + main column), footer. The
//! main column stacks the converter card, the result panel, the analytics tabs
//! and the history table.

mod charts;
mod converter;
mod footer;
mod header;
pub mod helpers;
mod history;
mod sidebar;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::i18n::MessageKey;
use crate::state::AppState;

/// Width of the settings/favorites sidebar.
const SIDEBAR_WIDTH: u16 = 30;

/// What: Render one frame of the dashboard.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state (mutable for the stateful favorites list).
///
/// Details:
/// - Draws a "Converting..." overlay on top when a request is in flight.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = app.theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let header_h = header::height(app);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_h),
            Constraint::Min(10),
            Constraint::Length(footer::HEIGHT),
        ])
        .split(area);

    header::render(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(chunks[1]);
    sidebar::render(f, app, body[0]);
    render_main(f, app, body[1]);

    footer::render(f, app, chunks[2]);

    if app.busy {
        render_busy(f, app, area);
    }
}

/// Stack converter, result, analytics and history in the main column.
fn render_main(f: &mut Frame, app: &AppState, area: Rect) {
    let analytics = app.show_analytics
        && app
            .last_outcome
            .as_ref()
            .is_some_and(|o| o.analytics.is_some());
    let mut constraints = vec![
        Constraint::Length(converter::CARD_HEIGHT),
        Constraint::Length(converter::RESULT_HEIGHT),
    ];
    if analytics {
        constraints.push(Constraint::Min(12));
        constraints.push(Constraint::Length(9));
    } else {
        constraints.push(Constraint::Min(6));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    converter::render_card(f, app, rows[0]);
    converter::render_result(f, app, rows[1]);
    if analytics {
        charts::render(f, app, rows[2]);
        history::render(f, app, rows[3]);
    } else {
        history::render(f, app, rows[2]);
    }
}

/// Centered "Converting..." box drawn while a conversion runs.
fn render_busy(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let text = app.translator.t(MessageKey::Converting);
    let width = u16::try_from(unicode_width::UnicodeWidthStr::width(text.as_str()))
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .min(area.width);
    let rect = centered(area, width, 3);
    f.render_widget(Clear, rect);
    let p = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )))
    .alignment(ratatui::layout::Alignment::Center)
    .block(helpers::panel(String::new(), &th, true));
    f.render_widget(p, rect);
}

/// Rectangle of `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests;
