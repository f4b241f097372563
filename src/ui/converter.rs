//! Converter card (amount and currency selectors) and the result panel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::helpers::{format_amount, format_rate, format_result, panel, rate_change_line};
use crate::i18n::MessageKey;
use crate::state::{AppState, Focus};
use crate::theme::KeyMap;

/// Card height: field boxes, hint line, borders.
pub const CARD_HEIGHT: u16 = 6;
/// Result panel height.
pub const RESULT_HEIGHT: u16 = 5;

/// What: Render the amount field, both selectors and the convert hint.
///
/// Details:
/// - The focused field gets the accent border; the amount field shows a cursor.
pub fn render_card(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let tr = &app.translator;
    let card_focused = matches!(app.focus, Focus::Amount | Focus::From | Focus::To);
    let block = panel(tr.t(MessageKey::ConverterTitle), &th, card_focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[0]);

    let amount_focused = app.focus == Focus::Amount;
    let mut amount = vec![Span::styled(
        app.amount_input.clone(),
        Style::default().fg(th.text),
    )];
    if amount_focused {
        amount.push(Span::styled("▏", Style::default().fg(th.sapphire)));
    }
    f.render_widget(
        Paragraph::new(Line::from(amount)).block(panel(tr.t(MessageKey::Amount), &th, amount_focused)),
        cols[0],
    );

    let selector = |code: &str, focused: bool| {
        let accent = if focused { th.sapphire } else { th.overlay1 };
        Line::from(vec![
            Span::styled("◂ ", Style::default().fg(accent)),
            Span::styled(
                code.to_string(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▸", Style::default().fg(accent)),
        ])
    };
    let from_focused = app.focus == Focus::From;
    let to_focused = app.focus == Focus::To;
    f.render_widget(
        Paragraph::new(selector(app.from_code(), from_focused))
            .block(panel(tr.t(MessageKey::From), &th, from_focused)),
        cols[1],
    );
    f.render_widget(
        Paragraph::new(selector(app.to_code(), to_focused))
            .block(panel(tr.t(MessageKey::To), &th, to_focused)),
        cols[2],
    );

    let hint = tr.t_fmt1(
        MessageKey::ConvertHint,
        KeyMap::first_label(&app.keymap.convert),
    );
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(th.green))),
        rows[1],
    );
}

/// What: Render the last conversion result.
///
/// Output:
/// - Headline `amount FROM = result TO`, the unit rate, and the rate-change line
///   when yesterday's rate was available; a placeholder before the first conversion.
pub fn render_result(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let tr = &app.translator;
    let lines = app.last_outcome.as_ref().map_or_else(
        || {
            vec![Line::from(Span::styled(
                tr.t(MessageKey::ResultEmpty),
                Style::default().fg(th.subtext0),
            ))]
        },
        |o| {
            let headline = tr.t_fmt(
                MessageKey::ResultLine,
                &[
                    &format_amount(o.amount),
                    &o.pair.from,
                    &format_result(o.conversion.result),
                    &o.pair.to,
                ],
            );
            let rate = tr.t_fmt(
                MessageKey::RateLine,
                &[&o.pair.from, &format_rate(o.conversion.rate), &o.pair.to],
            );
            let mut lines = vec![
                Line::from(Span::styled(
                    headline,
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(rate, Style::default().fg(th.subtext0))),
            ];
            if let Some(change) = o.change {
                lines.push(rate_change_line(change, tr, &th));
            }
            lines
        },
    );
    f.render_widget(
        Paragraph::new(lines).block(panel(tr.t(MessageKey::ResultTitle), &th, false)),
        area,
    );
}
