//! Title bar with the API status line and the rate-limit banner.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::i18n::MessageKey;
use crate::state::AppState;
use crate::util::format_ts;

/// Header height: three lines plus borders, one more while the banner shows.
pub fn height(app: &AppState) -> u16 {
    if app.session.api.over_threshold() { 6 } else { 5 }
}

/// What: Render the header.
///
/// Details:
/// - Shows the animation badge beside the title when one was downloaded.
/// - The rate-limit banner appears while the failure counter exceeds its threshold.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let tr = &app.translator;
    let mut title = vec![Span::styled(
        tr.t(MessageKey::AppTitle),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    if let Some(anim) = &app.animation {
        title.push(Span::raw("  "));
        title.push(Span::styled(anim.badge(), Style::default().fg(th.yellow)));
    }
    let last_call = app.session.api.last_call.as_ref().map_or_else(
        || tr.t(MessageKey::LastApiCallNever),
        |ts| tr.t_fmt1(MessageKey::LastApiCall, format_ts(ts)),
    );
    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            tr.t(MessageKey::AppSubtitle),
            Style::default().fg(th.subtext0),
        )),
        Line::from(Span::styled(last_call, Style::default().fg(th.overlay1))),
    ];
    if app.session.api.over_threshold() {
        lines.push(Line::from(Span::styled(
            tr.t(MessageKey::ApiLimit),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        )));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1))
        .style(Style::default().bg(th.mantle).fg(th.text));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
