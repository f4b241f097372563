//! Footer: provider note, clock, and either the toast or the key hints.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::i18n::MessageKey;
use crate::state::{AppState, ToastKind};
use crate::theme::KeyMap;
use crate::util::{format_ts, now_local};

/// Top border plus two lines.
pub const HEIGHT: u16 = 3;

/// Draw the footer into `area`.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let tr = &app.translator;
    let info = Line::from(vec![
        Span::styled(tr.t(MessageKey::FooterText), Style::default().fg(th.subtext0)),
        Span::raw("  ·  "),
        Span::styled(
            tr.t_fmt1(MessageKey::LastUpdated, format_ts(&now_local())),
            Style::default().fg(th.overlay1),
        ),
    ]);
    let second = app.toast.as_ref().map_or_else(
        || {
            let km = &app.keymap;
            Line::from(Span::styled(
                tr.t_fmt(
                    MessageKey::FooterKeys,
                    &[
                        &KeyMap::first_label(&km.toggle_theme),
                        &KeyMap::first_label(&km.cycle_language),
                        &KeyMap::first_label(&km.clear_history),
                        &KeyMap::first_label(&km.next_tab),
                        &KeyMap::first_label(&km.exit),
                    ],
                ),
                Style::default().fg(th.overlay1),
            ))
        },
        |toast| {
            let color = match toast.kind {
                ToastKind::Success => th.green,
                ToastKind::Info => th.sapphire,
                ToastKind::Warning => th.yellow,
                ToastKind::Error => th.red,
            };
            Line::from(Span::styled(
                toast.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        },
    );
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(th.surface1))
        .style(Style::default().bg(th.mantle).fg(th.text));
    f.render_widget(Paragraph::new(vec![info, second]).block(block), area);
}
