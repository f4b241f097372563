//! Settings summary and the favorites list.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use super::helpers::panel;
use crate::i18n::MessageKey;
use crate::state::{AppState, Focus};
use crate::theme::KeyMap;
use crate::util::fit_width;

/// What: Render the sidebar.
///
/// Inputs:
/// - `app`: Mutable for the favorites `ListState`.
///
/// Details:
/// - Settings block on top, favorites below with key hints and a caption.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = app.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let tr = &app.translator;
    let on_off = if app.session.theme_dark {
        tr.t(MessageKey::On)
    } else {
        tr.t(MessageKey::Off)
    };
    let settings = vec![
        Line::from(Span::raw(tr.t_fmt1(MessageKey::DarkMode, on_off))),
        Line::from(Span::raw(
            tr.t_fmt1(MessageKey::Language, &app.session.language),
        )),
    ];
    f.render_widget(
        Paragraph::new(settings).block(panel(tr.t(MessageKey::SettingsTitle), &th, false)),
        rows[0],
    );

    let focused = app.focus == Focus::Favorites;
    let block = panel(tr.t(MessageKey::FavoritesTitle), &th, focused);
    let inner = block.inner(rows[1]);
    f.render_widget(block, rows[1]);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(5)])
        .split(inner);

    let items: Vec<ListItem> = if app.session.favorites.is_empty() {
        vec![ListItem::new(Span::styled(
            tr.t(MessageKey::FavoritesEmpty),
            Style::default().fg(th.subtext0),
        ))]
    } else {
        app.session
            .favorites
            .labels()
            .into_iter()
            .map(|label| {
                ListItem::new(Span::raw(fit_width(
                    &format!("★ {label}"),
                    usize::from(parts[0].width),
                )))
            })
            .collect()
    };
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(th.base)
            .bg(th.sapphire)
            .add_modifier(Modifier::BOLD),
    );

    let km = &app.keymap;
    let hint = Style::default().fg(th.overlay1);
    let help = vec![
        Line::from(Span::styled(
            tr.t_fmt1(MessageKey::FavoritesAddHint, KeyMap::first_label(&km.add_favorite)),
            hint,
        )),
        Line::from(Span::styled(
            tr.t_fmt1(
                MessageKey::FavoritesRemoveHint,
                KeyMap::first_label(&km.remove_favorite),
            ),
            hint,
        )),
        Line::from(Span::styled(tr.t(MessageKey::FavoritesUseHint), hint)),
        Line::from(Span::styled(
            tr.t(MessageKey::FavoritesHelp),
            Style::default().fg(th.subtext0),
        )),
    ];
    let help = Paragraph::new(help).wrap(Wrap { trim: true });

    f.render_stateful_widget(list, parts[0], &mut app.favorites_state);
    f.render_widget(help, parts[1]);
}
