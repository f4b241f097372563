//! Conversion history table, newest first.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
};

use super::helpers::{format_amount, format_rate, panel};
use crate::i18n::MessageKey;
use crate::state::{AppState, Focus};
use crate::util::format_ts;

/// What: Render the history table.
///
/// Details:
/// - Rows are sorted by timestamp descending and start at `history_scroll`.
/// - An empty history shows a single row of placeholder cells.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = app.theme();
    let tr = &app.translator;
    let header = Row::new(
        [
            MessageKey::ColTimestamp,
            MessageKey::ColFrom,
            MessageKey::ColTo,
            MessageKey::ColAmount,
            MessageKey::ColRate,
            MessageKey::ColResult,
        ]
        .map(|k| Cell::from(tr.t(k))),
    )
    .style(Style::default().fg(th.mauve).add_modifier(Modifier::BOLD));

    let entries = app.session.history.sorted_by_timestamp_desc();
    let rows: Vec<Row> = if entries.is_empty() {
        let dash = tr.t(MessageKey::HistoryEmpty);
        vec![Row::new(vec![dash; 6]).style(Style::default().fg(th.subtext0))]
    } else {
        entries
            .iter()
            .skip(app.history_scroll)
            .map(|e| {
                Row::new(vec![
                    format_ts(&e.timestamp()),
                    e.from().to_string(),
                    e.to().to_string(),
                    format_amount(e.amount()),
                    format_rate(e.rate()),
                    format_rate(e.result()),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(19),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(12),
    ];
    let title = format!(
        "{} · {}",
        tr.t(MessageKey::HistoryTitle),
        tr.t(MessageKey::HistoryHelp)
    );
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(panel(title, &th, app.focus == Focus::History));
    f.render_widget(table, area);
}
