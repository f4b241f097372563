//! UI helper utilities shared by the panels.
//!
//! - Themed panel blocks with focus highlighting
//! - Number and rate-change formatting

pub mod format;

pub use format::{format_amount, format_rate, format_result, rate_change_line, rate_change_text};

use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::theme::Theme;

/// What: Build a rounded, titled panel block.
///
/// Inputs:
/// - `title`: Panel title (already translated).
/// - `th`: Active theme.
/// - `focused`: Whether the panel receives key input.
///
/// Output:
/// - Block with an accent border and bold title when focused, muted otherwise.
pub fn panel(title: String, th: &Theme, focused: bool) -> Block<'static> {
    let (border, title_style) = if focused {
        (
            th.sapphire,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )
    } else {
        (th.surface1, Style::default().fg(th.overlay1))
    };
    Block::default()
        .title(Span::styled(format!(" {title} "), title_style))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(th.base).fg(th.text))
}

#[cfg(test)]
mod tests;
