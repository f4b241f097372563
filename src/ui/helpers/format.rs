//! Formatting utilities for UI display.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::i18n::{MessageKey, Translator};
use crate::logic::trend::RateChange;
use crate::theme::Theme;

/// Amount with two decimals, as shown in the result line and history.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Rates and stored results use four decimals.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.4}")
}

/// Converted result in the headline uses two decimals.
#[must_use]
pub fn format_result(result: f64) -> String {
    format!("{result:.2}")
}

/// Translated rate-change message with a two-decimal percentage.
#[must_use]
pub fn rate_change_text(change: RateChange, tr: &Translator) -> String {
    match change {
        RateChange::Increased(pct) => tr.t_fmt1(MessageKey::RateIncreased, format!("{pct:.2}")),
        RateChange::Decreased(pct) => tr.t_fmt1(MessageKey::RateDecreased, format!("{pct:.2}")),
        RateChange::Stable => tr.t(MessageKey::RateStable),
    }
}

/// What: Render the rate-change message in its semantic color.
///
/// Inputs:
/// - `change`: Classified change.
/// - `tr`: Translator.
/// - `th`: Theme.
///
/// Output:
/// - Green line for increases, orange for decreases, accent for stable.
#[must_use]
pub fn rate_change_line(change: RateChange, tr: &Translator, th: &Theme) -> Line<'static> {
    let color = match change {
        RateChange::Increased(_) => th.green,
        RateChange::Decreased(_) => th.chart_average,
        RateChange::Stable => th.sapphire,
    };
    Line::from(Span::styled(
        rate_change_text(change, tr),
        Style::default().fg(color),
    ))
}
