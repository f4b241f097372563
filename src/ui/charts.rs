//! Analytics tabs: trend line, weekly candles, histogram, comparison, metrics.
//!
//! All series come from [`Analytics::synthetic`](crate::logic::trend::Analytics::synthetic)
//! and every chart title carries the "illustrative" disclaimer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph, Tabs},
};

use super::helpers::{format_rate, panel};
use crate::i18n::{MessageKey, Translator};
use crate::logic::trend::{Analytics, Candle, ProbabilityKind};
use crate::state::{AppState, ChartTab};
use crate::theme::Theme;

/// Scale applied to rates so bar heights keep four decimals of precision.
const BAR_SCALE: f64 = 10_000.0;

/// Translated tab title.
const fn tab_key(tab: ChartTab) -> MessageKey {
    match tab {
        ChartTab::Trend => MessageKey::TabTrend,
        ChartTab::Candlestick => MessageKey::TabCandlestick,
        ChartTab::Histogram => MessageKey::TabHistogram,
        ChartTab::Comparison => MessageKey::TabComparison,
        ChartTab::Metrics => MessageKey::TabMetrics,
    }
}

/// Chart title with the sample-data disclaimer appended.
fn titled(tr: &Translator, title: String) -> String {
    format!("{title} ({})", tr.t(MessageKey::AnalyticsIllustrative))
}

/// What: Render the analytics block for the last conversion.
///
/// Details:
/// - Draws nothing when the last outcome carries no analytics.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(outcome) = app.last_outcome.as_ref() else {
        return;
    };
    let Some(analytics) = outcome.analytics.as_ref() else {
        return;
    };
    let th = app.theme();
    let tr = &app.translator;
    let block = panel(tr.t(MessageKey::AnalyticsTitle), &th, false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(inner);

    let titles: Vec<Line> = ChartTab::ALL
        .iter()
        .map(|t| Line::from(tr.t(tab_key(*t))))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.chart_tab.index())
        .style(Style::default().fg(th.overlay1))
        .highlight_style(
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");
    f.render_widget(tabs, rows[0]);

    let (from, to) = (outcome.pair.from.as_str(), outcome.pair.to.as_str());
    match app.chart_tab {
        ChartTab::Trend => render_trend(f, analytics, tr, &th, rows[1]),
        ChartTab::Candlestick => render_candles(f, analytics, tr, &th, (from, to), rows[1]),
        ChartTab::Histogram => render_histogram(f, analytics, tr, &th, (from, to), rows[1]),
        ChartTab::Comparison => render_comparison(f, analytics, tr, &th, from, rows[1]),
        ChartTab::Metrics => render_metrics(f, analytics, tr, &th, rows[1]),
    }
}

/// Day offsets paired with a value, the x axis of the line charts.
fn indexed(values: impl Iterator<Item = Option<f64>>) -> Vec<(f64, f64)> {
    values
        .zip(0u32..)
        .filter_map(|(v, i)| v.map(|v| (f64::from(i), v)))
        .collect()
}

/// Add a small margin so flat series stay visible.
fn padded(lo: f64, hi: f64) -> [f64; 2] {
    let span = (hi - lo).abs().max(hi.abs() * 1e-3).max(1e-6);
    [lo - span * 0.05, hi + span * 0.05]
}

/// 30-day rate with its 7-day moving average.
fn render_trend(f: &mut Frame, a: &Analytics, tr: &Translator, th: &Theme, area: Rect) {
    let rate = indexed(a.trend.iter().map(|p| Some(p.rate)));
    let avg = indexed(a.trend.iter().map(|p| p.moving_avg));
    let (lo, hi) = a.trend_bounds();
    let [y_lo, y_hi] = padded(lo, hi);
    let last_x = rate.last().map_or(1.0, |(x, _)| *x);
    let first_day = a.trend.first().map(|p| p.date.format("%m-%d").to_string());
    let last_day = a.trend.last().map(|p| p.date.format("%m-%d").to_string());

    let datasets = vec![
        Dataset::default()
            .name(tr.t(MessageKey::SeriesRate))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(th.chart_line))
            .data(&rate),
        Dataset::default()
            .name(tr.t(MessageKey::SeriesMovingAverage))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(th.chart_average))
            .data(&avg),
    ];
    let chart = Chart::new(datasets)
        .block(panel(titled(tr, tr.t(MessageKey::TabTrend)), th, false))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(th.overlay1))
                .bounds([0.0, last_x])
                .labels(vec![
                    Span::raw(first_day.unwrap_or_default()),
                    Span::raw(last_day.unwrap_or_default()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(th.overlay1))
                .bounds([y_lo, y_hi])
                .labels(vec![Span::raw(format_rate(lo)), Span::raw(format_rate(hi))]),
        );
    f.render_widget(chart, area);
}

/// What: One text row per weekly candle.
///
/// Output:
/// - `MM-DD  O … H … L … C …` with a body glyph, green for up weeks, red otherwise.
fn candle_line(c: &Candle, th: &Theme) -> Line<'static> {
    let color = if c.is_bullish() { th.green } else { th.chart_decrease };
    let glyph = if c.is_bullish() { "▲" } else { "▼" };
    Line::from(vec![
        Span::styled(
            format!("{}  ", c.date.format("%m-%d")),
            Style::default().fg(th.subtext0),
        ),
        Span::styled(format!("{glyph} "), Style::default().fg(color)),
        Span::raw(format!(
            "O {}  H {}  L {}  ",
            format_rate(c.open),
            format_rate(c.high),
            format_rate(c.low)
        )),
        Span::styled(
            format!("C {}", format_rate(c.close)),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Weekly open/close rows colored by direction.
fn render_candles(
    f: &mut Frame,
    a: &Analytics,
    tr: &Translator,
    th: &Theme,
    (from, to): (&str, &str),
    area: Rect,
) {
    let lines: Vec<Line> = a.candles.iter().map(|c| candle_line(c, th)).collect();
    let title = titled(tr, tr.t_fmt(MessageKey::CandlesTitle, &[&from, &to]));
    f.render_widget(Paragraph::new(lines).block(panel(title, th, false)), area);
}

/// Rate scaled to an integer bar height.
fn scaled(rate: f64) -> u64 {
    let v = (rate * BAR_SCALE).round();
    if v.is_finite() && v > 0.0 {
        // Non-negative and finite; saturates on overflow.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let out = v as u64;
        out
    } else {
        0
    }
}

/// Bar chart of rate counts per bin.
fn render_histogram(
    f: &mut Frame,
    a: &Analytics,
    tr: &Translator,
    th: &Theme,
    (from, to): (&str, &str),
    area: Rect,
) {
    let bars: Vec<Bar> = a
        .histogram
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count)
                .label(Line::from(format_rate(f64::midpoint(b.lower, b.upper))))
                .style(Style::default().fg(th.chart_line))
        })
        .collect();
    let title = titled(tr, tr.t_fmt(MessageKey::HistogramTitle, &[&from, &to]));
    let chart = BarChart::default()
        .block(panel(title, th, false))
        .bar_width(6)
        .bar_gap(1)
        .value_style(Style::default().fg(th.base).bg(th.chart_line))
        .label_style(Style::default().fg(th.subtext0))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

/// One bar per major currency, scaled to integers.
fn render_comparison(
    f: &mut Frame,
    a: &Analytics,
    tr: &Translator,
    th: &Theme,
    from: &str,
    area: Rect,
) {
    let bars: Vec<Bar> = a
        .comparison
        .iter()
        .map(|c| {
            Bar::default()
                .value(scaled(c.rate))
                .text_value(format_rate(c.rate))
                .label(Line::from(c.code))
                .style(Style::default().fg(th.sapphire))
        })
        .collect();
    let title = titled(tr, tr.t_fmt1(MessageKey::ComparisonTitle, from));
    let chart = BarChart::default()
        .block(panel(title, th, false))
        .bar_width(8)
        .bar_gap(2)
        .value_style(Style::default().fg(th.base).bg(th.sapphire))
        .label_style(Style::default().fg(th.text))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}

/// Volatility line on the left, change probabilities on the right.
fn render_metrics(f: &mut Frame, a: &Analytics, tr: &Translator, th: &Theme, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let vol = indexed(a.volatility.iter().map(|(_, v)| Some(*v)));
    let (lo, hi) = a
        .volatility
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, v)| {
            (lo.min(*v), hi.max(*v))
        });
    let (lo, hi) = if lo.is_finite() { (lo, hi) } else { (0.0, 1.0) };
    let last_x = vol.last().map_or(1.0, |(x, _)| *x);
    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(th.chart_average))
            .data(&vol),
    ];
    let chart = Chart::new(datasets)
        .block(panel(titled(tr, tr.t(MessageKey::VolatilityTitle)), th, false))
        .x_axis(Axis::default().bounds([0.0, last_x]))
        .y_axis(
            Axis::default()
                .style(Style::default().fg(th.overlay1))
                .bounds(padded(lo, hi))
                .labels(vec![
                    Span::raw(format!("{lo:.2}")),
                    Span::raw(format!("{hi:.2}")),
                ]),
        );
    f.render_widget(chart, cols[0]);

    let lines: Vec<Line> = a
        .probabilities
        .iter()
        .map(|m| {
            let key = match m.kind {
                ProbabilityKind::Increase => MessageKey::ProbIncrease,
                ProbabilityKind::Stable => MessageKey::ProbStable,
                ProbabilityKind::Decrease => MessageKey::ProbDecrease,
            };
            let delta_color = if m.delta_pct >= 0 { th.green } else { th.chart_decrease };
            Line::from(vec![
                Span::styled(format!("{:<16}", tr.t(key)), Style::default().fg(th.text)),
                Span::styled(
                    format!("{:>3}%  ", m.value_pct),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:+}%", m.delta_pct),
                    Style::default().fg(delta_color),
                ),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines).block(panel(tr.t(MessageKey::ProbabilityTitle), th, false)),
        cols[1],
    );
}
