use super::*;
use crate::i18n::Translator;
use crate::logic::trend::RateChange;

#[test]
/// What: Numbers use the display precisions of the result panel and history.
///
/// Output:
/// - Two decimals for amounts/results, four for rates.
fn format_precisions() {
    assert_eq!(format_amount(10.0), "10.00");
    assert_eq!(format_result(9.23456), "9.23");
    assert_eq!(format_rate(0.923456), "0.9235");
}

#[test]
/// What: Rate-change lines carry the percentage and the semantic color.
///
/// Inputs:
/// - Increase of 1.5%, decrease of 0.25%, stable.
///
/// Output:
/// - Texts with two-decimal percentages; green, orange, and accent colors.
fn rate_change_line_text_and_color() {
    let tr = Translator::english();
    let th = crate::theme::theme(false);
    let up = rate_change_line(RateChange::Increased(1.5), &tr, &th);
    assert_eq!(up.spans[0].content, "▲ Rate increased by 1.50% since yesterday");
    assert_eq!(up.spans[0].style.fg, Some(th.green));
    let down = rate_change_line(RateChange::Decreased(0.25), &tr, &th);
    assert!(down.spans[0].content.contains("0.25%"));
    assert_eq!(down.spans[0].style.fg, Some(th.chart_average));
    let flat = rate_change_line(RateChange::Stable, &tr, &th);
    assert_eq!(flat.spans[0].style.fg, Some(th.sapphire));
    let block = panel("x".into(), &th, true);
    let _ = block;
}
