//! `--convert AMOUNT FROM TO`: one conversion printed to stdout.

use std::path::Path;
use std::process::ExitCode;

use crate::app::load_effective_settings;
use crate::i18n::{self, MessageKey, Translator};
use crate::logic::convert::{ConversionOutcome, MIN_AMOUNT, parse_amount, perform_conversion};
use crate::sources::FxService;
use crate::state::{CurrencyPair, SessionState};
use crate::theme::locales_dir;
use crate::ui::helpers::{format_amount, format_rate, format_result, rate_change_text};
use crate::util::now_local;

use super::utils::normalize_code;

/// What: Convert once and print the result.
///
/// Inputs:
/// - `amount`, `from`, `to`: Raw command-line values.
/// - `config`: Optional settings path.
///
/// Output:
/// - `SUCCESS` after printing; `FAILURE` on an invalid amount or a failed request.
pub async fn handle_convert(amount: &str, from: &str, to: &str, config: Option<&Path>) -> ExitCode {
    let settings = load_effective_settings(config);
    let locale = i18n::resolve_locale(&settings.locale, i18n::detect_system_locale().as_deref());
    let tr = Translator::load(&locale, &locales_dir());

    let Some(amount) = parse_amount(amount) else {
        eprintln!("{}", tr.t_fmt1(MessageKey::InvalidAmount, MIN_AMOUNT));
        return ExitCode::FAILURE;
    };
    let pair = CurrencyPair::new(normalize_code(from), normalize_code(to));
    tracing::info!(pair = %pair.label(), amount, "one-shot conversion requested from CLI");

    let mut service = FxService::from_settings(&settings);
    let mut session = SessionState::new(false, locale);
    match perform_conversion(&mut service, &mut session, &pair, amount, now_local(), false).await {
        Ok(outcome) => {
            for line in summary_lines(&outcome, &tr) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "one-shot conversion failed");
            eprintln!("{}", tr.t(MessageKey::FailedData));
            ExitCode::FAILURE
        }
    }
}

/// What: Plain-text rendering of a conversion outcome.
///
/// Output:
/// - Headline, unit rate, and the rate-change message when available.
#[must_use]
pub fn summary_lines(outcome: &ConversionOutcome, tr: &Translator) -> Vec<String> {
    let (from, to) = (&outcome.pair.from, &outcome.pair.to);
    let mut lines = vec![
        tr.t_fmt(
            MessageKey::ResultLine,
            &[
                &format_amount(outcome.amount),
                from,
                &format_result(outcome.conversion.result),
                to,
            ],
        ),
        tr.t_fmt(
            MessageKey::RateLine,
            &[from, &format_rate(outcome.conversion.rate), to],
        ),
    ];
    lines.extend(outcome.change.map(|c| rate_change_text(c, tr)));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::logic::trend::RateChange;
    use crate::state::Conversion;

    #[test]
    /// What: The printed summary matches the result panel wording.
    ///
    /// Inputs:
    /// - 10 USD → EUR at 0.92 with a 1.5% decrease.
    ///
    /// Output:
    /// - Headline, rate line, decrease message.
    fn summary_lines_match_result_panel() {
        let outcome = ConversionOutcome {
            pair: CurrencyPair::new("USD", "EUR"),
            amount: 10.0,
            conversion: Conversion {
                result: 9.2,
                rate: 0.92,
            },
            previous_rate: Some(0.934),
            change: Some(RateChange::Decreased(1.5)),
            analytics: None,
            at: NaiveDate::from_ymd_opt(2025, 1, 2)
                .and_then(|d| d.and_hms_opt(8, 0, 0))
                .expect("ts"),
        };
        let lines = summary_lines(&outcome, &Translator::english());
        assert_eq!(
            lines,
            vec![
                "10.00 USD = 9.20 EUR".to_string(),
                "1 USD = 0.9200 EUR".to_string(),
                "▼ Rate decreased by 1.50% since yesterday".to_string(),
            ]
        );
    }
}
