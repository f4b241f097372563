//! One conversion request end to end: convert, compare with yesterday, record.

use chrono::NaiveDateTime;
use tracing::{debug, instrument};

use super::trend::{Analytics, RateChange, classify_rate_change};
use crate::sources::{ConvertError, FxService};
use crate::state::session::{SessionAction, SessionState};
use crate::state::types::{Conversion, CurrencyPair, HistoryEntry};

/// Smallest amount the converter accepts.
pub const MIN_AMOUNT: f64 = 0.01;

/// What: Parse a user-entered amount.
///
/// Output:
/// - `Some(amount)` for a finite number of at least [`MIN_AMOUNT`]; `None` otherwise.
///
/// Details:
/// - A comma is accepted as decimal separator.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a >= MIN_AMOUNT)
}

/// Everything the result panel needs after a successful conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionOutcome {
    /// Converted pair.
    pub pair: CurrencyPair,
    /// Amount requested.
    pub amount: f64,
    /// Result and rate returned by the API.
    pub conversion: Conversion,
    /// Rate on the previous day, when it could be fetched.
    pub previous_rate: Option<f64>,
    /// Direction of the rate versus the previous day.
    pub change: Option<RateChange>,
    /// Illustrative chart series; `None` when analytics are disabled.
    pub analytics: Option<Analytics>,
    /// When the conversion finished.
    pub at: NaiveDateTime,
}

/// What: Run one conversion and record it in the session history.
///
/// Inputs:
/// - `service`: Rate service (its caches may be refreshed).
/// - `session`: Session receiving the history entry and API health updates.
/// - `pair`: Currencies to convert between.
/// - `amount`: Amount of `pair.from`; must be at least [`MIN_AMOUNT`].
/// - `now`: Timestamp stored on the history entry; its date anchors "yesterday".
/// - `with_analytics`: Whether to build the chart series.
///
/// Output:
/// - [`ConversionOutcome`] on success.
///
/// # Errors
/// - `InvalidAmount` below [`MIN_AMOUNT`] (no request is made).
/// - `Api` when the conversion itself fails; nothing is recorded then.
///
/// Details:
/// - A missing previous rate only suppresses the rate-change message.
#[instrument(skip(service, session), fields(pair = %pair))]
pub async fn perform_conversion(
    service: &mut FxService,
    session: &mut SessionState,
    pair: &CurrencyPair,
    amount: f64,
    now: NaiveDateTime,
    with_analytics: bool,
) -> Result<ConversionOutcome, ConvertError> {
    if !amount.is_finite() || amount < MIN_AMOUNT {
        return Err(ConvertError::InvalidAmount(amount));
    }
    let conversion = service.convert(session, pair, amount).await?;
    let today = now.date();
    let previous_rate = service.previous_rate(session, pair, today).await;
    let change = previous_rate.and_then(|prev| classify_rate_change(conversion.rate, prev));
    debug!(?previous_rate, ?change, "rate compared with previous day");
    let analytics = with_analytics.then(|| Analytics::synthetic(&pair.from, conversion.rate, today));
    session.dispatch(SessionAction::RecordConversion(HistoryEntry::new(
        now, pair, amount, conversion,
    )));
    Ok(ConversionOutcome {
        pair: pair.clone(),
        amount,
        conversion,
        previous_rate,
        change,
        analytics,
        at: now,
    })
}
