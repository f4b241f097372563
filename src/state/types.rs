//! Value types shared by the session store, services, and UI.

use std::fmt;

use chrono::NaiveDateTime;

use crate::util::{round_to, truncate_to_seconds};

/// Ordered pair of currency codes.
///
/// Equality is structural, so two pairs built from the same codes are the
/// same favorite.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurrencyPair {
    /// Source currency code (e.g. `USD`).
    pub from: String,
    /// Target currency code (e.g. `EUR`).
    pub to: String,
}

impl CurrencyPair {
    /// Build a pair from two currency codes.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Display label used by the favorites list, `"{from} → {to}"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.from, self.to)
    }
}

/// Result of a successful remote conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Conversion {
    /// Converted amount as reported by the API.
    pub result: f64,
    /// Exchange rate (1 `from` in `to`) as reported by the API.
    pub rate: f64,
}

/// One past conversion. Fields are private so an entry cannot change once recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// When the conversion was recorded (second precision).
    timestamp: NaiveDateTime,
    /// Source currency code.
    from: String,
    /// Target currency code.
    to: String,
    /// Amount that was converted.
    amount: f64,
    /// Rate reported by the API.
    rate: f64,
    /// Converted amount rounded to 4 decimal places.
    result: f64,
}

impl HistoryEntry {
    /// What: Create a history entry from a finished conversion.
    ///
    /// Inputs:
    /// - `timestamp`: Time of the conversion; sub-second precision is dropped.
    /// - `pair`: Currency pair that was converted.
    /// - `amount`: Input amount.
    /// - `conversion`: Result and rate returned by the API.
    ///
    /// Output:
    /// - Immutable entry with `result` rounded to 4 decimal places.
    #[must_use]
    pub fn new(
        timestamp: NaiveDateTime,
        pair: &CurrencyPair,
        amount: f64,
        conversion: Conversion,
    ) -> Self {
        Self {
            timestamp: truncate_to_seconds(timestamp),
            from: pair.from.clone(),
            to: pair.to.clone(),
            amount,
            rate: conversion.rate,
            result: round_to(conversion.result, 4),
        }
    }

    /// Time of the conversion.
    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Source currency code.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Target currency code.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Converted amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Exchange rate used.
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Result rounded to 4 decimal places.
    #[must_use]
    pub const fn result(&self) -> f64 {
        self.result
    }

    /// The pair this entry converted.
    #[must_use]
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from.clone(), self.to.clone())
    }
}

/// Which panel currently receives key input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// Amount text input.
    #[default]
    Amount,
    /// Source currency selector.
    From,
    /// Target currency selector.
    To,
    /// Favorites list in the sidebar.
    Favorites,
    /// Conversion history table.
    History,
}

impl Focus {
    /// Next panel in tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Amount => Self::From,
            Self::From => Self::To,
            Self::To => Self::Favorites,
            Self::Favorites => Self::History,
            Self::History => Self::Amount,
        }
    }

    /// Previous panel in tab order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Amount => Self::History,
            Self::From => Self::Amount,
            Self::To => Self::From,
            Self::Favorites => Self::To,
            Self::History => Self::Favorites,
        }
    }
}

/// Analytics tab shown below the conversion result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartTab {
    /// 30-day line with 7-day moving average.
    #[default]
    Trend,
    /// Weekly candles.
    Candlestick,
    /// Rate distribution.
    Histogram,
    /// Comparison with major currencies.
    Comparison,
    /// Volatility and change probabilities.
    Metrics,
}

impl ChartTab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::Trend,
        Self::Candlestick,
        Self::Histogram,
        Self::Comparison,
        Self::Metrics,
    ];

    /// Position of the tab in [`ChartTab::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab to the right, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Tab to the left, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Severity of a transient footer message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Action completed.
    Success,
    /// Informational message.
    Info,
    /// Non-fatal problem.
    Warning,
    /// Operation failed.
    Error,
}

/// Transient message shown in the footer until the next action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Localized text.
    pub text: String,
    /// Severity used for coloring.
    pub kind: ToastKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: History entries drop sub-second precision and round the result.
    ///
    /// Inputs:
    /// - Timestamp with nanoseconds and a result with 6 decimals.
    ///
    /// Output:
    /// - Stored timestamp has no nanoseconds, result has 4 decimals.
    fn history_entry_rounds_result_and_truncates_time() {
        let ts = chrono::NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|d| d.and_hms_milli_opt(3, 4, 5, 678))
            .expect("valid date");
        let pair = CurrencyPair::new("USD", "EUR");
        let e = HistoryEntry::new(
            ts,
            &pair,
            10.0,
            Conversion {
                result: 9.234_567,
                rate: 0.923_456_7,
            },
        );
        assert!((e.result() - 9.2346).abs() < 1e-12);
        assert_eq!(e.timestamp().and_utc().timestamp_subsec_nanos(), 0);
        assert_eq!(e.pair(), pair);
        assert_eq!(e.from(), "USD");
        assert_eq!(e.to(), "EUR");
    }

    #[test]
    fn currency_pair_label_uses_arrow() {
        assert_eq!(CurrencyPair::new("GBP", "JPY").label(), "GBP → JPY");
        assert_eq!(CurrencyPair::new("GBP", "JPY").to_string(), "GBP → JPY");
    }

    #[test]
    fn focus_and_tabs_cycle_both_ways() {
        let mut f = Focus::Amount;
        for _ in 0..5 {
            f = f.next();
        }
        assert_eq!(f, Focus::Amount);
        assert_eq!(Focus::Amount.prev(), Focus::History);
        assert_eq!(ChartTab::Metrics.next(), ChartTab::Trend);
        assert_eq!(ChartTab::Trend.prev(), ChartTab::Metrics);
    }
}
