//! Rate-change classification and the illustrative analytics shown under a conversion.
//!
//! Only [`classify_rate_change`] works on real data (today's rate versus
//! yesterday's). Everything built by [`Analytics::synthetic`] is derived from the
//! current rate alone and is labelled as sample data in the UI.

use chrono::{Days, NaiveDate};

/// Number of daily points in the synthetic trend.
pub const TREND_DAYS: usize = 30;
/// Window of the moving average overlay.
pub const MOVING_AVERAGE_WINDOW: usize = 7;
/// Number of bins in the rate histogram.
pub const HISTOGRAM_BINS: usize = 15;
/// Currencies used by the comparison chart, in display order.
pub const MAJOR_CURRENCIES: [&str; 5] = ["EUR", "GBP", "JPY", "AUD", "CAD"];

/// Direction of the rate since the previous day, with the absolute percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateChange {
    /// Rate went up by the given percentage.
    Increased(f64),
    /// Rate went down by the given percentage.
    Decreased(f64),
    /// Rate is exactly unchanged.
    Stable,
}

/// What: Compare the current rate with the previous one.
///
/// Inputs:
/// - `current`: Today's rate.
/// - `previous`: Yesterday's rate.
///
/// Output:
/// - `Some(RateChange)` carrying the absolute percentage; `None` when `previous` is
///   not a positive finite number.
///
/// Details:
/// - `percent = (current - previous) / previous * 100`.
/// - Only an exact zero change is `Stable`; no tolerance is applied.
#[must_use]
pub fn classify_rate_change(current: f64, previous: f64) -> Option<RateChange> {
    if !previous.is_finite() || previous <= 0.0 || !current.is_finite() {
        return None;
    }
    let pct = (current - previous) / previous * 100.0;
    Some(if pct > 0.0 {
        RateChange::Increased(pct.abs())
    } else if pct < 0.0 {
        RateChange::Decreased(pct.abs())
    } else {
        RateChange::Stable
    })
}

/// One day on the trend line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Rate for that day.
    pub rate: f64,
    /// Trailing moving average; `None` until the window is full.
    pub moving_avg: Option<f64>,
}

/// Weekly OHLC sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candle {
    /// Day the candle is anchored on.
    pub date: NaiveDate,
    /// Opening value.
    pub open: f64,
    /// Highest value.
    pub high: f64,
    /// Lowest value.
    pub low: f64,
    /// Closing value.
    pub close: f64,
}

impl Candle {
    /// Whether the candle closed at or above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// Equal-width histogram bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge (inclusive for the last bin).
    pub upper: f64,
    /// Number of samples in the bucket.
    pub count: u64,
}

/// Bar of the major-currency comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonBar {
    /// Currency code.
    pub code: &'static str,
    /// Sample rate.
    pub rate: f64,
}

/// Which change bucket a probability metric describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbabilityKind {
    /// Increase of more than 1%.
    Increase,
    /// Roughly unchanged.
    Stable,
    /// Decrease of more than 1%.
    Decrease,
}

/// Static seven-day change probability with its delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbabilityMetric {
    /// Bucket described.
    pub kind: ProbabilityKind,
    /// Probability in percent.
    pub value_pct: u8,
    /// Change versus the last estimate, in percentage points.
    pub delta_pct: i8,
}

/// Fixed change-probability panel.
pub const PROBABILITIES: [ProbabilityMetric; 3] = [
    ProbabilityMetric {
        kind: ProbabilityKind::Increase,
        value_pct: 65,
        delta_pct: 5,
    },
    ProbabilityMetric {
        kind: ProbabilityKind::Stable,
        value_pct: 25,
        delta_pct: -3,
    },
    ProbabilityMetric {
        kind: ProbabilityKind::Decrease,
        value_pct: 10,
        delta_pct: 2,
    },
];

/// Every dataset rendered by the analytics tabs.
#[derive(Clone, Debug, PartialEq)]
pub struct Analytics {
    /// 30 daily points ending today.
    pub trend: Vec<TrendPoint>,
    /// Weekly candles sampled every 7th day.
    pub candles: Vec<Candle>,
    /// Distribution of the trend rates.
    pub histogram: Vec<HistogramBin>,
    /// Sample rates against major currencies.
    pub comparison: Vec<ComparisonBar>,
    /// Estimated volatility per day.
    pub volatility: Vec<(NaiveDate, f64)>,
    /// Change probabilities for the next week.
    pub probabilities: [ProbabilityMetric; 3],
}

/// Convert a small index to `f64` without lossy casts.
fn idx_f64(i: usize) -> f64 {
    f64::from(u32::try_from(i).unwrap_or(u32::MAX))
}

impl Analytics {
    /// What: Build the sample analytics for a pair from its current rate.
    ///
    /// Inputs:
    /// - `from`: Source currency code (excluded from the comparison bars).
    /// - `current_rate`: Rate returned by the conversion.
    /// - `today`: Last day of the series.
    ///
    /// Output:
    /// - Fully populated [`Analytics`].
    ///
    /// Details:
    /// - Trend `r * (0.98 + 0.04 * i/30)`; volatility `0.5 + 0.3 * i/30`.
    /// - Candles: open `0.99p`, high `1.01p`, low `0.98p`, close `p`.
    /// - Comparison `r * (0.8 + 0.4 * k/5)` where `k` is the code's position in
    ///   [`MAJOR_CURRENCIES`].
    #[must_use]
    pub fn synthetic(from: &str, current_rate: f64, today: NaiveDate) -> Self {
        let days = idx_f64(TREND_DAYS);
        let mut trend: Vec<TrendPoint> = Vec::with_capacity(TREND_DAYS);
        let mut volatility = Vec::with_capacity(TREND_DAYS);
        for i in 0..TREND_DAYS {
            let back = u64::try_from(TREND_DAYS - 1 - i).unwrap_or(0);
            let date = today.checked_sub_days(Days::new(back)).unwrap_or(today);
            let rate = current_rate * 0.04f64.mul_add(idx_f64(i) / days, 0.98);
            trend.push(TrendPoint {
                date,
                rate,
                moving_avg: None,
            });
            volatility.push((date, 0.3f64.mul_add(idx_f64(i) / days, 0.5)));
        }
        let rates: Vec<f64> = trend.iter().map(|p| p.rate).collect();
        for (point, avg) in trend.iter_mut().zip(moving_average(&rates, MOVING_AVERAGE_WINDOW)) {
            point.moving_avg = avg;
        }

        let candles = trend
            .iter()
            .step_by(7)
            .map(|p| Candle {
                date: p.date,
                open: p.rate * 0.99,
                high: p.rate * 1.01,
                low: p.rate * 0.98,
                close: p.rate,
            })
            .collect();

        let n = idx_f64(MAJOR_CURRENCIES.len());
        let comparison = MAJOR_CURRENCIES
            .iter()
            .enumerate()
            .filter(|(_, code)| **code != from)
            .map(|(k, code)| ComparisonBar {
                code,
                rate: current_rate * 0.4f64.mul_add(idx_f64(k) / n, 0.8),
            })
            .collect();

        Self {
            histogram: histogram(&rates, HISTOGRAM_BINS),
            trend,
            candles,
            comparison,
            volatility,
            probabilities: PROBABILITIES,
        }
    }

    /// Lowest and highest value on the trend line (moving average included).
    #[must_use]
    pub fn trend_bounds(&self) -> (f64, f64) {
        self.trend
            .iter()
            .flat_map(|p| std::iter::once(p.rate).chain(p.moving_avg))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// What: Trailing moving average over a fixed window.
///
/// Inputs:
/// - `values`: Series to smooth.
/// - `window`: Window length (must be at least 1).
///
/// Output:
/// - One entry per input value; `None` until `window` values are available.
#[must_use]
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            (i + 1 >= window).then(|| {
                let slice = &values[i + 1 - window..=i];
                slice.iter().sum::<f64>() / idx_f64(window)
            })
        })
        .collect()
}

/// What: Bucket values into equal-width bins between their minimum and maximum.
///
/// Inputs:
/// - `values`: Samples.
/// - `bins`: Number of buckets (at least 1).
///
/// Output:
/// - `bins` buckets; empty when `values` is empty.
///
/// Details:
/// - The maximum sample lands in the last bin.
/// - When all samples are equal they all land in the first bin.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }
    let bins = bins.max(1);
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        });
    let width = (hi - lo) / idx_f64(bins);
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|b| HistogramBin {
            lower: width.mul_add(idx_f64(b), lo),
            upper: width.mul_add(idx_f64(b + 1), lo),
            count: 0,
        })
        .collect();
    for v in values {
        let slot = if width > 0.0 {
            // Values are within [lo, hi] so the quotient is a small non-negative number.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let idx = ((v - lo) / width).floor() as usize;
            idx.min(bins - 1)
        } else {
            0
        };
        out[slot].count += 1;
    }
    out
}
