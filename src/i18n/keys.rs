//! Typed translation keys with their built-in English templates.

/// Declare [`MessageKey`] together with its dot-notation key and English template.
macro_rules! message_keys {
    ($( $(#[$doc:meta])* $variant:ident => $key:literal, $english:literal; )+) => {
        /// Every user-visible string in the dashboard.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $( $(#[$doc])* $variant, )+
        }

        impl MessageKey {
            /// All keys, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Dot-notation key used in locale files.
            #[must_use]
            pub const fn key(self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            /// Built-in English template.
            #[must_use]
            pub const fn english(self) -> &'static str {
                match self {
                    $( Self::$variant => $english, )+
                }
            }
        }
    };
}

message_keys! {
    /// Window title.
    AppTitle => "app.title", "Global Currency Converter Pro";
    /// Tagline under the title.
    AppSubtitle => "app.subtitle", "Advanced currency conversion with comprehensive analytics";
    /// `{}` = timestamp.
    LastApiCall => "app.last_api_call", "Last API call: {}";
    /// Shown before any call succeeded.
    LastApiCallNever => "app.last_api_call_never", "Last API call: never";
    /// Banner while the error counter is above the threshold.
    ApiLimit => "app.api_limit", "⚠ API rate limit reached. Using cached data.";
    /// Sidebar settings block.
    SettingsTitle => "settings.title", "Settings";
    /// `{}` = on/off.
    DarkMode => "settings.dark_mode", "Dark mode: {}";
    /// Toggle state.
    On => "settings.on", "on";
    /// Toggle state.
    Off => "settings.off", "off";
    /// `{}` = locale code.
    Language => "settings.language", "Language: {}";
    /// Favorites block title.
    FavoritesTitle => "favorites.title", "Favorites";
    /// Empty favorites list.
    FavoritesEmpty => "favorites.empty", "No favorites yet.";
    /// Caption under the list.
    FavoritesHelp => "favorites.help", "Save your frequently used currency pairs for quick access.";
    /// Hint: `{}` = key label.
    FavoritesAddHint => "favorites.add_hint", "{} add current pair";
    /// Hint: `{}` = key label.
    FavoritesRemoveHint => "favorites.remove_hint", "{} remove pair / highlighted";
    /// Hint for using a favorite.
    FavoritesUseHint => "favorites.use_hint", "Enter use selected favorite";
    /// Toast.
    FavoriteAdded => "favorites.added", "★ Added to favorites";
    /// Toast.
    FavoriteRemoved => "favorites.removed", "Removed from favorites";
    /// Toast.
    FavoriteNotFound => "favorites.not_found", "Could not remove the selected favorite";
    /// Conversion card title.
    ConverterTitle => "converter.title", "Convert";
    /// Amount field label.
    Amount => "converter.amount", "Amount";
    /// Source currency label.
    From => "converter.from", "From";
    /// Target currency label.
    To => "converter.to", "To";
    /// Hint: `{}` = key label.
    ConvertHint => "converter.convert_hint", "{} Convert Now";
    /// Busy frame.
    Converting => "converter.converting", "Converting...";
    /// `{}` = minimum amount.
    InvalidAmount => "converter.invalid_amount", "Amount must be a number of at least {}";
    /// Result panel title.
    ResultTitle => "result.title", "Final Conversion";
    /// Before the first conversion.
    ResultEmpty => "result.empty", "No conversion yet.";
    /// `{}`s = amount, from, result, to.
    ResultLine => "result.line", "{} {} = {} {}";
    /// `{}`s = from, rate, to.
    RateLine => "result.rate", "1 {} = {} {}";
    /// `{}` = percentage.
    RateIncreased => "result.rate_increased", "▲ Rate increased by {}% since yesterday";
    /// `{}` = percentage.
    RateDecreased => "result.rate_decreased", "▼ Rate decreased by {}% since yesterday";
    /// Rate unchanged.
    RateStable => "result.rate_stable", "↔ Exchange rate remained stable since yesterday";
    /// Conversion failed toast.
    FailedData => "result.failed_data", "Failed to get conversion data. Please try again.";
    /// Analytics block title.
    AnalyticsTitle => "analytics.title", "Exchange Rate Analytics";
    /// Disclaimer on every chart.
    AnalyticsIllustrative => "analytics.illustrative", "illustrative sample data";
    /// Tab.
    TabTrend => "analytics.tab_trend", "Trend Line";
    /// Tab.
    TabCandlestick => "analytics.tab_candlestick", "Candlestick";
    /// Tab.
    TabHistogram => "analytics.tab_histogram", "Histogram";
    /// Tab.
    TabComparison => "analytics.tab_comparison", "Comparison";
    /// Tab.
    TabMetrics => "analytics.tab_metrics", "Metrics";
    /// Legend.
    SeriesRate => "analytics.series_rate", "Rate";
    /// Legend.
    SeriesMovingAverage => "analytics.series_moving_average", "7-day MA";
    /// `{}`s = from, to.
    CandlesTitle => "analytics.candles_title", "Weekly Price Movements ({} to {})";
    /// `{}`s = from, to.
    HistogramTitle => "analytics.histogram_title", "Distribution of {} to {} Rates";
    /// `{}` = from.
    ComparisonTitle => "analytics.comparison_title", "1 {} in major currencies";
    /// Volatility chart title.
    VolatilityTitle => "analytics.volatility_title", "Volatility (%)";
    /// Probability block title.
    ProbabilityTitle => "analytics.probability_title", "Rate Change Probability (Next 7 Days)";
    /// Metric.
    ProbIncrease => "analytics.prob_increase", "Increase >1%";
    /// Metric.
    ProbStable => "analytics.prob_stable", "Remain Stable";
    /// Metric.
    ProbDecrease => "analytics.prob_decrease", "Decrease >1%";
    /// History table title.
    HistoryTitle => "history.title", "Conversion History";
    /// Caption.
    HistoryHelp => "history.help", "Your recent conversions in this session.";
    /// Column.
    ColTimestamp => "history.col_timestamp", "Timestamp";
    /// Column.
    ColFrom => "history.col_from", "From";
    /// Column.
    ColTo => "history.col_to", "To";
    /// Column.
    ColAmount => "history.col_amount", "Amount";
    /// Column.
    ColRate => "history.col_rate", "Rate";
    /// Column.
    ColResult => "history.col_result", "Result";
    /// Empty table cell.
    HistoryEmpty => "history.empty", "—";
    /// Toast.
    HistoryCleared => "history.cleared", "History cleared";
    /// Footer provider note.
    FooterText => "footer.text", "Exchange rates are updated in real-time using ExchangeRate-API";
    /// `{}` = timestamp.
    LastUpdated => "footer.last_updated", "Last updated: {}";
    /// Footer key hints: `{}`s = theme, language, clear, tab, quit labels.
    FooterKeys => "footer.keys", "{} theme · {} language · {} clear history · {} next chart · {} quit";
    /// Generic failure.
    ErrorOccurred => "app.error_occurred", "An error occurred";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    /// What: Dot keys are unique and every template is non-empty.
    ///
    /// Output:
    /// - As many distinct keys as variants.
    fn message_keys_unique_and_nonempty() {
        let keys: HashSet<&str> = MessageKey::ALL.iter().map(|k| k.key()).collect();
        assert_eq!(keys.len(), MessageKey::ALL.len());
        assert!(MessageKey::ALL.iter().all(|k| !k.english().is_empty()));
        assert_eq!(MessageKey::HistoryCleared.key(), "history.cleared");
    }
}
