//! Central `AppState` container: session state plus everything the UI needs.

use std::path::PathBuf;

use ratatui::widgets::ListState;

use crate::i18n::Translator;
use crate::logic::convert::ConversionOutcome;
use crate::sources::animation::AnimationAsset;
use crate::sources::rates::fallback_currencies;
use crate::state::session::SessionState;
use crate::state::types::{ChartTab, Focus, Toast};
use crate::theme::{KeyMap, Settings};

mod methods;
#[cfg(test)]
mod tests;

/// Global application state shared by the event and UI layers.
///
/// Owned by the runtime loop; handlers mutate it synchronously between frames.
#[derive(Debug)]
pub struct AppState {
    /// Session-scoped data (theme, language, favorites, history, API health).
    pub session: SessionState,
    /// Active translations.
    pub translator: Translator,
    /// Selectable locales, default first.
    pub locales: Vec<String>,
    /// Directory locale files are read from.
    pub locales_dir: PathBuf,
    /// Key bindings.
    pub keymap: KeyMap,
    /// Whether conversions build the analytics tabs.
    pub show_analytics: bool,
    /// Available currency codes, sorted.
    pub currencies: Vec<String>,
    /// Index of the source currency in `currencies`.
    pub from_idx: usize,
    /// Index of the target currency in `currencies`.
    pub to_idx: usize,
    /// Raw amount text as typed.
    pub amount_input: String,
    /// Panel receiving key input.
    pub focus: Focus,
    /// Selection in the favorites list.
    pub favorites_state: ListState,
    /// First visible history row.
    pub history_scroll: usize,
    /// Analytics tab shown.
    pub chart_tab: ChartTab,
    /// Most recent successful conversion.
    pub last_outcome: Option<ConversionOutcome>,
    /// Footer message shown until the next key press.
    pub toast: Option<Toast>,
    /// Header animation, when downloaded.
    pub animation: Option<AnimationAsset>,
    /// A blocking request is in flight.
    pub busy: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            &Settings::default(),
            SessionState::default(),
            Translator::english(),
            vec![crate::i18n::DEFAULT_LOCALE.to_string()],
            PathBuf::new(),
        )
    }
}

impl AppState {
    /// What: Build the initial application state.
    ///
    /// Inputs:
    /// - `settings`: Converter defaults, keymap, and feature toggles.
    /// - `session`: Fresh session state.
    /// - `translator`: Translator for the session language.
    /// - `locales`: Selectable locales.
    /// - `locales_dir`: Where locale files live.
    ///
    /// Details:
    /// - Starts with the fallback currency list; the runtime replaces it once the
    ///   remote list is loaded.
    #[must_use]
    pub fn new(
        settings: &Settings,
        session: SessionState,
        translator: Translator,
        locales: Vec<String>,
        locales_dir: PathBuf,
    ) -> Self {
        let mut app = Self {
            session,
            translator,
            locales,
            locales_dir,
            keymap: settings.keymap.clone(),
            show_analytics: settings.show_analytics,
            currencies: Vec::new(),
            from_idx: 0,
            to_idx: 0,
            amount_input: format_amount_input(settings.default_amount),
            focus: Focus::default(),
            favorites_state: ListState::default(),
            history_scroll: 0,
            chart_tab: ChartTab::default(),
            last_outcome: None,
            toast: None,
            animation: None,
            busy: false,
        };
        app.set_currencies(
            fallback_currencies(),
            &settings.default_from,
            &settings.default_to,
        );
        app
    }
}

/// Render a default amount without a trailing `.0` for whole numbers.
fn format_amount_input(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{amount:.0}")
    } else {
        amount.to_string()
    }
}
