//! Session-scoped state and its reducer.
//!
//! A [`SessionState`] is created when the dashboard starts and dropped on exit;
//! nothing here is persisted. Every mutation goes through [`SessionState::apply`],
//! a pure `(state, action) -> state` step, so handlers can be tested without a UI.

use chrono::NaiveDateTime;

use crate::logic::favorites::{FavoriteError, Favorites};
use crate::logic::history::ConversionHistory;
use crate::state::types::{CurrencyPair, HistoryEntry};

/// Consecutive API failures tolerated before the warning banner is shown.
pub const API_WARNING_THRESHOLD: u32 = 3;

/// Health of the outbound API as observed during this session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiHealth {
    /// Time of the last successful call.
    pub last_call: Option<NaiveDateTime>,
    /// Consecutive failures since the last success.
    pub error_count: u32,
}

impl ApiHealth {
    /// Whether the failure count is above [`API_WARNING_THRESHOLD`].
    #[must_use]
    pub const fn over_threshold(&self) -> bool {
        self.error_count > API_WARNING_THRESHOLD
    }
}

/// Mutable per-session state.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    /// Dark palette enabled.
    pub theme_dark: bool,
    /// Active locale code (e.g. `en-US`).
    pub language: String,
    /// Saved currency pairs.
    pub favorites: Favorites,
    /// Recent conversions.
    pub history: ConversionHistory,
    /// Outbound API health.
    pub api: ApiHealth,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(false, "en-US")
    }
}

/// Everything that can change a [`SessionState`].
#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// Set the dark-mode flag.
    SetDarkMode(bool),
    /// Flip the dark-mode flag.
    ToggleDarkMode,
    /// Switch the UI language.
    SetLanguage(String),
    /// Add a favorite (no-op when present).
    AddFavorite(CurrencyPair),
    /// Remove a favorite by value.
    RemoveFavorite(CurrencyPair),
    /// Remove the favorite at a list index.
    RemoveFavoriteAt(usize),
    /// Append a finished conversion to the history.
    RecordConversion(HistoryEntry),
    /// Empty the history.
    ClearHistory,
    /// An outbound call succeeded at the given time.
    ApiCallSucceeded {
        /// Time of the call.
        at: NaiveDateTime,
    },
    /// An outbound call failed.
    ApiCallFailed,
}

/// User-visible outcome of an action, rendered as a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A favorite was added.
    FavoriteAdded,
    /// A favorite was removed.
    FavoriteRemoved,
    /// The favorite to remove or use does not exist.
    FavoriteNotFound,
    /// History was cleared.
    HistoryCleared,
    /// The API failure count is above the warning threshold.
    ApiLimitReached,
}

/// Result of applying an action.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// State after the action.
    pub state: SessionState,
    /// Message for the user, if any.
    pub notice: Option<Notice>,
}

impl SessionState {
    /// What: Create a fresh session.
    ///
    /// Inputs:
    /// - `theme_dark`: Initial dark-mode flag.
    /// - `language`: Initial locale code.
    #[must_use]
    pub fn new(theme_dark: bool, language: impl Into<String>) -> Self {
        Self {
            theme_dark,
            language: language.into(),
            favorites: Favorites::default(),
            history: ConversionHistory::default(),
            api: ApiHealth::default(),
        }
    }

    /// What: Apply one action and return the next state.
    ///
    /// Inputs:
    /// - `action`: Change to apply.
    ///
    /// Output:
    /// - [`Transition`] holding the new state and an optional notice.
    ///
    /// Details:
    /// - Adding an existing favorite changes nothing and yields no notice.
    /// - Removing an absent favorite leaves state unchanged and yields `FavoriteNotFound`.
    /// - A failed API call yields `ApiLimitReached` while the counter is above the threshold.
    #[must_use]
    pub fn apply(mut self, action: SessionAction) -> Transition {
        let notice = match action {
            SessionAction::SetDarkMode(dark) => {
                self.theme_dark = dark;
                None
            }
            SessionAction::ToggleDarkMode => {
                self.theme_dark = !self.theme_dark;
                None
            }
            SessionAction::SetLanguage(lang) => {
                self.language = lang;
                None
            }
            SessionAction::AddFavorite(pair) => {
                self.favorites.add(pair).then_some(Notice::FavoriteAdded)
            }
            SessionAction::RemoveFavorite(pair) => {
                Some(removal_notice(self.favorites.remove(&pair)))
            }
            SessionAction::RemoveFavoriteAt(index) => {
                Some(removal_notice(self.favorites.remove_at(index)))
            }
            SessionAction::RecordConversion(entry) => {
                self.history.record(entry);
                None
            }
            SessionAction::ClearHistory => {
                self.history.clear();
                Some(Notice::HistoryCleared)
            }
            SessionAction::ApiCallSucceeded { at } => {
                self.api.error_count = 0;
                self.api.last_call = Some(at);
                None
            }
            SessionAction::ApiCallFailed => {
                self.api.error_count = self.api.error_count.saturating_add(1);
                self.api.over_threshold().then_some(Notice::ApiLimitReached)
            }
        };
        Transition {
            state: self,
            notice,
        }
    }

    /// What: Apply an action in place.
    ///
    /// Output:
    /// - The notice produced by [`SessionState::apply`].
    pub fn dispatch(&mut self, action: SessionAction) -> Option<Notice> {
        let Transition { state, notice } = std::mem::take(self).apply(action);
        *self = state;
        notice
    }
}

/// Map a favorites removal result onto a notice.
fn removal_notice(result: Result<CurrencyPair, FavoriteError>) -> Notice {
    match result {
        Ok(pair) => {
            tracing::debug!(pair = %pair, "favorite removed");
            Notice::FavoriteRemoved
        }
        Err(e) => {
            tracing::debug!(error = %e, "favorite removal ignored");
            Notice::FavoriteNotFound
        }
    }
}
