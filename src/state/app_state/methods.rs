use crate::i18n::{MessageKey, Translator, next_locale, notice_message};
use crate::logic::convert::parse_amount;
use crate::logic::favorites::FavoriteError;
use crate::state::session::{Notice, SessionAction};
use crate::state::types::{CurrencyPair, Toast, ToastKind};
use crate::theme::Theme;

use super::AppState;

/// Toast severity for a session notice.
const fn notice_kind(notice: Notice) -> ToastKind {
    match notice {
        Notice::FavoriteAdded | Notice::FavoriteRemoved | Notice::HistoryCleared => {
            ToastKind::Success
        }
        Notice::FavoriteNotFound | Notice::ApiLimitReached => ToastKind::Warning,
    }
}

/// Step `idx` by `delta` within `len`, wrapping.
fn wrap_step(idx: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let step = delta.unsigned_abs() % len;
    if delta >= 0 {
        (idx + step) % len
    } else {
        (idx + len - step) % len
    }
}

impl AppState {
    /// Palette for the current dark-mode flag.
    #[must_use]
    pub const fn theme(&self) -> Theme {
        crate::theme::theme(self.session.theme_dark)
    }

    /// What: Replace the currency list and reselect `from`/`to`.
    ///
    /// Details:
    /// - Codes missing from the list fall back to index 0 (from) and 1 (to),
    ///   clamped to the list length.
    pub fn set_currencies(&mut self, currencies: Vec<String>, from: &str, to: &str) {
        self.currencies = currencies;
        self.select_codes(from, to);
    }

    /// Select `from`/`to` by code with the positional fallbacks of [`AppState::set_currencies`].
    pub fn select_codes(&mut self, from: &str, to: &str) {
        let last = self.currencies.len().saturating_sub(1);
        self.from_idx = self.index_of(from).unwrap_or(0);
        self.to_idx = self.index_of(to).unwrap_or_else(|| 1.min(last));
    }

    /// Position of `code` in the currency list.
    #[must_use]
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.currencies.iter().position(|c| c == code)
    }

    /// Selected source code.
    #[must_use]
    pub fn from_code(&self) -> &str {
        self.currencies.get(self.from_idx).map_or("USD", String::as_str)
    }

    /// Selected target code.
    #[must_use]
    pub fn to_code(&self) -> &str {
        self.currencies.get(self.to_idx).map_or("EUR", String::as_str)
    }

    /// Pair formed by the two selectors.
    #[must_use]
    pub fn current_pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.from_code(), self.to_code())
    }

    /// What: Parse the amount field.
    ///
    /// Output:
    /// - `Some(amount)` for a finite number of at least [`MIN_AMOUNT`](crate::logic::MIN_AMOUNT); `None` otherwise.
    ///
    /// Details:
    /// - A comma is accepted as decimal separator.
    #[must_use]
    pub fn parsed_amount(&self) -> Option<f64> {
        parse_amount(&self.amount_input)
    }

    /// Move the source selector.
    pub fn step_from(&mut self, delta: isize) {
        self.from_idx = wrap_step(self.from_idx, delta, self.currencies.len());
    }

    /// Move the target selector.
    pub fn step_to(&mut self, delta: isize) {
        self.to_idx = wrap_step(self.to_idx, delta, self.currencies.len());
    }

    /// Move the favorites highlight.
    pub fn step_favorite(&mut self, delta: isize) {
        let len = self.session.favorites.len();
        if len == 0 {
            self.favorites_state.select(None);
            return;
        }
        let cur = self.favorites_state.selected().unwrap_or(0).min(len - 1);
        self.favorites_state.select(Some(wrap_step(cur, delta, len)));
    }

    /// Highlighted favorite index, if it still refers to an entry.
    #[must_use]
    pub fn selected_favorite(&self) -> Option<usize> {
        self.favorites_state
            .selected()
            .filter(|i| *i < self.session.favorites.len())
    }

    /// What: Load the favorite at `index` into the selectors.
    ///
    /// # Errors
    /// - `NotFound` when `index` is out of range; selectors stay unchanged.
    pub fn apply_favorite(&mut self, index: usize) -> Result<CurrencyPair, FavoriteError> {
        let pair = self
            .session
            .favorites
            .get(index)
            .cloned()
            .ok_or_else(|| FavoriteError::NotFound(format!("#{index}")))?;
        self.select_codes(&pair.from, &pair.to);
        Ok(pair)
    }

    /// What: Apply a session action and surface its notice as a toast.
    pub fn dispatch(&mut self, action: SessionAction) -> Option<Notice> {
        let notice = self.session.dispatch(action);
        if let Some(n) = notice {
            self.toast_key(notice_message(n), notice_kind(n));
        }
        self.clamp_favorite_selection();
        notice
    }

    /// Keep the favorites highlight inside the list after a change.
    fn clamp_favorite_selection(&mut self) {
        let len = self.session.favorites.len();
        match self.favorites_state.selected() {
            _ if len == 0 => self.favorites_state.select(None),
            Some(i) if i >= len => self.favorites_state.select(Some(len - 1)),
            None => self.favorites_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// Show a translated toast.
    pub fn toast_key(&mut self, key: MessageKey, kind: ToastKind) {
        let text = self.translator.t(key);
        self.toast_text(text, kind);
    }

    /// Show a toast with prepared text.
    pub fn toast_text(&mut self, text: String, kind: ToastKind) {
        self.toast = Some(Toast { text, kind });
    }

    /// What: Switch to the next available language and reload translations.
    pub fn cycle_language(&mut self) {
        let next = next_locale(&self.locales, &self.session.language);
        self.translator = Translator::load(&next, &self.locales_dir);
        tracing::info!(locale = %next, "language changed");
        self.session.dispatch(SessionAction::SetLanguage(next));
        let label = self.translator.t_fmt1(MessageKey::Language, &self.session.language);
        self.toast_text(label, ToastKind::Info);
    }

    /// Flip dark mode.
    pub fn toggle_theme(&mut self) {
        self.session.dispatch(SessionAction::ToggleDarkMode);
        tracing::debug!(dark = self.session.theme_dark, "theme toggled");
    }

    /// Scroll the history table, clamped to its length.
    pub fn scroll_history(&mut self, delta: isize) {
        let max = self.session.history.len().saturating_sub(1);
        self.history_scroll = self
            .history_scroll
            .saturating_add_signed(delta)
            .min(max);
    }
}
