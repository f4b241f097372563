use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::sources::animation::DEFAULT_ANIMATION_URL;
use crate::sources::endpoints::DEFAULT_API_BASE;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Muted line/border color.
    pub overlay1: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for captions and hints.
    pub subtext0: Color,
    /// Accent used for focus and selection.
    pub sapphire: Color,
    /// Accent for headings.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Main series of the trend chart.
    pub chart_line: Color,
    /// Moving-average overlay and rate-decrease message.
    pub chart_average: Color,
    /// Bearish candles.
    pub chart_decrease: Color,
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// ExchangeRate-API key embedded in request paths.
    pub api_key: String,
    /// API base URL.
    pub api_base_url: String,
    /// Header animation URL.
    pub animation_url: String,
    /// Whether to download and show the header animation.
    pub show_animation: bool,
    /// Whether to build and show the analytics tabs.
    pub show_analytics: bool,
    /// Freshness window of the currency-list and previous-rate caches.
    pub cache_ttl_secs: u64,
    /// Timeout for data calls.
    pub data_timeout_secs: u64,
    /// Timeout for the animation download.
    pub animation_timeout_secs: u64,
    /// Start with the dark palette.
    pub start_dark_mode: bool,
    /// Preferred locale; empty means "detect from the environment".
    pub locale: String,
    /// Initially selected source currency.
    pub default_from: String,
    /// Initially selected target currency.
    pub default_to: String,
    /// Initial amount.
    pub default_amount: f64,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE.to_string(),
            animation_url: DEFAULT_ANIMATION_URL.to_string(),
            show_animation: true,
            show_analytics: true,
            cache_ttl_secs: 3600,
            data_timeout_secs: 10,
            animation_timeout_secs: 8,
            start_dark_mode: false,
            locale: String::new(),
            default_from: "USD".to_string(),
            default_to: "EUR".to_string(),
            default_amount: 1.0,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Chord with the Ctrl modifier.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::CONTROL,
        }
    }

    /// What: Whether a key event matches this chord.
    ///
    /// Details:
    /// - Character keys compare case-insensitively; Shift is ignored for them so
    ///   `?` and `Shift+/` layouts both match.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        match (self.code, code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b)
                    && (self.mods - KeyModifiers::SHIFT) == (mods - KeyModifiers::SHIFT)
            }
            (a, b) => a == b && self.mods == mods,
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Shift+Tab".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings. Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Run a conversion.
    pub convert: Vec<KeyChord>,
    /// Save the current pair as a favorite.
    pub add_favorite: Vec<KeyChord>,
    /// Remove the highlighted favorite.
    pub remove_favorite: Vec<KeyChord>,
    /// Switch between light and dark palettes.
    pub toggle_theme: Vec<KeyChord>,
    /// Cycle through available languages.
    pub cycle_language: Vec<KeyChord>,
    /// Empty the conversion history.
    pub clear_history: Vec<KeyChord>,
    /// Next analytics tab.
    pub next_tab: Vec<KeyChord>,
    /// Previous analytics tab.
    pub prev_tab: Vec<KeyChord>,
    /// Move focus forward.
    pub focus_next: Vec<KeyChord>,
    /// Move focus backward.
    pub focus_prev: Vec<KeyChord>,
    /// Quit.
    pub exit: Vec<KeyChord>,
}

impl KeyMap {
    /// Label of the first chord bound to an action, or an empty string.
    #[must_use]
    pub fn first_label(chords: &[KeyChord]) -> String {
        chords.first().map(KeyChord::label).unwrap_or_default()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{BackTab, Enter, F, Tab};
        Self {
            convert: vec![KeyChord::plain(Enter), KeyChord::plain(F(5))],
            add_favorite: vec![KeyChord::ctrl('f')],
            remove_favorite: vec![KeyChord::ctrl('d')],
            toggle_theme: vec![KeyChord::ctrl('t')],
            cycle_language: vec![KeyChord::ctrl('l')],
            clear_history: vec![KeyChord::ctrl('x')],
            next_tab: vec![KeyChord::ctrl('n')],
            prev_tab: vec![KeyChord::ctrl('p')],
            focus_next: vec![KeyChord::plain(Tab)],
            focus_prev: vec![KeyChord::plain(BackTab)],
            exit: vec![KeyChord::ctrl('c'), KeyChord::ctrl('q')],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chord labels and matching follow the displayed key names.
    ///
    /// Inputs:
    /// - `Ctrl+F`, `Shift+Tab`, `Enter`, and a plain `?`.
    ///
    /// Output:
    /// - Labels `Ctrl+F`, `Shift+Tab`, `Enter`; `?` matches with or without Shift.
    fn keychord_label_and_match() {
        assert_eq!(KeyChord::ctrl('f').label(), "Ctrl+F");
        assert_eq!(KeyChord::plain(KeyCode::BackTab).label(), "Shift+Tab");
        assert_eq!(KeyChord::plain(KeyCode::Enter).label(), "Enter");
        let q = KeyChord::plain(KeyCode::Char('?'));
        assert!(q.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(q.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(!KeyChord::ctrl('f').matches(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(KeyChord::ctrl('f').matches(KeyCode::Char('F'), KeyModifiers::CONTROL));
    }

    #[test]
    fn settings_defaults() {
        let s = Settings::default();
        assert_eq!(s.cache_ttl_secs, 3600);
        assert_eq!(s.data_timeout_secs, 10);
        assert_eq!(s.animation_timeout_secs, 8);
        assert_eq!((s.default_from.as_str(), s.default_to.as_str()), ("USD", "EUR"));
        assert!(s.show_analytics && s.show_animation && !s.start_dark_mode);
        assert_eq!(KeyMap::first_label(&s.keymap.add_favorite), "Ctrl+F");
    }
}
