use crossterm::event::{KeyCode, KeyModifiers};

use super::types::KeyChord;

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "r") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the input token is unsupported.
///
/// Details:
/// - Supports function keys, navigation keys, and single printable characters.
/// - Normalizes character keys to lowercase for consistent matching.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    match t.to_ascii_uppercase().as_str() {
        "ESC" => Some(KeyCode::Esc),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "TAB" => Some(KeyCode::Tab),
        "BACKTAB" => Some(KeyCode::BackTab),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "DELETE" | "DEL" => Some(KeyCode::Delete),
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "SPACE" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = t.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                Some(KeyCode::Char(ch.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

/// What: Parse a full key chord such as "Ctrl+R" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `spec`: String combining optional modifiers with a key token.
///
/// Output:
/// - `Some(KeyChord)` when parsing succeeds; `None` otherwise.
///
/// Details:
/// - Recognizes Ctrl/Alt/Shift in any case.
/// - `Shift+Tab` becomes the dedicated `BackTab` key code with no modifiers.
pub(crate) fn parse_key_chord(spec: &str) -> Option<KeyChord> {
    let mut mods = KeyModifiers::empty();
    let mut key_part: Option<&str> = None;
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        match p.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            _ => key_part = Some(p),
        }
    }
    let key = key_part?;
    if key.eq_ignore_ascii_case("tab") && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    let code = parse_key_identifier(key)?;
    Some(KeyChord { code, mods })
}

/// What: Parse the boolean spellings accepted in `settings.conf`.
///
/// Output:
/// - `Some(true)` for true/1/yes/on, `Some(false)` for false/0/no/off, `None` otherwise.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Remove an inline `#` or `//` comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value text after the `=`.
///
/// Output:
/// - Comment-free, trimmed substring.
///
/// Details:
/// - A marker only starts a comment at the beginning of the value or after
///   whitespace, so `https://host/#frag` stays intact.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut prev_ws = true;
    for (i, &b) in bytes.iter().enumerate() {
        let starts_comment =
            b == b'#' || (b == b'/' && bytes.get(i + 1) == Some(&b'/'));
        if prev_ws && starts_comment {
            return s[..i].trim();
        }
        prev_ws = b.is_ascii_whitespace();
    }
    s.trim()
}
