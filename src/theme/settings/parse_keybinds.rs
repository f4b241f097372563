use crate::theme::parsing::parse_key_chord;
use crate::theme::types::{KeyChord, KeyMap};

/// What: Replace an action's bindings with the chords parsed from a value.
///
/// Inputs:
/// - `value`: Comma-separated chord list, e.g. `Ctrl+C, Ctrl+Q`.
/// - `target`: Binding list to overwrite.
///
/// Output:
/// - `true` when at least one chord parsed; `target` is untouched otherwise.
///
/// Details:
/// - Duplicate chords are dropped.
fn assign_keybinds(value: &str, target: &mut Vec<KeyChord>) -> bool {
    let mut chords: Vec<KeyChord> = Vec::new();
    for chord in value.split(',').filter_map(parse_key_chord) {
        if !chords.contains(&chord) {
            chords.push(chord);
        }
    }
    if chords.is_empty() {
        return false;
    }
    *target = chords;
    true
}

/// Binding list addressed by a normalized `keybind_*` key.
fn slot<'a>(key: &str, keymap: &'a mut KeyMap) -> Option<&'a mut Vec<KeyChord>> {
    Some(match key {
        "keybind_convert" => &mut keymap.convert,
        "keybind_add_favorite" | "keybind_favorite_add" => &mut keymap.add_favorite,
        "keybind_remove_favorite" | "keybind_favorite_remove" => &mut keymap.remove_favorite,
        "keybind_toggle_theme" | "keybind_theme" => &mut keymap.toggle_theme,
        "keybind_cycle_language" | "keybind_language" => &mut keymap.cycle_language,
        "keybind_clear_history" => &mut keymap.clear_history,
        "keybind_next_tab" => &mut keymap.next_tab,
        "keybind_prev_tab" => &mut keymap.prev_tab,
        "keybind_focus_next" | "keybind_pane_next" => &mut keymap.focus_next,
        "keybind_focus_prev" | "keybind_pane_prev" => &mut keymap.focus_prev,
        "keybind_exit" | "keybind_quit" => &mut keymap.exit,
        _ => return None,
    })
}

/// What: Apply one `keybind_*` entry to the keymap.
///
/// Inputs:
/// - `key`: Normalized key (lowercase, underscores).
/// - `value`: Comment-free value.
/// - `keymap`: Keymap to update.
///
/// Output:
/// - `true` when the key names a known action, whether or not the value parsed.
pub fn apply_keybind(key: &str, value: &str, keymap: &mut KeyMap) -> bool {
    let Some(target) = slot(key, keymap) else {
        return false;
    };
    if !assign_keybinds(value, target) {
        tracing::warn!(key, value, "ignoring unparsable key binding");
    }
    true
}
