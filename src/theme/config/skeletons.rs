/// Commented `settings.conf` written on first run; every value equals the built-in default.
pub const SETTINGS_SKELETON_CONTENT: &str = "# fxdash settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments. Inline comments need a space before the '#'.\n\
#\n\
# ---------- API ----------\n\
# ExchangeRate-API key. FXDASH_API_KEY in the environment takes precedence.\n\
api_key = \n\
api_base_url = https://v6.exchangerate-api.com/v6\n\
#\n\
# Seconds before currency lists and previous-day rates are fetched again\n\
cache_ttl_secs = 3600\n\
data_timeout_secs = 10\n\
#\n\
# ---------- Display ----------\n\
show_animation = true\n\
animation_url = https://assets1.lottiefiles.com/packages/lf20_ktwnwv5m.json\n\
animation_timeout_secs = 8\n\
# Illustrative trend/candlestick/histogram charts below each result\n\
show_analytics = true\n\
start_dark_mode = false\n\
# Empty = detect from LC_ALL / LC_MESSAGES / LANG\n\
locale = \n\
#\n\
# ---------- Converter defaults ----------\n\
default_from = USD\n\
default_to = EUR\n\
default_amount = 1.0\n\
#\n\
# ---------- Key bindings ----------\n\
# Chords: Ctrl+R, Alt+X, F5, Enter, Tab, Shift+Tab. Separate alternatives with ','.\n\
keybind_convert = Enter, F5\n\
keybind_add_favorite = Ctrl+F\n\
# Removes the highlighted favorite while the list has focus, the current pair otherwise.\n\
keybind_remove_favorite = Ctrl+D\n\
keybind_toggle_theme = Ctrl+T\n\
keybind_cycle_language = Ctrl+L\n\
keybind_clear_history = Ctrl+X\n\
keybind_next_tab = Ctrl+N\n\
keybind_prev_tab = Ctrl+P\n\
keybind_focus_next = Tab\n\
keybind_focus_prev = Shift+Tab\n\
keybind_exit = Ctrl+C, Ctrl+Q\n";
