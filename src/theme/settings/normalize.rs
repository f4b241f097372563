use crate::logic::convert::MIN_AMOUNT;
use crate::theme::types::Settings;

/// What: Normalize settings values parsed from configuration files.
///
/// Inputs:
/// - `settings`: Mutable reference to `Settings` to normalize in-place.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Timeouts are at least one second; a zero cache TTL is allowed (always refresh).
/// - Currency codes are trimmed and uppercased; empty codes fall back to the defaults.
/// - `default_amount` is raised to the converter minimum.
/// - Trims the API key and locale.
pub fn normalize(settings: &mut Settings) {
    let defaults = Settings::default();
    settings.data_timeout_secs = settings.data_timeout_secs.max(1);
    settings.animation_timeout_secs = settings.animation_timeout_secs.max(1);
    settings.default_from = normalize_code(&settings.default_from, &defaults.default_from);
    settings.default_to = normalize_code(&settings.default_to, &defaults.default_to);
    if !settings.default_amount.is_finite() || settings.default_amount < MIN_AMOUNT {
        settings.default_amount = MIN_AMOUNT.max(defaults.default_amount);
    }
    settings.api_key = settings.api_key.trim().to_string();
    settings.locale = settings.locale.trim().to_string();
    if settings.api_base_url.trim().is_empty() {
        settings.api_base_url = defaults.api_base_url;
    }
}

/// Uppercase a currency code, falling back when blank.
fn normalize_code(code: &str, fallback: &str) -> String {
    let c = code.trim().to_ascii_uppercase();
    if c.is_empty() { fallback.to_string() } else { c }
}
