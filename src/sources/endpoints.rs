//! URL construction for the ExchangeRate-API v6 endpoints.

use chrono::NaiveDate;

use crate::state::types::CurrencyPair;

/// Default API base.
pub const DEFAULT_API_BASE: &str = "https://v6.exchangerate-api.com/v6";

/// Base URL plus credential; the key is embedded in every path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    /// Base without trailing slash.
    base_url: String,
    /// API key.
    api_key: String,
}

impl Endpoints {
    /// Build endpoints for `base_url` (trailing slashes ignored) and `api_key`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// API key in use.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Latest rates for `base`: `{base_url}/{key}/latest/{base}`.
    #[must_use]
    pub fn latest(&self, base: &str) -> String {
        format!("{}/{}/latest/{base}", self.base_url, self.api_key)
    }

    /// Historical rates for `base` on `date`: `{base_url}/{key}/history/{base}/{YYYY-MM-DD}`.
    #[must_use]
    pub fn history(&self, base: &str, date: NaiveDate) -> String {
        format!(
            "{}/{}/history/{base}/{}",
            self.base_url,
            self.api_key,
            date.format("%Y-%m-%d")
        )
    }

    /// Pair conversion: `{base_url}/{key}/pair/{from}/{to}/{amount}`.
    #[must_use]
    pub fn pair(&self, pair: &CurrencyPair, amount: f64) -> String {
        format!(
            "{}/{}/pair/{}/{}/{amount}",
            self.base_url, self.api_key, pair.from, pair.to
        )
    }
}
