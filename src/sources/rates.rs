//! Exchange-rate service: conversion, currency list, and previous-day rate lookups.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::animation::AnimationAsset;
use super::cache::{StalePolicy, TtlCache, get_or_compute};
use super::endpoints::Endpoints;
use super::gateway::{ApiFailure, Gateway};
use crate::state::session::SessionState;
use crate::state::types::{Conversion, CurrencyPair};
use crate::theme::Settings;
use crate::util::f64_of;

/// Currency list used whenever the remote list is unavailable.
pub const FALLBACK_CURRENCIES: [&str; 9] = [
    "USD", "EUR", "JPY", "GBP", "AUD", "CAD", "CHF", "CNY", "INR",
];

/// Base currency used to discover available codes.
const LIST_BASE: &str = "USD";

/// Why a conversion produced no result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// Amount is not a positive finite number; no request was made.
    #[error("amount must be a positive number, got {0}")]
    InvalidAmount(f64),
    /// The API call failed or the response lacked the expected fields.
    #[error(transparent)]
    Api(#[from] ApiFailure),
}

/// Timeouts and cache behaviour of the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOptions {
    /// Timeout for rate and conversion calls.
    pub data_timeout: Duration,
    /// Timeout for the animation asset.
    pub animation_timeout: Duration,
    /// Freshness window of the currency-list and previous-rate caches.
    pub cache_ttl: Duration,
    /// What to do with expired cache entries when a refresh fails.
    pub stale_policy: StalePolicy,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            data_timeout: Duration::from_secs(10),
            animation_timeout: Duration::from_secs(8),
            cache_ttl: Duration::from_secs(3600),
            stale_policy: StalePolicy::ServeStaleOnError,
        }
    }
}

impl ServiceOptions {
    /// Derive options from user settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            data_timeout: Duration::from_secs(settings.data_timeout_secs),
            animation_timeout: Duration::from_secs(settings.animation_timeout_secs),
            cache_ttl: Duration::from_secs(settings.cache_ttl_secs),
            stale_policy: StalePolicy::ServeStaleOnError,
        }
    }
}

/// Key of the previous-rate cache: (from, to, day looked up).
type PreviousKey = (String, String, NaiveDate);

/// Client for the exchange-rate API with its read-through caches.
#[derive(Debug)]
pub struct FxService {
    /// HTTP gateway.
    gateway: Gateway,
    /// URL builder.
    endpoints: Endpoints,
    /// Animation asset URL; `None` disables the download.
    animation_url: Option<String>,
    /// Timeouts and cache policy.
    options: ServiceOptions,
    /// Cached currency list.
    currencies: TtlCache<(), Vec<String>>,
    /// Cached previous-day rates.
    previous: TtlCache<PreviousKey, f64>,
}

impl FxService {
    /// What: Build the service from user settings.
    ///
    /// Details:
    /// - The API key is masked in every logged URL.
    /// - `show_animation = false` disables the animation download.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let endpoints = Endpoints::new(&settings.api_base_url, settings.api_key.clone());
        let animation_url = settings
            .show_animation
            .then(|| settings.animation_url.clone())
            .filter(|u| !u.trim().is_empty());
        Self::new(
            Gateway::new().with_secret(settings.api_key.clone()),
            endpoints,
            animation_url,
            ServiceOptions::from_settings(settings),
        )
    }

    /// Assemble a service from explicit parts.
    #[must_use]
    pub fn new(
        gateway: Gateway,
        endpoints: Endpoints,
        animation_url: Option<String>,
        options: ServiceOptions,
    ) -> Self {
        Self {
            gateway,
            endpoints,
            animation_url,
            options,
            currencies: TtlCache::default(),
            previous: TtlCache::default(),
        }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &ServiceOptions {
        &self.options
    }

    /// What: Convert `amount` of `pair.from` into `pair.to` using the remote rate.
    ///
    /// Inputs:
    /// - `session`: Session whose API health is updated.
    /// - `pair`: Currencies to convert between.
    /// - `amount`: Positive amount.
    ///
    /// Output:
    /// - [`Conversion`] with the API's result and rate.
    ///
    /// # Errors
    /// - `InvalidAmount` for non-positive or non-finite amounts (no request is made).
    /// - `Api` when the gateway fails or `conversion_result`/`conversion_rate` is missing.
    ///
    /// Details:
    /// - Never computes locally and never caches.
    pub async fn convert(
        &self,
        session: &mut SessionState,
        pair: &CurrencyPair,
        amount: f64,
    ) -> Result<Conversion, ConvertError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConvertError::InvalidAmount(amount));
        }
        let url = self.endpoints.pair(pair, amount);
        let body = self
            .gateway
            .call(session, &url, self.options.data_timeout)
            .await?;
        let conversion = conversion_from(&body).inspect_err(|e| {
            warn!(pair = %pair, error = %e, "conversion response incomplete");
        })?;
        info!(
            pair = %pair,
            amount,
            rate = conversion.rate,
            result = conversion.result,
            "conversion completed"
        );
        Ok(conversion)
    }

    /// What: List available currency codes.
    ///
    /// Output:
    /// - Sorted, de-duplicated codes from the latest-rates endpoint, always including `USD`;
    ///   [`FALLBACK_CURRENCIES`] when the lookup fails and nothing is cached.
    ///
    /// Details:
    /// - Cached for the configured TTL; the fallback list is never cached.
    pub async fn list_currencies(&mut self, session: &mut SessionState) -> Vec<String> {
        let url = self.endpoints.latest(LIST_BASE);
        let gateway = &self.gateway;
        let timeout = self.options.data_timeout;
        let result = get_or_compute(
            &mut self.currencies,
            (),
            self.options.cache_ttl,
            Instant::now(),
            self.options.stale_policy,
            || async move {
                let body = gateway.call(session, &url, timeout).await?;
                currency_codes(&body)
            },
        )
        .await;
        match result {
            Ok(list) => {
                debug!(count = list.len(), "currency list ready");
                list
            }
            Err(e) => {
                warn!(error = %e, "using fallback currency list");
                fallback_currencies()
            }
        }
    }

    /// What: Look up the rate of `pair` on the day before `today`.
    ///
    /// Output:
    /// - `Some(rate)` when available; `None` on any failure (which only hides the
    ///   rate-change message).
    ///
    /// Details:
    /// - Cached per (from, to, day) for the configured TTL.
    pub async fn previous_rate(
        &mut self,
        session: &mut SessionState,
        pair: &CurrencyPair,
        today: NaiveDate,
    ) -> Option<f64> {
        let yesterday = today.pred_opt()?;
        let url = self.endpoints.history(&pair.from, yesterday);
        let gateway = &self.gateway;
        let timeout = self.options.data_timeout;
        let to = pair.to.clone();
        let key = (pair.from.clone(), pair.to.clone(), yesterday);
        let result = get_or_compute(
            &mut self.previous,
            key,
            self.options.cache_ttl,
            Instant::now(),
            self.options.stale_policy,
            || async move {
                let body = gateway.call(session, &url, timeout).await?;
                rate_for(&body, &to)
            },
        )
        .await;
        result
            .inspect_err(|e| debug!(pair = %pair, error = %e, "previous rate unavailable"))
            .ok()
    }

    /// What: Download the header animation.
    ///
    /// Output:
    /// - `Some(asset)` on success; `None` when disabled or on failure.
    pub async fn load_animation(&self, session: &mut SessionState) -> Option<AnimationAsset> {
        let url = self.animation_url.as_deref()?;
        self.gateway
            .call(session, url, self.options.animation_timeout)
            .await
            .ok()
            .map(AnimationAsset::new)
    }
}

/// Owned copy of [`FALLBACK_CURRENCIES`].
#[must_use]
pub fn fallback_currencies() -> Vec<String> {
    FALLBACK_CURRENCIES.iter().map(ToString::to_string).collect()
}

/// What: Extract the sorted set of codes from a latest-rates response.
///
/// # Errors
/// - `MissingField("conversion_rates")` when the mapping is absent.
fn currency_codes(body: &Value) -> Result<Vec<String>, ApiFailure> {
    let rates = body
        .get("conversion_rates")
        .and_then(Value::as_object)
        .ok_or(ApiFailure::MissingField("conversion_rates"))?;
    let mut codes: Vec<String> = rates.keys().cloned().collect();
    codes.push(LIST_BASE.to_string());
    codes.sort();
    codes.dedup();
    Ok(codes)
}

/// What: Read `conversion_rates[to]` from a rates response.
///
/// # Errors
/// - `MissingField` when the mapping or the code is absent.
fn rate_for(body: &Value, to: &str) -> Result<f64, ApiFailure> {
    body.get("conversion_rates")
        .and_then(|rates| f64_of(rates, to))
        .ok_or(ApiFailure::MissingField("conversion_rates"))
}

/// What: Read result and rate from a pair-conversion response.
///
/// # Errors
/// - `MissingField` naming the first absent or non-numeric field.
fn conversion_from(body: &Value) -> Result<Conversion, ApiFailure> {
    let result =
        f64_of(body, "conversion_result").ok_or(ApiFailure::MissingField("conversion_result"))?;
    let rate = f64_of(body, "conversion_rate").ok_or(ApiFailure::MissingField("conversion_rate"))?;
    Ok(Conversion { result, rate })
}
