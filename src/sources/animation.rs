//! Header animation asset (Lottie JSON), kept opaque apart from a few metadata fields.

use serde::Deserialize;
use serde_json::Value;

/// Default asset shown next to the title.
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets1.lottiefiles.com/packages/lf20_ktwnwv5m.json";

/// Top-level Lottie fields the header reads; everything else stays opaque.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
struct LottieMeta {
    /// Name.
    nm: Option<String>,
    /// Frames per second.
    fr: Option<f64>,
    /// In point (first frame).
    ip: Option<f64>,
    /// Out point (last frame).
    op: Option<f64>,
}

/// Downloaded animation document.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationAsset {
    /// Raw JSON as served.
    raw: Value,
    /// Metadata decoded from `raw`; empty when the fields are malformed.
    meta: LottieMeta,
}

impl AnimationAsset {
    /// Wrap a downloaded document.
    #[must_use]
    pub fn new(raw: Value) -> Self {
        let meta = LottieMeta::deserialize(&raw).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "animation metadata unreadable");
            LottieMeta::default()
        });
        Self { raw, meta }
    }

    /// Raw document.
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Animation name (`nm`), if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.meta
            .nm
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Frame rate (`fr`), if present and positive.
    #[must_use]
    pub fn frame_rate(&self) -> Option<f64> {
        self.meta.fr.filter(|fr| fr.is_finite() && *fr > 0.0)
    }

    /// What: Animation length in seconds, `(op - ip) / fr`.
    ///
    /// Output:
    /// - `None` when any field is missing or the length is not positive.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        let fr = self.frame_rate()?;
        let ip = self.meta.ip.unwrap_or(0.0);
        let op = self.meta.op?;
        let secs = (op - ip) / fr;
        (secs.is_finite() && secs > 0.0).then_some(secs)
    }

    /// One-line summary shown in the header, e.g. `✦ coins · 2.0s`.
    #[must_use]
    pub fn badge(&self) -> String {
        let name = self.name().unwrap_or("animation");
        self.duration_secs().map_or_else(
            || format!("✦ {name}"),
            |secs| format!("✦ {name} · {secs:.1}s"),
        )
    }
}
