//! Remote data retrieval split into submodules: HTTP gateway, caching, and the rate service.

pub mod animation;
pub mod cache;
pub mod endpoints;
pub mod gateway;
pub mod rates;

pub use animation::AnimationAsset;
pub use cache::{CacheStore, Lookup, StalePolicy, TtlCache, get_or_compute};
pub use endpoints::{DEFAULT_API_BASE, Endpoints};
pub use gateway::{ApiFailure, Gateway};
pub use rates::{ConvertError, FALLBACK_CURRENCIES, FxService, ServiceOptions, fallback_currencies};
