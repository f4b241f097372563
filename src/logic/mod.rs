//! Core non-UI logic: favorites, history, rate trends, and the conversion workflow.

pub mod convert;
pub mod favorites;
pub mod history;
pub mod trend;

pub use convert::{ConversionOutcome, MIN_AMOUNT, parse_amount, perform_conversion};
pub use favorites::{FavoriteError, Favorites};
pub use history::{ConversionHistory, MAX_HISTORY_ENTRIES};
pub use trend::{Analytics, RateChange, classify_rate_change};
