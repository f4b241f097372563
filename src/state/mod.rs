//! Application state: session reducer, UI container, and shared types.

pub mod app_state;
pub mod session;
pub mod types;

pub use app_state::AppState;
pub use session::{
    API_WARNING_THRESHOLD, ApiHealth, Notice, SessionAction, SessionState, Transition,
};
pub use types::{ChartTab, Conversion, CurrencyPair, Focus, HistoryEntry, Toast, ToastKind};
