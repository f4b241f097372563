//! Command-line argument parsing and the one-shot modes.

pub mod convert;
pub mod definition;
pub mod list;
pub mod utils;

pub use definition::{Args, process_args};
pub use utils::determine_log_level;
