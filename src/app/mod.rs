//! Application runtime: terminal lifecycle, event plumbing, and the main loop.

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{HEADLESS_ENV, RunOptions, load_effective_settings, run};
