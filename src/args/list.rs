//! `--list-currencies`: print the available codes, one per line.

use std::path::Path;
use std::process::ExitCode;

use crate::app::load_effective_settings;
use crate::sources::FxService;
use crate::state::SessionState;

/// What: Print the currency list and exit.
///
/// Output:
/// - Always `SUCCESS`; a failed lookup prints the built-in fallback list.
///
/// Details:
/// - A warning on stderr tells the user when the fallback was used.
pub async fn handle_list_currencies(config: Option<&Path>) -> ExitCode {
    tracing::info!("currency listing requested from CLI");
    let settings = load_effective_settings(config);
    let mut service = FxService::from_settings(&settings);
    let mut session = SessionState::default();
    let codes = service.list_currencies(&mut session).await;
    if session.api.error_count > 0 {
        eprintln!("warning: could not reach the rate API; showing the built-in list");
    }
    for code in codes {
        println!("{code}");
    }
    ExitCode::SUCCESS
}
