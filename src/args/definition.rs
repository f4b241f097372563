//! Command-line argument definition and processing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::app::RunOptions;

/// fxdash - live currency conversion with favorites, history and rate analytics
#[derive(Parser, Debug)]
#[command(name = "fxdash")]
#[command(version)]
#[command(about = "A terminal dashboard for live currency conversion", long_about = None)]
pub struct Args {
    /// Read settings from this file instead of ~/.config/fxdash/settings.conf
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Convert once, print the result and exit (e.g., fxdash --convert 10 USD EUR)
    #[arg(long, num_args = 3, value_names = ["AMOUNT", "FROM", "TO"])]
    pub convert: Option<Vec<String>>,

    /// Print the available currency codes and exit
    #[arg(long)]
    pub list_currencies: bool,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,
}

impl Args {
    /// Whether a one-shot mode was requested instead of the dashboard.
    #[must_use]
    pub const fn is_one_shot(&self) -> bool {
        self.convert.is_some() || self.list_currencies
    }

    /// Options for the interactive dashboard.
    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            config: self.config.clone(),
            dark: self.dark,
        }
    }
}

/// What: Run a one-shot mode when one was requested.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Some(code)` after a one-shot mode ran; `None` to start the dashboard.
///
/// Details:
/// - `--convert` takes precedence over `--list-currencies`.
pub async fn process_args(args: &Args) -> Option<ExitCode> {
    let config = args.config.as_deref();
    if let Some(values) = &args.convert
        && let [amount, from, to] = values.as_slice()
    {
        return Some(super::convert::handle_convert(amount, from, to, config).await);
    }
    if args.list_currencies {
        return Some(super::list::handle_list_currencies(config).await);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse into the expected fields.
    ///
    /// Inputs:
    /// - `--convert 10 usd EUR --dark --config /tmp/s.conf -v`.
    ///
    /// Output:
    /// - Three convert values, dark mode, config path, verbose set.
    fn args_parse_convert_and_flags() {
        let args = Args::try_parse_from([
            "fxdash",
            "--convert",
            "10",
            "usd",
            "EUR",
            "--dark",
            "--config",
            "/tmp/s.conf",
            "-v",
        ])
        .expect("parse");
        assert_eq!(
            args.convert.as_deref(),
            Some(&["10".to_string(), "usd".to_string(), "EUR".to_string()][..])
        );
        assert!(args.dark && args.verbose && !args.list_currencies);
        assert_eq!(args.log_level, "info");
        let opts = args.run_options();
        assert_eq!(opts.config.as_deref(), Some(std::path::Path::new("/tmp/s.conf")));
        assert!(opts.dark);
    }

    #[test]
    fn args_convert_requires_three_values() {
        assert!(Args::try_parse_from(["fxdash", "--convert", "10", "USD"]).is_err());
        let plain = Args::try_parse_from(["fxdash"]).expect("parse");
        assert!(plain.convert.is_none());
        assert!(!plain.is_one_shot());
        let list = Args::try_parse_from(["fxdash", "--list-currencies"]).expect("parse");
        assert!(list.is_one_shot());
    }
}
