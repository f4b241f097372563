//! Shared utilities for argument processing.

/// What: Determine the log level from command-line arguments.
///
/// Output:
/// - `debug` with `--verbose`, otherwise the `--log-level` value.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// Normalize a currency code typed on the command line.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::Args;

    #[test]
    fn verbose_overrides_log_level() {
        let args = Args::try_parse_from(["fxdash", "--log-level", "warn"]).expect("parse");
        assert_eq!(determine_log_level(&args), "warn");
        let args = Args::try_parse_from(["fxdash", "--log-level", "warn", "-v"]).expect("parse");
        assert_eq!(determine_log_level(&args), "debug");
        assert_eq!(normalize_code(" eur "), "EUR");
    }
}
