//! Logging setup for the CLI.
//!
//! Level selection, highest priority first: `--verbose` (debug for taskboard
//! crates), `--quiet` (errors only), `RUST_LOG`, then info.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str =
    "taskboard_cli=debug,taskboard_pages=debug,taskboard_browser=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "taskboard_cli=info,taskboard_pages=info,taskboard_browser=warn";

/// Builds the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global tracing subscriber. Call once, before logging.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}

/// Whether stdout output should be colored.
///
/// `NO_COLOR` disables, `FORCE_COLOR` forces, otherwise the terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stdout().features().colors_supported()
}
