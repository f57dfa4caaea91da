//! CLI error type with miette diagnostics.

use miette::Diagnostic;
use taskboard_browser::BrowserError;
use taskboard_pages::PageError;
use thiserror::Error;

/// Errors that end a CLI run.
///
/// Contained snapshot faults are not errors; they are printed as warnings.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Configuration, sign-in or project navigation failed.
    #[error(transparent)]
    #[diagnostic(
        code(taskboard::page),
        help("check the base URL, LOGINNAME/PASSWORD and taskboard.toml")
    )]
    Page(#[from] PageError),

    /// Chrome could not be launched or driven.
    #[error(transparent)]
    #[diagnostic(
        code(taskboard::browser),
        help("make sure Chrome or Chromium is installed and on PATH")
    )]
    Browser(#[from] BrowserError),

    /// The snapshot could not be encoded as JSON.
    #[error("failed to encode snapshot: {0}")]
    #[diagnostic(code(taskboard::output))]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
