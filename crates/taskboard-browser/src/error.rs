//! Browser-level failures.
//!
//! Every variant names the step that failed (launch, navigation, a wait, a
//! script, a missing element) so a page object can wrap it without losing
//! where things went wrong.

use std::time::Duration;
use thiserror::Error;

/// Failure of a browser, page or wait operation.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Chrome could not be started: missing binary, bad flags, sandbox refusal.
    #[error("failed to launch browser: {reason}")]
    LaunchFailed {
        /// What went wrong
        reason: String,
        /// Underlying launcher error, when there is one
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The DevTools connection refused a command.
    #[error("CDP connection failed: {0}")]
    ConnectionFailed(String),

    /// A page load did not finish.
    #[error("navigation to '{url}' failed: {reason}")]
    NavigationFailed {
        /// Requested URL
        url: String,
        /// Driver message
        reason: String,
    },

    /// A polled condition did not hold before its ceiling.
    #[error("wait condition '{condition}' timed out after {timeout:?}")]
    WaitTimeout {
        /// Condition text, plus the last error seen while polling
        condition: String,
        /// Ceiling that passed
        timeout: Duration,
    },

    /// A page script threw or returned something undecodable.
    #[error("JavaScript execution failed: {0}")]
    ScriptExecutionFailed(String),

    /// An interaction or scoped query needed an element that is not there.
    #[error("no element matches '{0}'")]
    ElementNotFound(String),

    /// The browser was used after `close()`.
    #[error("browser instance is already closed")]
    AlreadyClosed,

    /// Any other chromiumoxide failure.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),
}

/// Result alias for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_timeout_names_the_condition() {
        let err = BrowserError::WaitTimeout {
            condition: "card title visible".to_string(),
            timeout: Duration::from_millis(250),
        };
        assert_eq!(
            err.to_string(),
            "wait condition 'card title visible' timed out after 250ms"
        );
    }

    #[test]
    fn element_not_found_message() {
        let err = BrowserError::ElementNotFound("button[type=\"submit\"]".to_string());
        assert_eq!(err.to_string(), "no element matches 'button[type=\"submit\"]'");
    }

    #[test]
    fn launch_failure_keeps_source() {
        use std::error::Error as _;

        let err = BrowserError::LaunchFailed {
            reason: "chrome did not start".to_string(),
            source: Some(Box::new(std::io::Error::from(std::io::ErrorKind::NotFound))),
        };
        assert_eq!(err.to_string(), "failed to launch browser: chrome did not start");
        assert!(err.source().is_some());
    }
}
