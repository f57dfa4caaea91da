//! Bounded polling.
//!
//! The board renders asynchronously after sign-in and after a project
//! switch, so reads are preceded by a wait: page load, a selector appearing,
//! a card title becoming visible. Every wait polls a condition until it
//! holds or a [`WaitConfig`] ceiling passes.

use crate::error::{BrowserError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Ceiling used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause between two checks of a condition.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long one wait may take and how often it re-checks.
///
/// The timeout bounds a single wait (one card title, one selector), not a
/// whole board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    /// Give up once this much time has passed since the first check.
    pub timeout: Duration,

    /// Sleep between checks.
    pub poll_interval: Duration,
}

impl WaitConfig {
    /// Builds a config from both durations.
    #[must_use]
    pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Custom ceiling, default poll interval.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }

    /// Builds a config from millisecond values, as written in config files.
    #[must_use]
    pub fn from_millis(timeout_ms: u64, poll_interval_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(timeout_ms),
            Duration::from_millis(poll_interval_ms),
        )
    }

    fn expired(&self, started: Instant) -> bool {
        started.elapsed() >= self.timeout
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Polls an infallible condition until it returns true.
///
/// The condition always runs at least once, even with a zero timeout.
///
/// # Errors
///
/// `WaitTimeout` naming `description` when the ceiling passes first.
pub async fn wait_for<F, Fut>(condition: F, config: WaitConfig, description: &str) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    wait_for_result(
        || {
            let check = condition();
            async move { Ok(check.await) }
        },
        config,
        description,
    )
    .await
}

/// Polls a fallible condition until it returns `Ok(true)`.
///
/// Errors count as "not yet" since the element may still be attaching.
/// On timeout the most recent error is folded into the condition text.
///
/// # Errors
///
/// `WaitTimeout` when the ceiling passes before `Ok(true)`.
pub async fn wait_for_result<F, Fut>(
    condition: F,
    config: WaitConfig,
    description: &str,
) -> Result<()>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let started = Instant::now();
    let mut last_error = None;

    loop {
        match condition().await {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(e) => last_error = Some(e),
        }

        if config.expired(started) {
            return Err(timeout_error(description, last_error, config.timeout));
        }
        sleep(config.poll_interval).await;
    }
}

fn timeout_error(description: &str, last_error: Option<BrowserError>, timeout: Duration) -> BrowserError {
    let condition = match last_error {
        Some(e) => format!("{description} (last error: {e})"),
        None => description.to_string(),
    };
    BrowserError::WaitTimeout { condition, timeout }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn quick() -> WaitConfig {
        WaitConfig::from_millis(40, 2)
    }

    #[tokio::test]
    async fn holds_on_first_check() {
        let checks = &AtomicU32::new(0);
        wait_for(
            || async move {
                checks.fetch_add(1, Ordering::SeqCst);
                true
            },
            quick(),
            "ready",
        )
        .await
        .unwrap();

        assert_eq!(checks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn holds_after_a_few_polls() {
        let checks = &AtomicU32::new(0);
        let result = wait_for(
            || async move { checks.fetch_add(1, Ordering::SeqCst) >= 3 },
            WaitConfig::new(Duration::from_secs(5), Duration::from_millis(1)),
            "fourth check",
        )
        .await;

        assert!(result.is_ok());
        assert_eq!(checks.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn never_holds() {
        let result = wait_for(|| async { false }, quick(), "cards rendered").await;

        match result {
            Err(BrowserError::WaitTimeout { condition, timeout }) => {
                assert_eq!(condition, "cards rendered");
                assert_eq!(timeout, Duration::from_millis(40));
            }
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn zero_timeout_checks_once() {
        let result = wait_for(|| async { true }, WaitConfig::from_millis(0, 10), "ready").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn errors_are_retried() {
        let checks = &AtomicU32::new(0);
        let result = wait_for_result(
            || async move {
                if checks.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(BrowserError::ScriptExecutionFailed("detached".into()))
                } else {
                    Ok(true)
                }
            },
            WaitConfig::new(Duration::from_secs(5), Duration::from_millis(1)),
            "flaky",
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn timeout_reports_last_error() {
        let result = wait_for_result(
            || async { Err(BrowserError::ScriptExecutionFailed("detached".into())) },
            quick(),
            "title visible",
        )
        .await;

        match result {
            Err(BrowserError::WaitTimeout { condition, .. }) => {
                assert!(condition.starts_with("title visible"));
                assert!(condition.contains("detached"));
            }
            other => panic!("expected WaitTimeout, got {other:?}"),
        }
    }

    #[test]
    fn millis_constructor() {
        let config = WaitConfig::from_millis(10_000, 100);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.poll_interval, DEFAULT_POLL_INTERVAL);
        assert_eq!(WaitConfig::with_timeout(config.timeout), config);
    }
}
