//! Chrome process ownership.
//!
//! A [`TestBrowser`] owns one Chrome process and the task that pumps its CDP
//! event stream. Pages borrow the connection; closing the browser ends the
//! pump and the process. Dropping without `close()` still kills Chrome, with
//! a warning.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Wide enough that every board column renders in one row.
const DEFAULT_WINDOW: (u32, u32) = (1920, 1080);

/// Launch options for [`TestBrowser`].
#[derive(Debug, Clone)]
pub struct TestBrowserConfig {
    /// Run without a window. Defaults to true unless the `visible` feature is on.
    pub headless: bool,

    /// Viewport size in CSS pixels.
    pub window_size: (u32, u32),

    /// Extra command-line switches passed to Chrome.
    pub args: Vec<String>,

    /// Chrome binary; `None` lets chromiumoxide search the usual locations.
    pub chrome_path: Option<PathBuf>,
}

impl TestBrowserConfig {
    /// Headless defaults suitable for CI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets headless mode explicitly, e.g. from a config file.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Shows the window. Shorthand for `headless(false)`.
    #[must_use]
    pub fn visible(self) -> Self {
        self.headless(false)
    }

    /// Overrides the viewport. Narrow viewports stack the board columns.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Appends Chrome switches.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Pins the Chrome executable.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Switches derived from this config, excluding the per-launch profile dir.
    fn switches(&self) -> Vec<String> {
        let (width, height) = self.window_size;
        let mut switches = vec![format!("--window-size={width},{height}")];
        if self.headless {
            switches.push("--headless".to_string());
        }
        switches.extend(self.args.iter().cloned());
        switches
    }

    fn build(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder();
        if !self.headless {
            builder = builder.with_head();
        }

        // Each launch gets its own profile so concurrent test binaries do not
        // fight over Chrome's singleton lock.
        let profile = std::env::temp_dir().join(format!("taskboard-browser-{}", uuid::Uuid::new_v4()));
        builder = builder
            .args(self.switches())
            .arg(format!("--user-data-dir={}", profile.display()));

        if let Some(path) = &self.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder.build().map_err(|reason| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {reason}"),
            source: None,
        })
    }
}

impl Default for TestBrowserConfig {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: DEFAULT_WINDOW,
            // CI containers usually lack user namespaces.
            args: vec![
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
        }
    }
}

/// A running Chrome instance.
///
/// ```ignore
/// let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
/// let page = browser.new_page().await?;
/// page.navigate("http://localhost:5173").await?;
/// browser.close().await?;
/// ```
pub struct TestBrowser {
    browser: Mutex<Option<Browser>>,
    events: JoinHandle<()>,
}

impl TestBrowser {
    /// Starts Chrome and the CDP event pump.
    ///
    /// # Errors
    ///
    /// `LaunchFailed` when the configuration is rejected or Chrome cannot be
    /// started (missing binary, sandbox failure).
    pub async fn launch(config: TestBrowserConfig) -> Result<Self> {
        debug!(headless = config.headless, "launching chrome");
        let (browser, mut handler) =
            Browser::launch(config.build()?)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "chrome did not start".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // No CDP command completes unless the handler stream is polled.
        let events = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!(error = %e, "cdp handler error");
                }
            }
        });

        Ok(Self {
            browser: Mutex::new(Some(browser)),
            events,
        })
    }

    /// Opens a blank tab.
    ///
    /// # Errors
    ///
    /// `AlreadyClosed` after [`close`](Self::close); `ConnectionFailed` if
    /// Chrome refuses the new target.
    pub async fn new_page(&self) -> Result<Page> {
        let guard = self.browser.lock().await;
        let browser = guard.as_ref().ok_or(BrowserError::AlreadyClosed)?;
        let tab = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        Ok(Page::new(tab))
    }

    /// Shuts Chrome down and stops the event pump.
    ///
    /// # Errors
    ///
    /// `ConnectionFailed` if Chrome does not acknowledge the close.
    pub async fn close(self) -> Result<()> {
        let browser = self.browser.lock().await.take();
        let outcome = match browser {
            Some(mut browser) => {
                debug!("closing chrome");
                let closed = browser.close().await.map(|_| ());
                let _ = browser.wait().await;
                closed.map_err(|e| BrowserError::ConnectionFailed(e.to_string()))
            }
            None => Ok(()),
        };
        self.events.abort();
        outcome
    }

    /// Whether [`close`](Self::close) has taken the process.
    pub async fn is_closed(&self) -> bool {
        self.browser.lock().await.is_none()
    }
}

impl Drop for TestBrowser {
    fn drop(&mut self) {
        // Browser's own Drop kills the child if it is still held here.
        if self.browser.try_lock().is_ok_and(|b| b.is_some()) {
            warn!("TestBrowser dropped while open; killing chrome");
        }
        self.events.abort();
    }
}
