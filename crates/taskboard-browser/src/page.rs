//! Page-level browser operations.
//!
//! [`Page`] wraps a chromiumoxide tab and exposes what page objects need:
//! navigation, script evaluation, waiting, and form interaction. Every value
//! interpolated into a script is JSON-encoded first.

use crate::error::{BrowserError, Result};
use crate::server::AppServer;
use crate::wait::{wait_for_result, WaitConfig};
use chromiumoxide::page::Page as ChromePage;
use serde::de::DeserializeOwned;
use tracing::debug;

/// A browser tab.
///
/// Interactions (`click`, `click_with_text`, `fill`) wait for their target
/// to appear, bounded by the tab's action wait, before acting.
#[derive(Debug, Clone)]
pub struct Page {
    inner: ChromePage,
    action_wait: WaitConfig,
}

impl Page {
    /// Wraps a chromiumoxide page. Called by `TestBrowser::new_page`.
    pub(crate) fn new(page: ChromePage) -> Self {
        Self {
            inner: page,
            action_wait: WaitConfig::default(),
        }
    }

    /// Sets how long interactions wait for their target element.
    #[must_use]
    pub fn with_action_wait(mut self, wait: WaitConfig) -> Self {
        self.action_wait = wait;
        self
    }

    /// The ceiling interactions wait for their target element.
    #[must_use]
    pub fn action_wait(&self) -> WaitConfig {
        self.action_wait
    }

    /// Navigates to an absolute URL and waits for the document to load.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load or times out.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(WaitConfig::default()).await
    }

    /// Navigates to a path relative to the application's base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the health check or navigation fails.
    pub async fn navigate_to(&self, server: &dyn AppServer, path: &str) -> Result<()> {
        server.health_check().await?;
        self.navigate(&server.url(path)).await
    }

    /// Waits until `document.readyState` is `"complete"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the wait times out.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || async move {
                let state: String = self.evaluate("document.readyState").await?;
                Ok(state == "complete")
            },
            config,
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page and deserializes the result.
    ///
    /// Do not splice untrusted input into `script`; encode values with
    /// [`script_literal`] first.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be deserialized.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Waits for a CSS selector to match at least one element.
    ///
    /// # Errors
    ///
    /// Returns an error if the wait times out.
    pub async fn wait_for_selector(&self, selector: &str, config: WaitConfig) -> Result<()> {
        let script = selector_exists_script(selector)?;

        wait_for_result(
            || {
                let script = script.as_str();
                async move { self.evaluate::<bool>(script).await }
            },
            config,
            &format!("selector '{selector}'"),
        )
        .await
    }

    /// Clicks the first element matching `selector`, once it exists.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches within the action wait,
    /// or a CDP error if the click cannot be dispatched.
    pub async fn click(&self, selector: &str) -> Result<()> {
        self.await_element(selector).await?;
        let element = self
            .inner
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::ElementNotFound(selector.to_string()))?;
        element.click().await?;
        Ok(())
    }

    /// Clicks the first `tag` element whose text contains `text`.
    ///
    /// Buttons on the board are identified by their label rather than by
    /// attributes, which CSS selectors cannot express. The lookup is retried
    /// until the element shows up; the click happens at most once.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no such element appears within the
    /// action wait.
    pub async fn click_with_text(&self, tag: &str, text: &str) -> Result<()> {
        let script = click_with_text_script(tag, text)?;
        let target = format!("{tag} with text '{text}'");
        wait_for_result(
            || {
                let script = script.as_str();
                async move { self.evaluate::<bool>(script).await }
            },
            self.action_wait,
            &target,
        )
        .await
        .map_err(|e| missing_on_timeout(e, &target))
    }

    /// Replaces the value of the input matching `selector` by typing `value`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches within the action wait.
    pub async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        self.await_element(selector).await?;
        let cleared: bool = self.evaluate(&clear_input_script(selector)?).await?;
        if !cleared {
            return Err(BrowserError::ElementNotFound(selector.to_string()));
        }

        let element = self
            .inner
            .find_element(selector)
            .await
            .map_err(|_| BrowserError::ElementNotFound(selector.to_string()))?;
        element.click().await?;
        element.type_str(value).await?;
        Ok(())
    }

    /// Returns the current value of the input matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches.
    pub async fn input_value(&self, selector: &str) -> Result<String> {
        let script = format!(
            "(() => {{ const el = document.querySelector({}); return el ? [el.value] : []; }})()",
            script_literal(selector)?
        );
        let value: Vec<String> = self.evaluate(&script).await?;
        value
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::ElementNotFound(selector.to_string()))
    }

    /// Returns the current page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    /// Returns the page title.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }

    /// Takes a screenshot of the page and returns PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if screenshot capture fails.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        Ok(self
            .inner
            .screenshot(chromiumoxide::page::ScreenshotParams::default())
            .await?)
    }

    async fn await_element(&self, selector: &str) -> Result<()> {
        self.wait_for_selector(selector, self.action_wait)
            .await
            .map_err(|e| missing_on_timeout(e, selector))
    }

    /// Closes the tab.
    ///
    /// # Errors
    ///
    /// Returns an error if closing the page fails.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

/// An interaction target that never appeared is reported as missing.
fn missing_on_timeout(err: BrowserError, target: &str) -> BrowserError {
    match err {
        BrowserError::WaitTimeout { .. } => BrowserError::ElementNotFound(target.to_string()),
        other => other,
    }
}

/// Encodes a string as a JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript's, so this is safe against
/// quotes, backticks and newlines in selectors or labels.
///
/// # Errors
///
/// Returns `ScriptExecutionFailed` if encoding fails.
pub fn script_literal(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
}

fn selector_exists_script(selector: &str) -> Result<String> {
    Ok(format!("!!document.querySelector({})", script_literal(selector)?))
}

fn click_with_text_script(tag: &str, text: &str) -> Result<String> {
    Ok(format!(
        "(() => {{ \
           const el = Array.from(document.querySelectorAll({tag})) \
             .find(n => (n.textContent || '').includes({text})); \
           if (!el) return false; \
           el.click(); \
           return true; \
         }})()",
        tag = script_literal(tag)?,
        text = script_literal(text)?,
    ))
}

fn clear_input_script(selector: &str) -> Result<String> {
    // Goes through the prototype setter so framework-controlled inputs
    // observe the change.
    Ok(format!(
        "(() => {{ \
           const el = document.querySelector({}); \
           if (!el) return false; \
           const setter = Object.getOwnPropertyDescriptor(Object.getPrototypeOf(el), 'value').set; \
           setter.call(el, ''); \
           el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
           return true; \
         }})()",
        script_literal(selector)?
    ))
}
