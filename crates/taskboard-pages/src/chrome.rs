//! [`BoardDocument`] for a live browser page.
//!
//! Each query evaluates one script: the element path is embedded as JSON
//! and resolved by [`RESOLVE_PATH`] before the query body runs. Scripts only
//! read the DOM. Queries scoped to a path return a one-element array when the
//! path resolves and an empty array when it does not, since CDP reports a
//! `null` result as having no value.

use crate::board::{BoardDocument, ElementPath};
use async_trait::async_trait;
use taskboard_browser::page::script_literal;
use taskboard_browser::{BrowserError, Page, Result};

/// Resolves a serialized [`ElementPath`] to an element, or `null`.
///
/// Text steps compare like [`text_matches`](crate::board::text_matches).
const RESOLVE_PATH: &str = r"(steps) => {
  const norm = (s) => s.replace(/\s+/g, ' ').trim().toLowerCase();
  let el = document;
  for (const step of steps) {
    if (!el) return null;
    switch (step.kind) {
      case 'with_text':
        el = Array.from(el.querySelectorAll(step.selector))
          .find((n) => norm(n.textContent || '').includes(norm(step.text))) || null;
        break;
      case 'parent':
        el = el.parentElement;
        break;
      case 'nth':
        el = el.querySelectorAll(step.selector)[step.index] || null;
        break;
      default:
        throw new Error('unknown path step: ' + step.kind);
    }
  }
  return el;
}";

/// Wraps `body` so it runs with `el` bound to the resolved path.
fn path_script(path: &ElementPath, body: &str) -> Result<String> {
    let steps = serde_json::to_string(path.steps())
        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;
    Ok(format!(
        "(() => {{ const el = ({RESOLVE_PATH})({steps}); {body} }})()"
    ))
}

fn exists_script(path: &ElementPath) -> Result<String> {
    path_script(path, "return el !== null;")
}

fn count_script(scope: &ElementPath, selector: &str) -> Result<String> {
    let selector = script_literal(selector)?;
    path_script(
        scope,
        &format!("return el ? [el.querySelectorAll({selector}).length] : [];"),
    )
}

fn texts_script(scope: &ElementPath, selector: &str) -> Result<String> {
    let selector = script_literal(selector)?;
    path_script(
        scope,
        &format!(
            "return el ? [Array.from(el.querySelectorAll({selector}), (n) => n.textContent || '')] : [];"
        ),
    )
}

fn visible_script(path: &ElementPath) -> Result<String> {
    path_script(
        path,
        "if (!(el instanceof Element)) return false; \
         const style = getComputedStyle(el); \
         if (style.visibility === 'hidden' || style.display === 'none') return false; \
         return !!(el.offsetWidth || el.offsetHeight || el.getClientRects().length);",
    )
}

#[async_trait]
impl BoardDocument for Page {
    async fn exists(&self, path: &ElementPath) -> Result<bool> {
        self.evaluate(&exists_script(path)?).await
    }

    async fn count(&self, scope: &ElementPath, selector: &str) -> Result<usize> {
        let count: Vec<usize> = self.evaluate(&count_script(scope, selector)?).await?;
        count
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::ElementNotFound(scope.to_string()))
    }

    async fn texts(&self, scope: &ElementPath, selector: &str) -> Result<Vec<String>> {
        let texts: Vec<Vec<String>> = self.evaluate(&texts_script(scope, selector)?).await?;
        texts
            .into_iter()
            .next()
            .ok_or_else(|| BrowserError::ElementNotFound(scope.to_string()))
    }

    async fn is_visible(&self, path: &ElementPath) -> Result<bool> {
        self.evaluate(&visible_script(path)?).await
    }
}
