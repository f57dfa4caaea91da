//! The query surface the snapshot engine reads the page through.

use super::path::ElementPath;
use async_trait::async_trait;
use taskboard_browser::Result;

/// Read-only structural queries against a rendered document.
///
/// Every call resolves its path from the root again; implementations must
/// not cache results between calls. A `scope` that does not resolve is an
/// error (`ElementNotFound`), not an empty result.
#[async_trait]
pub trait BoardDocument: Send + Sync {
    /// Returns true if `path` resolves to an element.
    async fn exists(&self, path: &ElementPath) -> Result<bool>;

    /// Number of elements matching `selector` inside `scope`.
    async fn count(&self, scope: &ElementPath, selector: &str) -> Result<usize>;

    /// Text content of every `selector` match inside `scope`, in document
    /// order and untrimmed. One round-trip regardless of match count.
    async fn texts(&self, scope: &ElementPath, selector: &str) -> Result<Vec<String>>;

    /// Returns true if `path` resolves to an element that is rendered and
    /// not hidden.
    async fn is_visible(&self, path: &ElementPath) -> Result<bool>;
}
