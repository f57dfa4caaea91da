//! Element paths: serializable locators for board elements.
//!
//! A path is a chain of steps resolved from the document root each time it
//! is used. Nothing is cached on the page side, so a path taken during one
//! refresh stays meaningful (or cleanly fails to resolve) later.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolution step, applied to the element produced by the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// First descendant matching `selector` whose text contains `text`,
    /// compared with [`text_matches`].
    WithText {
        /// CSS selector for candidates
        selector: String,
        /// Text the candidate must contain
        text: String,
    },
    /// The parent element.
    Parent,
    /// The `index`-th descendant matching `selector`, in document order.
    Nth {
        /// CSS selector for candidates
        selector: String,
        /// Zero-based match index
        index: usize,
    },
}

/// Whether element text `content` contains `text`.
///
/// Case-insensitive, with runs of whitespace (including non-breaking
/// spaces) collapsed to one space and both ends trimmed. The page-side
/// resolver applies the same rule.
#[must_use]
pub fn text_matches(content: &str, text: &str) -> bool {
    normalize(content).contains(&normalize(text))
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A path from the document root to one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPath {
    steps: Vec<Step>,
}

impl ElementPath {
    /// The document root.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends the path to the first `selector` match containing `text`.
    #[must_use]
    pub fn with_text(&self, selector: &str, text: &str) -> Self {
        self.push(Step::WithText {
            selector: selector.to_string(),
            text: text.to_string(),
        })
    }

    /// Extends the path to the current element's parent.
    #[must_use]
    pub fn parent(&self) -> Self {
        self.push(Step::Parent)
    }

    /// Extends the path to the `index`-th `selector` match.
    #[must_use]
    pub fn nth(&self, selector: &str, index: usize) -> Self {
        self.push(Step::Nth {
            selector: selector.to_string(),
            index,
        })
    }

    /// The steps from the root, in resolution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns true for the document root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(&self, step: Step) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str(":root");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str(" >> ")?;
            }
            match step {
                Step::WithText { selector, text } => write!(f, "{selector}:has-text({text:?})")?,
                Step::Parent => f.write_str("..")?,
                Step::Nth { selector, index } => write!(f, "{selector} >> nth={index}")?,
            }
        }
        Ok(())
    }
}
