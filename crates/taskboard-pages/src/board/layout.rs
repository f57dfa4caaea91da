//! CSS selectors describing how the board renders columns and cards.

use super::model::Field;
use serde::{Deserialize, Serialize};

/// Structural patterns the engine matches against.
///
/// Defaults match the board application's current markup. Any subset can be
/// overridden from the `[layout]` table of `taskboard.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Column heading; its parent element is the column region.
    pub column_heading: String,
    /// Card container inside a column region.
    pub card: String,
    /// Card title, relative to the card container.
    pub title: String,
    /// Card description, relative to the card container.
    pub description: String,
    /// Tag chips, relative to the card container.
    pub tags: String,
    /// Text next to the assignee icon.
    pub assignee: String,
    /// Text next to the calendar icon.
    pub due_date: String,
}

impl BoardLayout {
    /// The selector used to read `field`.
    #[must_use]
    pub fn selector(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Tags => &self.tags,
            Field::Assignee => &self.assignee,
            Field::DueDate => &self.due_date,
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            column_heading: "h2".to_string(),
            card: "div.bg-white.p-4".to_string(),
            title: "h3:first-child".to_string(),
            description: "h3 + p".to_string(),
            tags: "div.flex-wrap > span".to_string(),
            assignee: "svg.lucide-user + span".to_string(),
            due_date: "svg.lucide-calendar + span".to_string(),
        }
    }
}
