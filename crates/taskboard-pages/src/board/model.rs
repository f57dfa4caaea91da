//! Snapshot data: columns, cards and recorded faults.

use super::path::ElementPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of column labels the board can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnName {
    /// "To Do"
    #[serde(rename = "To Do")]
    ToDo,
    /// "In Progress"
    #[serde(rename = "In Progress")]
    InProgress,
    /// "Done"
    #[serde(rename = "Done")]
    Done,
    /// "Review"
    #[serde(rename = "Review")]
    Review,
}

impl ColumnName {
    /// Every known column, in snapshot order.
    pub const ALL: [ColumnName; 4] = [
        ColumnName::ToDo,
        ColumnName::InProgress,
        ColumnName::Done,
        ColumnName::Review,
    ];

    /// The heading text as rendered.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ColumnName::ToDo => "To Do",
            ColumnName::InProgress => "In Progress",
            ColumnName::Done => "Done",
            ColumnName::Review => "Review",
        }
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColumnName {
    type Err = String;

    /// Accepts the rendered label or its kebab-case form (`in-progress`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', " ");
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown column '{s}'"))
    }
}

/// A card field, as named in faults and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Required heading of the card.
    Title,
    /// Paragraph following the title.
    Description,
    /// Tag chips.
    Tags,
    /// Text next to the user icon.
    Assignee,
    /// Text next to the calendar icon.
    DueDate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Assignee => "assignee",
            Field::DueDate => "due date",
        })
    }
}

/// One card as rendered at refresh time.
///
/// Cards have no identity beyond their position in a column snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Trimmed title text.
    pub title: String,
    /// Trimmed description, empty if the card has none.
    pub description: String,
    /// Trimmed tag texts in document order.
    pub tags: Vec<String>,
    /// Assignee name, empty if not shown.
    pub assignee: String,
    /// Due date as displayed, empty if not shown.
    pub due_date: String,
    /// Path to the card container, for follow-up interaction.
    #[serde(skip)]
    pub source: ElementPath,
}

impl Card {
    /// Returns true if the card carries `tag`.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A column and the cards it held at refresh time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Column label.
    pub name: ColumnName,
    /// Cards in document order.
    pub items: Vec<Card>,
    /// Column region, `None` when the heading was not rendered.
    #[serde(skip)]
    pub region: Option<ElementPath>,
}

impl Column {
    /// A column whose heading is not on the page.
    #[must_use]
    pub fn missing(name: ColumnName) -> Self {
        Self {
            name,
            items: Vec::new(),
            region: None,
        }
    }

    /// Returns true if the column heading was found.
    ///
    /// Distinguishes "no such column" from "column with zero cards".
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.region.is_some()
    }

    /// The first card with exactly this title.
    #[must_use]
    pub fn card(&self, title: &str) -> Option<&Card> {
        self.items.iter().find(|c| c.title == title)
    }
}

/// A contained extraction failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionFault {
    /// Column being read.
    pub column: ColumnName,
    /// Card index within the column, `None` for column-level faults.
    pub card: Option<usize>,
    /// Field being read, `None` when no single field is to blame.
    pub field: Option<Field>,
    /// Rendered error.
    pub message: String,
    /// Whether the card was left out of the snapshot.
    pub dropped: bool,
}

impl fmt::Display for ExtractionFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column)?;
        if let Some(card) = self.card {
            write!(f, " card {card}")?;
        }
        if let Some(field) = self.field {
            write!(f, " {field}")?;
        }
        write!(f, ": {}", self.message)?;
        if self.dropped {
            f.write_str(" (card dropped)")?;
        }
        Ok(())
    }
}

/// Every known column with its cards, captured in one refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// One entry per [`ColumnName::ALL`], in that order.
    pub columns: Vec<Column>,
    /// Failures contained during the refresh.
    pub faults: Vec<ExtractionFault>,
}

impl Snapshot {
    /// A snapshot with every column missing, before the first refresh.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: ColumnName::ALL.into_iter().map(Column::missing).collect(),
            faults: Vec::new(),
        }
    }

    /// The column with this label.
    #[must_use]
    pub fn column(&self, name: ColumnName) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Total number of cards across all columns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }

    /// Returns true if nothing had to be contained.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.faults.is_empty()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_name_parses_label_and_kebab_case() {
        assert_eq!("To Do".parse::<ColumnName>().unwrap(), ColumnName::ToDo);
        assert_eq!("in-progress".parse::<ColumnName>().unwrap(), ColumnName::InProgress);
        assert_eq!("REVIEW".parse::<ColumnName>().unwrap(), ColumnName::Review);
        assert!("Backlog".parse::<ColumnName>().is_err());
    }

    #[test]
    fn column_name_serializes_as_label() {
        let json = serde_json::to_string(&ColumnName::InProgress).unwrap();
        assert_eq!(json, r#""In Progress""#);
    }

    #[test]
    fn empty_snapshot_has_every_column_once() {
        let snapshot = Snapshot::empty();
        let names: Vec<_> = snapshot.columns.iter().map(|c| c.name).collect();
        assert_eq!(names, ColumnName::ALL);
        assert_eq!(snapshot.card_count(), 0);
        assert!(snapshot.columns.iter().all(|c| !c.is_rendered()));
    }

    #[test]
    fn card_serialization_skips_source() {
        let card = Card {
            title: "Offline mode".into(),
            description: String::new(),
            tags: vec!["Feature".into()],
            assignee: String::new(),
            due_date: String::new(),
            source: ElementPath::root().nth("div", 0),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["tags"], serde_json::json!(["Feature"]));
        assert!(card.has_tag("Feature"));
        assert!(!card.has_tag("feature"));
    }

    #[test]
    fn fault_display() {
        let fault = ExtractionFault {
            column: ColumnName::Done,
            card: Some(1),
            field: Some(Field::Title),
            message: "timed out".into(),
            dropped: true,
        };
        assert_eq!(fault.to_string(), "Done card 1 title: timed out (card dropped)");
    }
}
