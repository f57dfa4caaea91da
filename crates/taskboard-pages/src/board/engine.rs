//! Column discovery, card discovery and per-card field extraction.

use super::document::BoardDocument;
use super::layout::BoardLayout;
use super::model::{Card, Column, ColumnName, ExtractionFault, Field, Snapshot};
use super::path::ElementPath;
use crate::error::FieldError;
use taskboard_browser::{wait_for_result, BrowserError, WaitConfig};
use tracing::{debug, warn};

/// A card read to completion; optional fields that failed are listed.
#[derive(Debug)]
struct ExtractedCard {
    card: Card,
    field_errors: Vec<FieldError>,
}

/// Builds [`Snapshot`]s from a [`BoardDocument`].
///
/// Holds no state between refreshes; each call starts from nothing.
#[derive(Debug, Clone, Default)]
pub struct SnapshotEngine {
    layout: BoardLayout,
    wait: WaitConfig,
}

impl SnapshotEngine {
    /// Creates an engine. `wait` bounds the wait for each card title.
    #[must_use]
    pub fn new(layout: BoardLayout, wait: WaitConfig) -> Self {
        Self { layout, wait }
    }

    /// The selectors in use.
    #[must_use]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// The per-title wait ceiling.
    #[must_use]
    pub fn wait(&self) -> WaitConfig {
        self.wait
    }

    /// Captures every known column and its cards.
    ///
    /// Never fails: absent columns come back empty, and card or column
    /// query failures are recorded in [`Snapshot::faults`].
    pub async fn refresh(&self, doc: &dyn BoardDocument) -> Snapshot {
        let mut faults = Vec::new();
        let mut columns = Vec::with_capacity(ColumnName::ALL.len());

        for name in ColumnName::ALL {
            columns.push(self.read_column(doc, name, &mut faults).await);
        }

        debug!(
            cards = columns.iter().map(|c| c.items.len()).sum::<usize>(),
            faults = faults.len(),
            "board refreshed"
        );

        Snapshot { columns, faults }
    }

    async fn read_column(
        &self,
        doc: &dyn BoardDocument,
        name: ColumnName,
        faults: &mut Vec<ExtractionFault>,
    ) -> Column {
        let region = match self.locate_column(doc, name).await {
            Ok(Some(region)) => region,
            Ok(None) => {
                debug!(column = %name, "column not rendered");
                return Column::missing(name);
            }
            Err(e) => {
                warn!(column = %name, error = %e, "column lookup failed");
                faults.push(column_fault(name, &e));
                return Column::missing(name);
            }
        };

        let containers = match self.card_containers(doc, &region).await {
            Ok(containers) => containers,
            Err(e) => {
                warn!(column = %name, error = %e, "card lookup failed");
                faults.push(column_fault(name, &e));
                return Column {
                    name,
                    items: Vec::new(),
                    region: Some(region),
                };
            }
        };
        debug!(column = %name, cards = containers.len(), "reading column");

        let mut items = Vec::with_capacity(containers.len());
        for (index, container) in containers.into_iter().enumerate() {
            match self.read_card(doc, container).await {
                Ok(extracted) => {
                    for err in extracted.field_errors {
                        warn!(column = %name, card = index, "{err}");
                        faults.push(card_fault(name, index, &err, false));
                    }
                    items.push(extracted.card);
                }
                Err(err) => {
                    warn!(column = %name, card = index, "{err}; dropping card");
                    faults.push(card_fault(name, index, &err, true));
                }
            }
        }

        Column {
            name,
            items,
            region: Some(region),
        }
    }

    async fn locate_column(
        &self,
        doc: &dyn BoardDocument,
        name: ColumnName,
    ) -> taskboard_browser::Result<Option<ElementPath>> {
        let heading = ElementPath::root().with_text(&self.layout.column_heading, name.label());
        let region = heading.parent();
        Ok(doc.exists(&region).await?.then_some(region))
    }

    async fn card_containers(
        &self,
        doc: &dyn BoardDocument,
        region: &ElementPath,
    ) -> taskboard_browser::Result<Vec<ElementPath>> {
        let count = doc.count(region, &self.layout.card).await?;
        Ok((0..count).map(|i| region.nth(&self.layout.card, i)).collect())
    }

    /// Reads one card. `Err` means the title could not be read.
    async fn read_card(
        &self,
        doc: &dyn BoardDocument,
        container: ElementPath,
    ) -> Result<ExtractedCard, FieldError> {
        let title = self.read_title(doc, &container).await?;
        let mut field_errors = Vec::new();

        let description = self
            .first_text(doc, &container, Field::Description)
            .await
            .unwrap_or_else(|e| record(&mut field_errors, e));

        let tags = self
            .all_texts(doc, &container, Field::Tags)
            .await
            .unwrap_or_else(|e| record(&mut field_errors, e));

        let assignee = self
            .first_text(doc, &container, Field::Assignee)
            .await
            .unwrap_or_else(|e| record(&mut field_errors, e));

        let due_date = self
            .first_text(doc, &container, Field::DueDate)
            .await
            .unwrap_or_else(|e| record(&mut field_errors, e));

        Ok(ExtractedCard {
            card: Card {
                title,
                description,
                tags,
                assignee,
                due_date,
                source: container,
            },
            field_errors,
        })
    }

    async fn read_title(
        &self,
        doc: &dyn BoardDocument,
        container: &ElementPath,
    ) -> Result<String, FieldError> {
        let selector = self.layout.selector(Field::Title);
        let title_path = container.nth(selector, 0);

        wait_for_result(
            || doc.is_visible(&title_path),
            self.wait,
            &format!("title of {container} visible"),
        )
        .await
        .map_err(|e| FieldError::new(Field::Title, e))?;

        let texts = doc
            .texts(container, selector)
            .await
            .map_err(|e| FieldError::new(Field::Title, e))?;
        texts
            .first()
            .map(|t| t.trim().to_string())
            .ok_or_else(|| {
                FieldError::new(Field::Title, BrowserError::ElementNotFound(title_path.to_string()))
            })
    }

    /// First match's trimmed text, or empty when nothing matches.
    async fn first_text(
        &self,
        doc: &dyn BoardDocument,
        container: &ElementPath,
        field: Field,
    ) -> Result<String, FieldError> {
        let texts = doc
            .texts(container, self.layout.selector(field))
            .await
            .map_err(|e| FieldError::new(field, e))?;
        Ok(texts.first().map(|t| t.trim().to_string()).unwrap_or_default())
    }

    /// Every match's trimmed text. Matches with no text at all are skipped;
    /// whitespace-only matches are kept as empty strings.
    async fn all_texts(
        &self,
        doc: &dyn BoardDocument,
        container: &ElementPath,
        field: Field,
    ) -> Result<Vec<String>, FieldError> {
        let texts = doc
            .texts(container, self.layout.selector(field))
            .await
            .map_err(|e| FieldError::new(field, e))?;
        Ok(texts
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.trim().to_string())
            .collect())
    }
}

fn record<T: Default>(errors: &mut Vec<FieldError>, err: FieldError) -> T {
    errors.push(err);
    T::default()
}

fn column_fault(column: ColumnName, err: &BrowserError) -> ExtractionFault {
    ExtractionFault {
        column,
        card: None,
        field: None,
        message: err.to_string(),
        dropped: false,
    }
}

fn card_fault(column: ColumnName, index: usize, err: &FieldError, dropped: bool) -> ExtractionFault {
    ExtractionFault {
        column,
        card: Some(index),
        field: Some(err.field),
        message: err.source.to_string(),
        dropped,
    }
}
