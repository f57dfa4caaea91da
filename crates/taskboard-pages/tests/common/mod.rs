//! In-memory board used to drive the snapshot engine without a browser.
//!
//! The fixture understands exactly the paths the engine builds from the
//! default [`BoardLayout`]: a heading-with-text step, a parent step, then
//! card and field selectors.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use taskboard_browser::{BrowserError, Result};
use taskboard_pages::board::{text_matches, Step};
use taskboard_pages::{BoardDocument, BoardLayout, ElementPath};

/// One rendered card. `None` means the element is not in the markup.
#[derive(Debug, Clone, Default)]
pub struct FakeCard {
    pub title: Option<String>,
    pub title_hidden: bool,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub assignee: Option<String>,
    pub due_date: Option<String>,
    /// Selectors whose reads fail for this card.
    pub broken: Vec<String>,
}

impl FakeCard {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }

    pub fn untitled() -> Self {
        Self::default()
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn assignee(mut self, name: &str) -> Self {
        self.assignee = Some(name.to_string());
        self
    }

    pub fn due(mut self, date: &str) -> Self {
        self.due_date = Some(date.to_string());
        self
    }

    pub fn hidden_title(mut self) -> Self {
        self.title_hidden = true;
        self
    }

    pub fn broken(mut self, selector: &str) -> Self {
        self.broken.push(selector.to_string());
        self
    }
}

#[derive(Debug, Clone)]
struct FakeColumn {
    heading: String,
    cards: Vec<FakeCard>,
    broken: bool,
}

/// A board document backed by plain data.
#[derive(Debug)]
pub struct FakeBoard {
    layout: BoardLayout,
    columns: RwLock<Vec<FakeColumn>>,
    queries: AtomicUsize,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self {
            layout: BoardLayout::default(),
            columns: RwLock::new(Vec::new()),
            queries: AtomicUsize::new(0),
        }
    }

    /// Adds a column section whose heading text is `heading`.
    pub fn column(self, heading: &str, cards: Vec<FakeCard>) -> Self {
        self.columns.write().unwrap().push(FakeColumn {
            heading: heading.to_string(),
            cards,
            broken: false,
        });
        self
    }

    /// Adds a column section whose card lookup fails.
    pub fn broken_column(self, heading: &str) -> Self {
        self.columns.write().unwrap().push(FakeColumn {
            heading: heading.to_string(),
            cards: Vec::new(),
            broken: true,
        });
        self
    }

    /// Appends a card to an existing column, as if the page re-rendered.
    pub fn push_card(&self, heading: &str, card: FakeCard) {
        let mut columns = self.columns.write().unwrap();
        let column = columns
            .iter_mut()
            .find(|c| c.heading == heading)
            .expect("unknown column");
        column.cards.push(card);
    }

    /// Number of queries answered so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn column_index(&self, steps: &[Step]) -> Option<usize> {
        match steps {
            [Step::WithText { selector, text }, Step::Parent, ..]
                if *selector == self.layout.column_heading =>
            {
                self.columns
                    .read()
                    .unwrap()
                    .iter()
                    .position(|c| text_matches(&c.heading, text))
            }
            _ => None,
        }
    }

    fn card(&self, steps: &[Step]) -> Option<FakeCard> {
        let column = self.column_index(steps)?;
        match steps.get(2) {
            Some(Step::Nth { selector, index }) if *selector == self.layout.card => self
                .columns
                .read()
                .unwrap()
                .get(column)?
                .cards
                .get(*index)
                .cloned(),
            _ => None,
        }
    }

    fn field_texts(&self, card: &FakeCard, selector: &str) -> Result<Vec<String>> {
        if card.broken.iter().any(|b| b == selector) {
            return Err(BrowserError::ScriptExecutionFailed(format!(
                "node for '{selector}' detached"
            )));
        }
        let layout = &self.layout;
        let texts = if selector == layout.title {
            card.title.clone().into_iter().collect()
        } else if selector == layout.description {
            card.description.clone().into_iter().collect()
        } else if selector == layout.tags {
            card.tags.clone()
        } else if selector == layout.assignee {
            card.assignee.clone().into_iter().collect()
        } else if selector == layout.due_date {
            card.due_date.clone().into_iter().collect()
        } else {
            Vec::new()
        };
        Ok(texts)
    }

    fn tick(&self) {
        self.queries.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl BoardDocument for FakeBoard {
    async fn exists(&self, path: &ElementPath) -> Result<bool> {
        self.tick();
        let steps = path.steps();
        Ok(match steps.len() {
            0 => true,
            2 => self.column_index(steps).is_some(),
            3 => self.card(steps).is_some(),
            _ => false,
        })
    }

    async fn count(&self, scope: &ElementPath, selector: &str) -> Result<usize> {
        self.tick();
        let steps = scope.steps();
        if steps.len() == 2 {
            let index = self
                .column_index(steps)
                .ok_or_else(|| BrowserError::ElementNotFound(scope.to_string()))?;
            let columns = self.columns.read().unwrap();
            let column = &columns[index];
            if column.broken {
                return Err(BrowserError::ScriptExecutionFailed("column detached".into()));
            }
            return Ok(if selector == self.layout.card {
                column.cards.len()
            } else {
                0
            });
        }
        let card = self
            .card(steps)
            .ok_or_else(|| BrowserError::ElementNotFound(scope.to_string()))?;
        Ok(self.field_texts(&card, selector)?.len())
    }

    async fn texts(&self, scope: &ElementPath, selector: &str) -> Result<Vec<String>> {
        self.tick();
        let card = self
            .card(scope.steps())
            .ok_or_else(|| BrowserError::ElementNotFound(scope.to_string()))?;
        self.field_texts(&card, selector)
    }

    async fn is_visible(&self, path: &ElementPath) -> Result<bool> {
        self.tick();
        let steps = path.steps();
        let Some(card) = self.card(steps) else {
            return Ok(false);
        };
        match steps.get(3) {
            Some(Step::Nth { selector, index: 0 }) if *selector == self.layout.title => {
                if card.broken.iter().any(|b| b == selector) {
                    return Err(BrowserError::ScriptExecutionFailed("title detached".into()));
                }
                Ok(card.title.is_some() && !card.title_hidden)
            }
            _ => Ok(false),
        }
    }
}
