//! Board snapshot engine.
//!
//! Reconciles the rendered board against an in-memory [`Snapshot`]:
//!
//! 1. Each known [`ColumnName`] is located independently by its heading.
//! 2. Card containers inside each column are counted fresh on every refresh.
//! 3. Every card's fields are read with independent queries; a failure is
//!    recorded as an [`ExtractionFault`] and never leaves the card.
//!
//! The engine talks to the page only through [`BoardDocument`], so it runs
//! the same against Chrome and against in-memory fixtures.

mod document;
mod engine;
mod layout;
mod model;
mod path;

pub use document::BoardDocument;
pub use engine::SnapshotEngine;
pub use layout::BoardLayout;
pub use model::{Card, Column, ColumnName, ExtractionFault, Field, Snapshot};
pub use path::{text_matches, ElementPath, Step};
