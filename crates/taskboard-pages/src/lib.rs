//! # taskboard-pages
//!
//! Page objects for the task board application and the snapshot engine that
//! turns its rendered board into structured data.
//!
//! ## Architecture
//!
//! - **board**: The snapshot engine. Given any [`board::BoardDocument`] it
//!   discovers the known columns, enumerates their cards and extracts each
//!   card's fields, containing failures to the card that caused them.
//! - **navigator**: `LoginPage` and `ProjectsPage`, the thin glue that signs
//!   in and switches projects before handing the page to the engine.
//! - **chrome**: `BoardDocument` for a live `taskboard_browser::Page`.
//! - **config**: `HarnessConfig`, layered from defaults, `taskboard.toml`
//!   and `TASKBOARD_*` environment variables.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_browser::{StaticUrlServer, TestBrowser, TestBrowserConfig};
//! use taskboard_pages::{ColumnName, Credentials, HarnessConfig, LoginPage, Project};
//!
//! let config = HarnessConfig::load(None)?;
//! let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
//! let page = browser.new_page().await?;
//!
//! let login = LoginPage::new(page, config.engine());
//! login.go_to_login(&StaticUrlServer::new(&config.base_url)).await?;
//! let mut projects = login.sign_in(&Credentials::from_env()).await?;
//!
//! projects.go_to_project(Project::WebApplication).await?;
//! let todo = projects.column(ColumnName::ToDo).unwrap();
//! assert!(todo.card("Implement user authentication").is_some());
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod chrome;
pub mod config;
pub mod error;
pub mod navigator;

pub use board::{
    BoardDocument, BoardLayout, Card, Column, ColumnName, ElementPath, ExtractionFault, Field,
    Snapshot, SnapshotEngine,
};
pub use config::{HarnessConfig, WaitSettings};
pub use error::{FieldError, PageError, Result};
pub use navigator::{Credentials, LoginPage, Project, ProjectsPage};
