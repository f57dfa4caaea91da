//! Error types for page objects.
//!
//! Two very different failure classes live here. [`PageError`] is a hard
//! failure of the navigator (sign-in, project switch, configuration) and is
//! returned to the caller. [`FieldError`] is a contained failure while
//! reading one card; the snapshot engine records it and moves on.

use crate::board::Field;
use crate::navigator::Project;
use taskboard_browser::BrowserError;
use thiserror::Error;

/// Hard failures surfaced by the navigator and configuration layer.
#[derive(Debug, Error)]
pub enum PageError {
    /// A browser operation failed outside of snapshot extraction.
    #[error(transparent)]
    Browser(#[from] BrowserError),

    /// Configuration or credentials could not be loaded.
    #[error("configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Signing in did not complete.
    #[error("sign-in failed: {0}")]
    SignIn(#[source] BrowserError),

    /// The project button could not be found or clicked.
    #[error("could not open project '{project}': {source}")]
    ProjectNavigation {
        /// Project that was requested
        project: Project,
        /// Underlying browser failure
        #[source]
        source: BrowserError,
    },
}

impl From<figment::Error> for PageError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// A failure reading one field of one card.
#[derive(Debug, Error)]
#[error("{field} extraction failed: {source}")]
pub struct FieldError {
    /// Field that could not be read
    pub field: Field,
    /// Underlying document error
    #[source]
    pub source: BrowserError,
}

impl FieldError {
    /// Wraps a document error with the field it happened on.
    #[must_use]
    pub fn new(field: Field, source: BrowserError) -> Self {
        Self { field, source }
    }
}

/// A specialized Result type for navigator operations.
pub type Result<T> = std::result::Result<T, PageError>;
