use super::project::Project;
use crate::board::{Column, ColumnName, Snapshot, SnapshotEngine};
use crate::error::{PageError, Result};
use taskboard_browser::Page;
use tracing::{info, warn};

/// Label of the sign-out button.
pub const LOGOUT_LABEL: &str = "Logout";

/// The board view after sign-in.
///
/// Holds the most recent [`Snapshot`]; every refresh replaces it wholesale.
#[derive(Debug, Clone)]
pub struct ProjectsPage {
    page: Page,
    engine: SnapshotEngine,
    snapshot: Snapshot,
}

impl ProjectsPage {
    /// Wraps a signed-in page. The snapshot starts with every column empty.
    ///
    /// Project and logout buttons are waited for up to the engine's wait
    /// ceiling, since the board renders after the sign-in round-trip.
    #[must_use]
    pub fn new(page: Page, engine: SnapshotEngine) -> Self {
        Self {
            page: page.with_action_wait(engine.wait()),
            engine,
            snapshot: Snapshot::empty(),
        }
    }

    /// The underlying browser page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Opens `project` and refreshes the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNavigation` if the project button does not appear
    /// within the wait ceiling.
    pub async fn go_to_project(&mut self, project: Project) -> Result<&Snapshot> {
        self.page
            .click_with_text("button", project.label())
            .await
            .map_err(|source| PageError::ProjectNavigation { project, source })?;
        info!(%project, "opened project");

        Ok(self.update_columns().await)
    }

    /// Re-reads the board and replaces the held snapshot.
    pub async fn update_columns(&mut self) -> &Snapshot {
        self.snapshot = self.engine.refresh(&self.page).await;

        if !self.snapshot.is_clean() {
            warn!(
                faults = self.snapshot.faults.len(),
                "board refreshed with contained failures"
            );
        }
        &self.snapshot
    }

    /// The snapshot from the last refresh.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Columns from the last refresh, in known-label order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.snapshot.columns
    }

    /// One column from the last refresh.
    #[must_use]
    pub fn column(&self, name: ColumnName) -> Option<&Column> {
        self.snapshot.column(name)
    }

    /// Signs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the logout button is missing.
    pub async fn logout(&self) -> Result<()> {
        self.page.click_with_text("button", LOGOUT_LABEL).await?;
        Ok(())
    }
}
