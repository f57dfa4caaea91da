use super::credentials::Credentials;
use super::projects::ProjectsPage;
use crate::board::SnapshotEngine;
use crate::error::{PageError, Result};
use taskboard_browser::{AppServer, Page};
use tracing::{debug, info};

/// Username input on the sign-in form.
pub const USERNAME_FIELD: &str = r#"input[id="username"]"#;

/// Password input on the sign-in form.
pub const PASSWORD_FIELD: &str = r#"input[id="password"]"#;

/// Submit button on the sign-in form.
pub const SIGN_IN_BUTTON: &str = r#"button[type="submit"]"#;

/// The application's sign-in page.
#[derive(Debug, Clone)]
pub struct LoginPage {
    page: Page,
    engine: SnapshotEngine,
}

impl LoginPage {
    /// Wraps `page`. `engine` is handed on to the projects page after sign-in.
    ///
    /// Form interactions wait up to the engine's wait ceiling for their
    /// control to render.
    #[must_use]
    pub fn new(page: Page, engine: SnapshotEngine) -> Self {
        let page = page.with_action_wait(engine.wait());
        Self { page, engine }
    }

    /// The underlying browser page.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Opens the application root, where the sign-in form lives.
    ///
    /// # Errors
    ///
    /// Returns an error if navigation fails.
    pub async fn go_to_login(&self, server: &dyn AppServer) -> Result<()> {
        debug!(base_url = server.base_url(), "opening sign-in page");
        self.page.navigate_to(server, "/").await?;
        Ok(())
    }

    /// Fills the form, submits it and returns the projects page.
    ///
    /// # Errors
    ///
    /// Returns `SignIn` if a form control is missing or cannot be used.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<ProjectsPage> {
        self.page
            .fill(USERNAME_FIELD, credentials.username())
            .await
            .map_err(PageError::SignIn)?;
        self.page
            .fill(PASSWORD_FIELD, credentials.password())
            .await
            .map_err(PageError::SignIn)?;
        self.page
            .click(SIGN_IN_BUTTON)
            .await
            .map_err(PageError::SignIn)?;

        info!(username = credentials.username(), "signed in");
        Ok(ProjectsPage::new(self.page.clone(), self.engine.clone()))
    }
}
