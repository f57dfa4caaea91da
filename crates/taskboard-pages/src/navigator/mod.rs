//! Session navigator: sign-in and project selection.
//!
//! These page objects are thin. They drive the browser to a project view and
//! hand the page to the snapshot engine; navigation failures are hard errors.

mod credentials;
mod login;
mod project;
mod projects;

pub use credentials::Credentials;
pub use login::LoginPage;
pub use project::Project;
pub use projects::ProjectsPage;
