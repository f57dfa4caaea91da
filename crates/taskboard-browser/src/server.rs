//! Where the application under test lives.
//!
//! The harness never starts the board application itself; a dev server or a
//! deployment is already running. Navigators take `&dyn AppServer` and join
//! paths onto its base URL.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// A reachable instance of the board application.
#[async_trait]
pub trait AppServer: Send + Sync {
    /// Scheme, host and port, e.g. `http://localhost:5173`.
    fn base_url(&self) -> &str;

    /// Checked before every navigation. Defaults to "always up".
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Joins `path` onto the base URL with exactly one slash between them.
    fn url(&self, path: &str) -> String {
        let base = self.base_url().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl fmt::Debug for dyn AppServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppServer")
            .field("base_url", &self.base_url())
            .finish()
    }
}

/// A fixed base URL, typically from configuration.
#[derive(Debug, Clone)]
pub struct StaticUrlServer {
    base_url: String,
}

impl StaticUrlServer {
    /// Wraps a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AppServer for StaticUrlServer {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_server_url_joining() {
        let server = StaticUrlServer::new("http://localhost:5173");
        assert_eq!(server.url("/"), "http://localhost:5173/");
        assert_eq!(server.url("/projects"), "http://localhost:5173/projects");
        assert_eq!(server.url("projects"), "http://localhost:5173/projects");

        let server_with_slash = StaticUrlServer::new("http://localhost:5173/");
        assert_eq!(server_with_slash.url("/projects"), "http://localhost:5173/projects");
    }

    #[test]
    fn static_server_is_always_healthy() {
        let server = StaticUrlServer::new("http://localhost:5173");
        assert!(tokio_test::block_on(server.health_check()).is_ok());
    }
}
