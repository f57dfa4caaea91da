//! # taskboard-browser
//!
//! Chrome plumbing for the task board harness, on top of chromiumoxide.
//!
//! [`TestBrowser`] owns a Chrome process. [`Page`] is one tab: it navigates,
//! evaluates scripts, fills and clicks form controls, and polls until the
//! page settles. Nothing here knows about boards; `taskboard-pages` builds
//! the page objects and the snapshot engine on these primitives.
//!
//! ```ignore
//! use taskboard_browser::{StaticUrlServer, TestBrowser, TestBrowserConfig};
//!
//! let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
//! let page = browser.new_page().await?;
//! page.navigate_to(&StaticUrlServer::new("http://localhost:5173"), "/").await?;
//! page.fill("input[id=\"username\"]", "demo").await?;
//! browser.close().await?;
//! ```
//!
//! Tests that need Chrome are `#[ignore]`d; run them with
//! `cargo test -p taskboard-browser -- --ignored`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
pub mod server;
pub mod wait;

pub use browser::{TestBrowser, TestBrowserConfig};
pub use error::{BrowserError, Result};
pub use page::Page;
pub use server::{AppServer, StaticUrlServer};
pub use wait::{wait_for, wait_for_result, WaitConfig, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
