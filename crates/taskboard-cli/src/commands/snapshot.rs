use crate::cli::SnapshotArgs;
use crate::error::Result;
use crate::render::render_snapshot;
use taskboard_browser::{BrowserError, StaticUrlServer, TestBrowser, TestBrowserConfig};
use taskboard_pages::{Credentials, HarnessConfig, LoginPage, Project, Snapshot};
use tracing::{debug, info, warn};

/// Runs `taskboard snapshot`.
///
/// # Errors
///
/// Returns an error if configuration, the browser, sign-in or project
/// navigation fails. Contained card failures are printed, not returned.
pub async fn snapshot_execute(args: SnapshotArgs, color: bool) -> Result<()> {
    let mut config = HarnessConfig::load(args.config.as_deref())?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if args.visible {
        config.headless = false;
    }
    debug!(?config, "resolved configuration");

    let browser = TestBrowser::launch(TestBrowserConfig::new().headless(config.headless)).await?;

    let outcome = capture(&browser, &config, args.project.into()).await;
    let snapshot = after_close(outcome, browser.close().await)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_snapshot(&snapshot, color));
    }
    Ok(())
}

/// Combines a capture result with the browser shutdown that followed it.
///
/// A capture failure wins over a close failure; the latter is only logged.
fn after_close<T>(outcome: Result<T>, closed: std::result::Result<(), BrowserError>) -> Result<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!(error = %close_err, "browser did not close cleanly");
            Err(err)
        }
    }
}

async fn capture(browser: &TestBrowser, config: &HarnessConfig, project: Project) -> Result<Snapshot> {
    let page = browser.new_page().await?;
    let server = StaticUrlServer::new(config.base_url.clone());

    let login = LoginPage::new(page, config.engine());
    login.go_to_login(&server).await?;
    let mut projects = login.sign_in(&Credentials::from_env()).await?;

    let snapshot = projects.go_to_project(project).await?.clone();
    info!(
        %project,
        cards = snapshot.card_count(),
        faults = snapshot.faults.len(),
        "snapshot captured"
    );
    Ok(snapshot)
}
