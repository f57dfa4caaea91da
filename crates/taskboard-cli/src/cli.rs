//! Command-line interface definition.
//!
//! - `taskboard snapshot --project <name>` - sign in, open a project, print its board

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskboard_pages::Project;

/// Task board snapshot harness
#[derive(Parser, Debug)]
#[command(
    name = "taskboard",
    version,
    about = "Sign in to the task board and print a project's columns and cards"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in, open a project and print its board snapshot
    ///
    /// Credentials are read from LOGINNAME and PASSWORD.
    Snapshot(SnapshotArgs),
}

/// Arguments for `taskboard snapshot`.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Project to open
    #[arg(short, long, value_enum)]
    pub project: ProjectArg,

    /// Configuration file (defaults to ./taskboard.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the application base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the browser window
    #[arg(long)]
    pub visible: bool,
}

/// Project names as accepted on the command line.
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ProjectArg {
    /// "Web Application"
    #[value(name = "web-application")]
    WebApplication,

    /// "Mobile Application"
    #[value(name = "mobile-application")]
    MobileApplication,

    /// "Marketing Campaign"
    #[value(name = "marketing-campaign")]
    MarketingCampaign,
}

impl From<ProjectArg> for Project {
    fn from(arg: ProjectArg) -> Self {
        match arg {
            ProjectArg::WebApplication => Project::WebApplication,
            ProjectArg::MobileApplication => Project::MobileApplication,
            ProjectArg::MarketingCampaign => Project::MarketingCampaign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_command() {
        let cli = Cli::try_parse_from([
            "taskboard",
            "snapshot",
            "--project",
            "mobile-application",
            "--json",
            "--base-url",
            "http://127.0.0.1:4000",
        ])
        .unwrap();

        let Command::Snapshot(args) = cli.command;
        assert_eq!(Project::from(args.project), Project::MobileApplication);
        assert!(args.json);
        assert!(!args.visible);
        assert_eq!(args.base_url.as_deref(), Some("http://127.0.0.1:4000"));
        assert!(args.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["taskboard", "snapshot", "-p", "web-application", "-v"])
            .unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_project() {
        assert!(Cli::try_parse_from(["taskboard", "snapshot", "-p", "desktop"]).is_err());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["taskboard", "-v", "-q", "snapshot", "-p", "web-application"])
            .is_err());
    }
}
