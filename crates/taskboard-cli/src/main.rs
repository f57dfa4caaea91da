//! taskboard CLI - sign in to the task board and print a project's snapshot.

use clap::Parser;
use miette::Result;
use taskboard_cli::{cli, commands, logger};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    let color = !args.no_color && logger::should_use_colors();

    let result = match args.command {
        cli::Command::Snapshot(snapshot_args) => {
            commands::snapshot_execute(snapshot_args, color).await
        }
    };

    result.map_err(miette::Report::new)
}
