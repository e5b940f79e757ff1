//! CLI application that renames invoice PDFs after their billing metadata.

mod config;
mod summary;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fapiao_core::BatchRenamer;

/// Rename invoice PDFs to YYMMDD_type_amount_code.pdf
#[derive(Parser)]
#[command(name = "fapiao")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder containing the invoices (default: current directory)
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Per-document outcomes are logged at INFO, so that is the floor
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = config::load(cli.config.as_deref())?;
    let folder = std::path::absolute(&cli.dir)?;

    let renamer = BatchRenamer::for_filesystem(config);
    let report = renamer
        .run(&folder)
        .await
        .map_err(|e| anyhow::anyhow!(e.diagnostic(&renamer.config().support_link)))?;

    summary::print(&report);
    Ok(())
}
