//! `glyphgrid` CLI - render a published coordinate table as text

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use glyphgrid::Config;

#[derive(Parser)]
#[command(name = "glyphgrid")]
#[command(about = "Render the coordinate table of a published document as a text grid")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ~/.config/glyphgrid/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a document and print its coordinate grid
    Render {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the first table of a document as markdown
    Table {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the HTML document comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// URL of the published document
    #[arg(required_unless_present = "file")]
    pub url: Option<String>,

    /// Read the document from a local file instead (`-` for stdin)
    #[arg(short, long, conflicts_with = "url", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Request timeout in seconds (overrides config)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render { source } => cmd::render::cmd_render(&source, config).await?,
        Commands::Table { source } => cmd::table::cmd_table(&source, config).await?,
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the grid.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
