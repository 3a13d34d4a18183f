//! docnav CLI - Documentation navigation index.
//!
//! Provides commands for:
//! - `locate`: Show the active sidebar path for a page
//! - `nav`: Show breadcrumbs and previous/next links for a page
//! - `toc`: Build the table of contents of a source file
//! - `pages`: List all pages in reading order

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LocateArgs, NavArgs, PagesArgs, TocArgs};
use output::Output;

/// docnav - Documentation navigation index.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the active sidebar path of a page in every section.
    Locate(LocateArgs),
    /// Show breadcrumbs and previous/next links of a page.
    Nav(NavArgs),
    /// Build the table of contents of a documentation source file.
    Toc(TocArgs),
    /// List all documentation pages in reading order.
    Pages(PagesArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Locate(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
        Commands::Toc(args) => args.execute(),
        Commands::Pages(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
