use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use fgt_extract::catalog::{default_catalog, load_catalog, SectionDef};
use fgt_extract::report::render_catalog;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod extract_cmd;
mod path_guard;
mod show_cmd;

use cli::{Cli, Command, OutputFormat, SectionsArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::Extract(args) => extract_cmd::run_extract(args),
        Command::Show(args) => show_cmd::run_show(args),
        Command::Sections(args) => run_sections(args),
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}

fn run_sections(args: SectionsArgs) -> Result<()> {
    let (catalog, source) = resolve_catalog(args.sections_file.as_deref());

    match args.format {
        OutputFormat::Text => println!("{}", render_catalog(&catalog, &source)),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&catalog).context("failed to serialize catalog")?
        ),
    }
    Ok(())
}

/// Load the catalog from `path`, falling back to the embedded one on error.
pub(crate) fn resolve_catalog(path: Option<&Path>) -> (Vec<SectionDef>, String) {
    let Some(path) = path else {
        return (default_catalog(), "embedded".to_string());
    };

    match load_catalog(path) {
        Ok(catalog) => (catalog, format!("file:{}", path.display())),
        Err(err) => {
            warn!("{err}; using embedded sections");
            (default_catalog(), "embedded".to_string())
        }
    }
}
