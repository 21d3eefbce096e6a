use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fgt-extract")]
#[command(about = "Extract FortiGate firewall objects and policies into tables")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Extract sections from a config export into one file per section.
    Extract(ExtractArgs),
    /// Print one section of a config export as a table.
    Show(ShowArgs),
    /// List the sections that can be extracted.
    Sections(SectionsArgs),
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// FortiGate configuration export to read.
    pub file: PathBuf,
    /// Directory receiving one file per section.
    #[arg(short, long)]
    pub output_dir: PathBuf,
    /// Section id to extract (repeatable). Defaults to every catalog section.
    #[arg(long = "section")]
    pub sections: Vec<String>,
    /// Output file format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,
    /// Optional sections catalog TOML file.
    #[arg(long)]
    pub sections_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// FortiGate configuration export to read.
    pub file: PathBuf,
    /// Section id to print.
    #[arg(long)]
    pub section: String,
    /// Additional column to drop (repeatable).
    #[arg(long = "drop")]
    pub drop_columns: Vec<String>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = ShowFormat::Text)]
    pub format: ShowFormat,
    /// Optional sections catalog TOML file.
    #[arg(long)]
    pub sections_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SectionsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Optional sections catalog TOML file.
    #[arg(long)]
    pub sections_file: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ShowFormat {
    Text,
    Csv,
    Json,
}
