//! CLI argument definitions for the dictionary importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aas-import",
    version,
    about = "Import dictionary entries into an administration shell document",
    long_about = "Convert entries from a dictionary catalog (classes, properties, \n\
                  value lists) into submodels or submodel elements of an \n\
                  administration shell document, written as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Import selected catalog entries into a new document.
    Import(ImportArgs),

    /// List the entries of a catalog file.
    List(ListArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Catalog codes to import, in order.
    #[arg(long = "select", value_name = "CODE", required = true, num_args = 1..)]
    pub select: Vec<String>,

    /// What the selected entries become in the target document.
    #[arg(long = "as", value_enum, default_value = "submodels")]
    pub mode: ImportModeArg,

    /// Write the resulting document to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Identifier template for generated top-level nodes.
    #[arg(
        long = "id-template",
        value_name = "IRI",
        default_value = "http://example.com/ids/imported"
    )]
    pub id_template: String,

    /// Use this identifier for the destination shell instead of a generated
    /// one (submodels mode only).
    #[arg(long = "shell-id", value_name = "IRI")]
    pub shell_id: Option<String>,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImportModeArg {
    /// Selected entries become submodels under a new shell.
    Submodels,
    /// Selected entries become elements under a new submodel.
    Elements,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
