use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compute percent cover for every transect in a workbook.
    Process(ProcessArgs),
    /// List the percent-cover columns a workbook produces.
    Columns(WorkbookArgs),
    /// Validate a workbook and report run diagnostics without the table.
    Check(WorkbookArgs),
    /// Print the effective configuration as TOML.
    Config,
    /// Print the JSON Schema of a command's JSON output.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProcessArgs {
    /// Survey workbook (.xlsx, .xls, .ods, ...) or a directory of per-sheet CSV files.
    pub workbook: PathBuf,

    /// Also write the full table as CSV to this file or directory.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Only render percent-cover columns starting with this prefix.
    #[arg(short, long)]
    pub columns: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct WorkbookArgs {
    /// Survey workbook (.xlsx, .xls, .ods, ...) or a directory of per-sheet CSV files.
    pub workbook: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Command whose output schema to print.
    #[arg(value_enum, default_value = "process")]
    pub command: SchemaTarget,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaTarget {
    Process,
    Columns,
    Check,
}
