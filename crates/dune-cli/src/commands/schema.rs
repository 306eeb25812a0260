use dune_core::responses::{CheckResponse, ColumnsResponse, ProcessResponse};
use schemars::schema_for;

use crate::cli::root_commands::{SchemaArgs, SchemaTarget};
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `dune schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.command {
        SchemaTarget::Process => schema_for!(ProcessResponse),
        SchemaTarget::Columns => schema_for!(ColumnsResponse),
        SchemaTarget::Check => schema_for!(CheckResponse),
    };

    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}
