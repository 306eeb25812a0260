use dune_config::DuneConfig;
use dune_core::axes::PCTCOV_PREFIX;
use dune_core::responses::ProcessResponse;
use dune_core::table::{CoverColumn, CoverTable};
use dune_cover::export::{ExportOptions, to_csv_string, write_csv_file};
use tracing::info;

use crate::cli::root_commands::ProcessArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{compute, open_workbook};
use crate::output::{output, render_rows};

/// Handle `dune process`.
pub fn handle(args: &ProcessArgs, config: &DuneConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workbook = open_workbook(&args.workbook)?;
    let run = compute(&workbook, config)?;
    let options = ExportOptions::from(&config.output);

    if let Some(out) = &args.out {
        let written = write_csv_file(&run.table, out, &options)?;
        info!(path = %written.display(), "wrote processed transect data");
        if !flags.quiet && flags.format != OutputFormat::Csv {
            eprintln!("wrote {}", written.display());
        }
    }

    let table = match &args.columns {
        Some(prefix) => run.table.select(|column| column_matches(column, prefix)),
        None => run.table,
    };

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(
            &ProcessResponse {
                source: workbook.source().to_string(),
                table,
                diagnostics: run.diagnostics,
            },
            flags.format,
        ),
        OutputFormat::Csv => {
            print!("{}", to_csv_string(&table, &options)?);
            Ok(())
        }
        OutputFormat::Table => {
            println!("{}", render_table(&table, &options)?);
            Ok(())
        }
    }
}

/// Whether `column` starts with `prefix`, with or without the `pctcov_` prefix.
fn column_matches(column: &CoverColumn, prefix: &str) -> bool {
    column.name.starts_with(prefix)
        || column
            .name
            .strip_prefix(PCTCOV_PREFIX)
            .is_some_and(|rest| rest.starts_with(prefix))
}

fn render_table(table: &CoverTable, options: &ExportOptions) -> anyhow::Result<String> {
    let records = table.records(|value| options.format_number(value));
    render_rows(&table.headers(), &records, OutputFormat::Table)
}
