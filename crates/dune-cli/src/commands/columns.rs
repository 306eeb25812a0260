use dune_config::DuneConfig;
use dune_core::responses::ColumnsResponse;
use dune_core::table::BASE_COLUMNS;

use crate::cli::root_commands::WorkbookArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{compute, open_workbook};
use crate::output::{output, render_rows};

/// Handle `dune columns`.
pub fn handle(args: &WorkbookArgs, config: &DuneConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workbook = open_workbook(&args.workbook)?;
    let run = compute(&workbook, config)?;

    let response = ColumnsResponse {
        source: workbook.source().to_string(),
        base_columns: BASE_COLUMNS.iter().map(ToString::to_string).collect(),
        columns: run.table.columns().to_vec(),
    };

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format),
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = response
                .columns
                .iter()
                .map(|column| {
                    vec![
                        column.name.clone(),
                        column.axis.kind().to_string(),
                        column.axis.label(),
                        column.zone.to_string(),
                    ]
                })
                .collect::<Vec<_>>();
            let rendered = render_rows(&["name", "axis", "label", "zone"], &rows, flags.format)?;
            println!("{rendered}");
            Ok(())
        }
    }
}
