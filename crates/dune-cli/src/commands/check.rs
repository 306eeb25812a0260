use anyhow::bail;
use dune_config::DuneConfig;
use dune_core::responses::CheckResponse;
use dune_sheets::layout;

use crate::cli::root_commands::WorkbookArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::{compute, open_workbook};
use crate::output::{output, render, render_rows};

/// Handle `dune check`.
///
/// Prints the report in every case and fails when a required sheet or
/// column is missing.
pub fn handle(args: &WorkbookArgs, config: &DuneConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let workbook = open_workbook(&args.workbook)?;
    let sheets = layout().summarize(&workbook, &config.sheets);
    let valid = layout().validate(&workbook, &config.sheets).is_ok();
    let diagnostics = if valid {
        Some(compute(&workbook, config)?.diagnostics)
    } else {
        None
    };

    let response = CheckResponse {
        source: workbook.source().to_string(),
        valid,
        sheets,
        diagnostics,
    };

    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&response, flags.format)?,
        OutputFormat::Table | OutputFormat::Csv => {
            let rows = response
                .sheets
                .iter()
                .map(|sheet| {
                    vec![
                        sheet.role.clone(),
                        sheet.name.clone(),
                        if sheet.present { "present" } else { "missing" }.to_string(),
                        sheet.required.to_string(),
                        sheet.rows.to_string(),
                        sheet.missing_columns.join(", "),
                    ]
                })
                .collect::<Vec<_>>();
            let headers = ["role", "sheet", "status", "required", "rows", "missing_columns"];
            println!("{}", render_rows(&headers, &rows, flags.format)?);
            if let Some(diagnostics) = &response.diagnostics {
                println!();
                println!("{}", render(diagnostics, flags.format)?);
            }
        }
    }

    if !response.valid {
        bail!(
            "workbook {} is missing required sheets or columns",
            response.source
        );
    }
    if !flags.quiet
        && let Some(diagnostics) = &response.diagnostics
        && !diagnostics.is_clean()
    {
        tracing::warn!("workbook processed with recovered data problems; see diagnostics");
    }
    Ok(())
}
