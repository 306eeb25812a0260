use std::path::Path;

use anyhow::Context;
use dune_config::DuneConfig;
use dune_cover::CoverRun;
use dune_sheets::Workbook;

pub fn open_workbook(path: &Path) -> anyhow::Result<Workbook> {
    Workbook::open(path).with_context(|| format!("failed to open workbook {}", path.display()))
}

/// Decode a workbook and run the cover pipeline over it.
pub fn compute(workbook: &Workbook, config: &DuneConfig) -> anyhow::Result<CoverRun> {
    let tables = dune_sheets::decode(workbook, &config.sheets).with_context(|| {
        format!(
            "workbook {} does not match the survey layout",
            workbook.source()
        )
    })?;
    Ok(dune_cover::run(&tables, &config.cover))
}
