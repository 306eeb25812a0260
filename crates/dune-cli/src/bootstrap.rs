use std::path::Path;

use anyhow::Context;
use dune_config::DuneConfig;

/// Load the layered configuration, reading `.env` first.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<DuneConfig> {
    let config = DuneConfig::load_with_dotenv(explicit)
        .context("failed to load dunecover configuration")?;
    tracing::debug!(
        positional = %config.sheets.positional,
        transects = %config.sheets.transects,
        readme = %config.sheets.readme,
        format = ?config.output.format,
        "loaded configuration"
    );
    Ok(config)
}
