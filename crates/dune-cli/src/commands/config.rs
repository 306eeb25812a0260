use dune_config::DuneConfig;

/// Handle `dune config`.
pub fn handle(config: &DuneConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
