//! Environment variables take precedence over every file layer.

use std::path::Path;

use dune_config::DuneConfig;
use figment::Jail;

#[test]
fn env_overrides_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("DUNECOVER_SHEETS__README", "Codes");
        jail.set_env("DUNECOVER_COVER__UPPERCASE_CODES", "false");

        let config = DuneConfig::load(None).expect("config loads");
        assert_eq!(config.sheets.readme, "Codes");
        assert!(!config.cover.uppercase_codes);
        Ok(())
    });
}

#[test]
fn env_beats_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file("dune.toml", "[output]\nna_rep = \"from-file\"\n")?;
        jail.set_env("DUNECOVER_OUTPUT__NA_REP", "from-env");

        let config = DuneConfig::load(Some(Path::new("dune.toml"))).expect("config loads");
        assert_eq!(config.output.na_rep, "from-env");
        Ok(())
    });
}

