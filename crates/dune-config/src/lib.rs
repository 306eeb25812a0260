//! # dune-config
//!
//! Layered configuration loading for dunecover using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DUNECOVER_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.dunecover/config.toml`
//! 4. User-level `~/.config/dunecover/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DUNECOVER_SHEETS__README` -> `sheets.readme`,
//! `DUNECOVER_OUTPUT__NA_REP` -> `output.na_rep`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use dune_config::DuneConfig;
//!
//! let config = DuneConfig::load_with_dotenv(None).expect("config");
//! println!("reference sheet: {}", config.sheets.readme);
//! ```

mod cover;
mod error;
mod output;
mod sheets;

pub use cover::CoverConfig;
pub use error::ConfigError;
pub use output::{OutputConfig, OutputFormatSetting};
pub use sheets::SheetsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Largest accepted `output.precision`.
const MAX_PRECISION: u32 = 12;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DuneConfig {
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub cover: CoverConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl DuneConfig {
    /// Load configuration from defaults, TOML files, and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if `explicit` does not exist,
    /// [`ConfigError::Figment`] if extraction fails, or
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit
            && !path.is_file()
        {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".dunecover/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("DUNECOVER_").split("__"))
    }

    /// Check values that deserialize fine but cannot drive the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_empty = [
            ("cover.dead_marker", &self.cover.dead_marker),
            ("cover.unknown_cover_type", &self.cover.unknown_cover_type),
            ("cover.plant_cover_type", &self.cover.plant_cover_type),
            ("sheets.positional", &self.sheets.positional),
            ("sheets.transects", &self.sheets.transects),
            ("sheets.readme", &self.sheets.readme),
        ];
        for (field, value) in non_empty {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if let Some(precision) = self.output.precision
            && precision > MAX_PRECISION
        {
            return Err(ConfigError::InvalidValue {
                field: "output.precision".to_string(),
                reason: format!("{precision} exceeds the maximum of {MAX_PRECISION}"),
            });
        }

        Ok(())
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dunecover").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DuneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sheets.readme, "ReadMe");
        assert_eq!(config.output.format, OutputFormatSetting::Json);
    }

    #[test]
    fn empty_dead_marker_is_rejected() {
        let mut config = DuneConfig::default();
        config.cover.dead_marker = "  ".into();
        let error = config.validate().expect_err("should reject");
        assert!(
            matches!(error, ConfigError::InvalidValue { ref field, .. } if field == "cover.dead_marker")
        );
    }

    #[test]
    fn excessive_precision_is_rejected() {
        let mut config = DuneConfig::default();
        config.output.precision = Some(40);
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_rendering_includes_sections() {
        let rendered = DuneConfig::default().to_toml().expect("toml");
        assert!(rendered.contains("[sheets]"));
        assert!(rendered.contains("[cover]"));
        assert!(rendered.contains("dead_marker = \"-D\""));
    }
}
