use std::path::PathBuf;

use clap::Parser;
use dune_config::DuneConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dune` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dune",
    version,
    about = "dunecover - percent cover for beach and dune vegetation transects"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, csv, raw (defaults to `output.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Explicit config file, layered over the global and project configs
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract global flags, falling back to configuration for the format.
    #[must_use]
    pub fn global_flags(&self, config: &DuneConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from(config.output.format)),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use dune_config::{DuneConfig, OutputFormatSetting};

    use super::root_commands::SchemaTarget;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "dune",
            "--format",
            "table",
            "--verbose",
            "process",
            "survey.xlsx",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Process(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dune", "check", "survey.xlsx", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn process_accepts_out_and_column_prefix() {
        let cli = Cli::try_parse_from([
            "dune",
            "process",
            "survey",
            "--out",
            "export",
            "--columns",
            "pctcov_ABMA",
        ])
        .expect("cli should parse");

        let Commands::Process(args) = cli.command else {
            panic!("expected process command");
        };
        assert_eq!(args.workbook, Path::new("survey"));
        assert_eq!(args.out.as_deref(), Some(Path::new("export")));
        assert_eq!(args.columns.as_deref(), Some("pctcov_ABMA"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["dune", "--format", "xml", "config"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "csv", "raw"] {
            let cli = Cli::try_parse_from(["dune", "--format", value, "config"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Config));
        }
    }

    #[test]
    fn format_falls_back_to_config() {
        let cli = Cli::try_parse_from(["dune", "config"]).expect("cli should parse");
        let mut config = DuneConfig::default();
        config.output.format = OutputFormatSetting::Csv;
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Csv);

        let cli = Cli::try_parse_from(["dune", "-f", "json", "config"]).expect("cli should parse");
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Json);
    }

    #[test]
    fn schema_defaults_to_process() {
        let cli = Cli::try_parse_from(["dune", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema command");
        };
        assert_eq!(args.command, SchemaTarget::Process);
    }
}
