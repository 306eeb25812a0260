use clap::ValueEnum;
use dune_config::OutputFormatSetting;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Raw,
}

impl From<OutputFormatSetting> for OutputFormat {
    fn from(setting: OutputFormatSetting) -> Self {
        match setting {
            OutputFormatSetting::Json => Self::Json,
            OutputFormatSetting::Table => Self::Table,
            OutputFormatSetting::Csv => Self::Csv,
            OutputFormatSetting::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands, with the output
/// format already resolved against configuration.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
}
