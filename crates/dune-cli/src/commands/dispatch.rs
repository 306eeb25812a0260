use dune_config::DuneConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &DuneConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Process(args) => commands::process::handle(args, config, flags),
        Commands::Columns(args) => commands::columns::handle(args, config, flags),
        Commands::Check(args) => commands::check::handle(args, config, flags),
        Commands::Config => commands::config::handle(config),
        Commands::Schema(args) => commands::schema::handle(args, flags),
    }
}
