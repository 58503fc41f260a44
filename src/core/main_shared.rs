use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands, PrintArgs};
use crate::core::cmds::{self, RunStatus};
use crate::core::logging::init_logging;
use crate::core::runner::GhCliRunner;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub async fn run_main() -> AppResult<RunStatus> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        output: args.output.clone(),
        repo: args.repo.clone(),
        limit: args.limit,
        max_concurrency: args.max_concurrency,
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    let config_path = args.config.as_ref().map(PathBuf::from);
    init_with_overrides(config_path.as_deref(), &cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", env::current_dir()?.display());

    // Dispatch to appropriate command
    let status = match args.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            let runner = Arc::new(GhCliRunner::from_config(config()));
            cmds::execute_generate(config(), runner).await
        }
        Commands::Init => {
            cmds::execute_init().await?;
            RunStatus::Success
        }
        Commands::Print {
            command: PrintArgs::Config(print_args),
        } => {
            cmds::execute_print(cmds::print::PrintCommand::Config(print_args.format)).await?;
            RunStatus::Success
        }
    };

    debug!("Finished with status {status}");
    Ok(status)
}
