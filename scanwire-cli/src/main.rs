//! scanwire CLI -- convert and inspect scan result files

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::error;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // 설정 파일 오류는 각 명령이 보고하므로 로깅은 기본값으로 계속 진행
    let mut general = commands::load_config(&cli.config)
        .await
        .map(|config| config.general)
        .unwrap_or_default();
    if let Some(level) = &cli.log_level {
        general.log_level = level.clone();
    }
    if let Err(e) = logging::init_tracing(&general) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }

    let writer = OutputWriter::new(cli.output);
    let result: Result<(), CliError> = match cli.command {
        Commands::Convert(args) => commands::convert::execute(args, &cli.config, &writer).await,
        Commands::Inspect(args) => commands::inspect::execute(args, &writer).await,
        Commands::Config(args) => commands::config::execute(args, &cli.config, &writer).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let code = e.exit_code();
            error!(error = %e, exit_code = code, "command failed");
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
