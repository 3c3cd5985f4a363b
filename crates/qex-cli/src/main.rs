//! QEX CLI - Main entry point

use clap::Parser;
use qex_cli::runner::RunOutcome;
use qex_cli::{Cli, Commands, PipelineConfig};
use qex_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging based on verbose flag and environment
    let log_config = if cli.verbose {
        // Verbose mode: log to console with debug level
        LogConfig::builder()
            .level(LogLevel::Debug)
            .output(LogOutput::Console)
            .log_file_prefix("qex".to_string())
            .build()
    } else {
        // Normal mode: info+ to console
        LogConfig::builder()
            .level(LogLevel::Info)
            .output(LogOutput::Console)
            .log_file_prefix("qex".to_string())
            .build()
    };

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env_with(log_config.clone()).unwrap_or(log_config);

    // Initialize logging (ignore errors as CLI should work without logging)
    let _ = init_logging(&log_config);

    // Execute command
    let result = execute_command(cli).await;

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                process::exit(exit_code);
            }
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Execute the CLI command, returning the process exit code
async fn execute_command(cli: Cli) -> qex_cli::Result<i32> {
    match cli.command {
        Commands::Fetch {
            dataset,
            images_dir,
            concurrency,
        } => {
            qex_cli::commands::fetch::run(&dataset, &images_dir, concurrency).await?;
            Ok(0)
        }

        Commands::Enhance {
            input_dir,
            output_dir,
            contrast,
        } => {
            qex_cli::commands::enhance::run(&input_dir, &output_dir, contrast)?;
            Ok(0)
        }

        Commands::Run {
            pipeline,
            cooldown_secs,
        } => {
            qex_cli::commands::run::run(&pipeline, cooldown_secs).await?;
            Ok(0)
        }

        Commands::Worker { pipeline } => {
            let config = PipelineConfig::from(&pipeline);
            match qex_cli::commands::worker::run(config).await? {
                RunOutcome::Completed => Ok(0),
                // Tells the supervisor to relaunch after the cooldown
                RunOutcome::CheckpointReached { .. } => {
                    Ok(qex_cli::supervisor::RESTART_EXIT_CODE)
                }
            }
        }

        Commands::Status { pipeline } => {
            let config = PipelineConfig::from(&pipeline);
            qex_cli::commands::status::run(&config)?;
            Ok(0)
        }
    }
}
