// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # rtos-cli
//!
//! Command-line client for inspecting the tasks of a running RTOS device.
//!
//! ## Usage
//! ```bash
//! # Print the task table once
//! rtos-cli --host 192.168.1.50 get-tasks
//!
//! # Refresh every two seconds until Ctrl-C
//! rtos-cli --config board.toml get-tasks --watch 2
//!
//! # Render a recorded reply without a device
//! rtos-cli get-tasks --replay capture.json --json
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "rtos-cli",
    about = "Query task telemetry from an RTOS device over RPC",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file with connection settings.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Device hostname or IP address (overrides the config file).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Device RPC port (overrides the config file).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Connect and per-call timeout in milliseconds (overrides the config file).
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a table of RTOS tasks from the device.
    GetTasks {
        /// Emit the normalized report as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Repeat the report every SECS seconds until interrupted.
        #[arg(short, long, value_name = "SECS", value_parser = commands::parse_interval)]
        watch: Option<Duration>,

        /// Read a recorded reply from FILE instead of querying the device.
        #[arg(long, value_name = "FILE")]
        replay: Option<PathBuf>,
    },

    /// Print the effective client configuration as TOML.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    let config = commands::load_config(
        cli.config.as_deref(),
        commands::Overrides {
            host: cli.host,
            port: cli.port,
            timeout_ms: cli.timeout_ms,
        },
    )?;

    match cli.command {
        Commands::GetTasks {
            json,
            watch,
            replay,
        } => {
            let options = commands::tasks::TaskOptions {
                json,
                watch,
                replay,
            };
            commands::tasks::execute(config, options).await
        }
        Commands::Config => commands::config::execute(&config),
    }
}
