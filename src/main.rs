// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Main entry point for timestamp-writer
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;

use timestamp_writer::config::Config;
use timestamp_writer::constants::{exit, output};
use timestamp_writer::TimestampWriter;

/// Writes the current UTC system time to ./current_time.txt
///
/// Takes no options. Anything on the command line is accepted and ignored.
#[derive(Parser, Debug)]
#[command(about, disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

fn main() -> ExitCode {
    // argv never changes the outcome, so a parse error is not fatal either
    let _ = Cli::try_parse();

    install_panic_hook();

    let config = Config::default();
    if let Err(e) = init_tracing(&config) {
        eprintln!("Warning: {:#}", e);
    }

    match TimestampWriter::new().run() {
        Ok(_) => {
            println!("{}", output::SUCCESS_MESSAGE);
            ExitCode::from(exit::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        eprintln!("timestamp-writer panicked: {} ({})", message, location);
    }));
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(timestamp_writer::constants::config::DEFAULT_LOG_LEVEL));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    if config.json_logs() {
        subscriber
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to init tracing")?;
    } else {
        subscriber
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))
            .context("failed to init tracing")?;
    }

    Ok(())
}
