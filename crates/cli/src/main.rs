// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sharon CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sharon::cli::Cli;
use sharon::error::ExitCode;

mod cmd_run;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SHARON_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("sharon: {:#}", e);
            match e.downcast_ref::<sharon::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_run::run(&cli)
}
