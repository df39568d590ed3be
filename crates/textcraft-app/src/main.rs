// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// TextCraft — document transforms from the command line.
//
// Entry point. Initialises logging, parses arguments, and reports failures in
// plain English.

mod cli;
mod services;
mod state;

use std::process::ExitCode;

use clap::Parser;
use textcraft_core::human_errors::humanize_error;

use cli::Cli;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the document.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            let human = humanize_error(&e);
            eprintln!("{}\n{}", human.message, human.suggestion);
            ExitCode::FAILURE
        }
    }
}
