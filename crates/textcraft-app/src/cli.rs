// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface — argument parsing and command dispatch.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use textcraft_core::error::{Result, TextcraftError};
use textcraft_core::{AppConfig, ProcessingMode};
use tracing::info;

use crate::services::app_services::{self, AppServices};
use crate::state::DocumentSession;

/// Transform plain-text documents: simplify legal language, build a table of
/// contents, remove duplicate lines, annotate clauses, derive an FAQ, or
/// extract an executive summary.
#[derive(Parser, Debug)]
#[command(name = "textcraft", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one transform over a document
    Process(ProcessArgs),

    /// List the available tools
    Modes,

    /// Show or change the saved settings
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Tool to apply (simplify, toc, deduplicate, annotate, faq, summary).
    /// Falls back to the configured default; with neither, the text is
    /// echoed unchanged.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Input file; stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "export_dir")]
    pub output: Option<PathBuf>,

    /// Write the result into this directory as `<name><suffix>.txt`
    #[arg(long)]
    pub export_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Set the default tool ("none" to clear it)
    #[arg(long, value_name = "MODE")]
    pub set_default_mode: Option<String>,

    /// Set the artificial processing delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub set_delay_ms: Option<u64>,

    /// Set the suffix used for exported file names
    #[arg(long, value_name = "SUFFIX")]
    pub set_export_suffix: Option<String>,

    /// Seed empty stdin input with the welcome document
    #[arg(long, value_name = "BOOL")]
    pub set_welcome: Option<bool>,

    /// Restore the default settings
    #[arg(long, conflicts_with_all = ["set_default_mode", "set_delay_ms", "set_export_suffix", "set_welcome"])]
    pub reset: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut svc = AppServices::init()?;
        match self.command {
            Commands::Process(args) => run_process(&svc, args),
            Commands::Modes => run_modes(),
            Commands::Config(args) => run_config(&mut svc, args),
        }
    }
}

fn run_process(svc: &AppServices, args: ProcessArgs) -> Result<()> {
    let config = svc.config();
    let (text, name) = app_services::read_document(args.input.as_deref())?;
    let mut session = prepare_session(config, args.mode.as_deref(), text, name)?;

    if let Some(mode) = session.mode {
        if config.processing_delay_ms > 0 {
            eprintln!("{}...", mode.progress_label());
            std::thread::sleep(Duration::from_millis(config.processing_delay_ms));
        }
        session.run();
    }

    if let Some(path) = args.output.as_deref() {
        app_services::write_document(path, session.output())
    } else if let Some(dir) = args.export_dir.as_deref() {
        let path = session.export(dir, &config.export_suffix)?;
        eprintln!("Saved {}", path.display());
        Ok(())
    } else {
        app_services::write_stdout(session.output())
    }
}

/// Build the session for one `process` run, with its tool selected but not
/// yet run. An explicit `mode_arg` wins over the configured default.
fn prepare_session(
    config: &AppConfig,
    mode_arg: Option<&str>,
    text: String,
    name: String,
) -> Result<DocumentSession> {
    let mode = match mode_arg {
        Some(arg) => Some(arg.parse::<ProcessingMode>()?),
        None => config.default_mode,
    };

    let mut session = DocumentSession::new(name, text);
    if config.welcome_on_empty && session.seed_welcome() {
        info!("empty input, loaded the welcome document");
    }
    if let Some(mode) = mode {
        session.select_tool(mode);
    }
    Ok(session)
}

fn run_modes() -> Result<()> {
    let mut listing = String::new();
    for mode in ProcessingMode::ALL {
        listing.push_str(&format!(
            "{:<12} {:<20} {}\n",
            mode.as_str(),
            mode.display_name(),
            mode.description()
        ));
    }
    app_services::write_stdout(&listing)
}

fn run_config(svc: &mut AppServices, args: ConfigArgs) -> Result<()> {
    if args.reset {
        svc.reset_config()?;
        eprintln!("Settings restored to defaults.");
    } else if let Some(config) = apply_changes(svc.config(), &args)? {
        svc.save_config(config)?;
        eprintln!("Settings saved to {}", svc.config_path().display());
    }

    let json = serde_json::to_string_pretty(svc.config())?;
    app_services::write_stdout(&format!("{json}\n"))
}

/// The updated settings, or `None` when `args` asks for no change.
fn apply_changes(current: &AppConfig, args: &ConfigArgs) -> Result<Option<AppConfig>> {
    let mut config = current.clone();

    if let Some(name) = args.set_default_mode.as_deref() {
        config.default_mode = if name.trim().eq_ignore_ascii_case("none") {
            None
        } else {
            Some(name.parse()?)
        };
    }
    if let Some(ms) = args.set_delay_ms {
        config.processing_delay_ms = ms;
    }
    if let Some(suffix) = &args.set_export_suffix {
        if suffix.contains(['/', '\\']) {
            return Err(TextcraftError::Config(format!(
                "export suffix {suffix:?} must not contain a path separator"
            )));
        }
        config.export_suffix = suffix.clone();
    }
    if let Some(welcome) = args.set_welcome {
        config.welcome_on_empty = welcome;
    }

    Ok((config != *current).then_some(config))
}
