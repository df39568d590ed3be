// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — owns the data directory and the persisted
// configuration, and handles reading documents in and writing results out.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use textcraft_core::AppConfig;
use textcraft_core::error::Result;
use tracing::{info, warn};

use super::data_dir;
use crate::state::UNTITLED;

const CONFIG_FILE: &str = "config.json";

/// Settings and I/O for one command-line invocation.
pub struct AppServices {
    data_dir: PathBuf,
    config: AppConfig,
}

impl AppServices {
    /// Open services rooted at the default data directory.
    pub fn init() -> Result<Self> {
        Self::open(data_dir::data_dir())
    }

    /// Open services rooted at `dir`, creating it if needed.
    pub fn open(dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&dir)?;
        info!(path = %dir.display(), "initialising app services");
        let config = load_config(&dir);
        Ok(Self {
            data_dir: dir,
            config,
        })
    }

    // -- Settings ------------------------------------------------------------

    /// Current application settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Where the settings live on disk.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }

    /// Persist and apply new settings.
    pub fn save_config(&mut self, config: AppConfig) -> Result<()> {
        persist_config(&self.data_dir, &config)?;
        self.config = config;
        Ok(())
    }

    /// Restore and persist the default settings.
    pub fn reset_config(&mut self) -> Result<()> {
        self.save_config(AppConfig::default())
    }
}

// -- Document I/O ------------------------------------------------------------

/// Read a document from `path`, or from stdin when `path` is `None` or `-`.
///
/// Returns the text and the document name (the file name, or the untitled
/// placeholder for stdin).
pub fn read_document(path: Option<&Path>) -> Result<(String, String)> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = std::fs::read_to_string(path)?;
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .filter(|s| !s.is_empty())
                .unwrap_or(UNTITLED)
                .to_owned();
            info!(path = %path.display(), bytes = text.len(), "document read");
            Ok((text, name))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            info!(bytes = text.len(), "document read from stdin");
            Ok((text, UNTITLED.to_owned()))
        }
    }
}

/// Write `text` to `path`.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)?;
    info!(path = %path.display(), bytes = text.len(), "document written");
    Ok(())
}

/// Write `text` to stdout verbatim.
pub fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

// -- Persistence helpers -----------------------------------------------------

fn load_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join(CONFIG_FILE);
    let Ok(data) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    match serde_json::from_str(&data) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            AppConfig::default()
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}
