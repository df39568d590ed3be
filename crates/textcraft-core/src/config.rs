// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use serde::{Deserialize, Serialize};

use crate::ProcessingMode;

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Mode used when the caller does not name one. `None` echoes the input.
    pub default_mode: Option<ProcessingMode>,
    /// Artificial latency (milliseconds) added before a transform runs.
    pub processing_delay_ms: u64,
    /// Appended to the document stem when exporting (`contract-processed.txt`).
    pub export_suffix: String,
    /// Seed an empty session with the welcome document.
    pub welcome_on_empty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_mode: None,
            processing_delay_ms: 0,
            export_suffix: "-processed".into(),
            welcome_on_empty: false,
        }
    }
}
