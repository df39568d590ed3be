// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the TextCraft document engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TextcraftError;

/// The transformation a user can apply to a document.
///
/// "No transformation selected" is modelled as `Option::<ProcessingMode>::None`
/// rather than as a variant, so every variant here maps to exactly one routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// Rewrite legal jargon in plain language.
    Simplify,
    /// Prepend a synthesized table of contents.
    Toc,
    /// Drop repeated lines, keeping first occurrences.
    Deduplicate,
    /// Insert review comments after keyword lines.
    Annotate,
    /// Derive question/answer pairs from the text.
    Faq,
    /// Extract an executive summary.
    Summary,
}

impl ProcessingMode {
    /// Every mode, in tool catalog order.
    pub const ALL: [ProcessingMode; 6] = [
        Self::Simplify,
        Self::Toc,
        Self::Deduplicate,
        Self::Annotate,
        Self::Faq,
        Self::Summary,
    ];

    /// Stable identifier used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simplify => "simplify",
            Self::Toc => "toc",
            Self::Deduplicate => "deduplicate",
            Self::Annotate => "annotate",
            Self::Faq => "faq",
            Self::Summary => "summary",
        }
    }

    /// Short name shown in tool listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Simplify => "Simplify Language",
            Self::Toc => "Generate TOC",
            Self::Deduplicate => "Remove Duplicates",
            Self::Annotate => "Annotate Document",
            Self::Faq => "Generate FAQ",
            Self::Summary => "Executive Summary",
        }
    }

    /// One-line description of what the tool does.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Simplify => "Convert legal jargon to plain language",
            Self::Toc => "Create clickable table of contents",
            Self::Deduplicate => "Delete duplicate lines from text",
            Self::Annotate => "Add legal comments to text",
            Self::Faq => "Create Q&A from document content",
            Self::Summary => "Create concise document summary",
        }
    }

    /// Status line shown while the transform runs.
    pub fn progress_label(&self) -> &'static str {
        match self {
            Self::Simplify => "Simplifying legal language",
            Self::Toc => "Generating table of contents",
            Self::Deduplicate => "Removing duplicate lines",
            Self::Annotate => "Adding legal annotations",
            Self::Faq => "Generating FAQ from document",
            Self::Summary => "Creating executive summary",
        }
    }
}

impl fmt::Display for ProcessingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessingMode {
    type Err = TextcraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TextcraftError::UnknownMode(wanted.to_owned()))
    }
}

/// Lenient mode lookup: anything unrecognised means "no transformation".
pub fn parse_mode(s: &str) -> Option<ProcessingMode> {
    s.parse().ok()
}
