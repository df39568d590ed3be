// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document session state — the working document, the selected tool, and the
// processed result.

use std::path::{Path, PathBuf};

use textcraft_core::ProcessingMode;
use textcraft_core::error::{Result, TextcraftError};
use textcraft_engine::process;
use tracing::info;

/// Name given to documents that did not come from a file.
pub const UNTITLED: &str = "Untitled Document";

/// Onboarding document shown in an empty, untitled session.
pub const WELCOME_TEXT: &str = "Welcome to TextCraft!\n\n\
Start by typing or pasting your document here. Then select a processing tool from above to transform your text.\n\n\
Example features:\n\
- Simplify legal language\n\
- Generate table of contents\n\
- Remove duplicate content\n\
- Add legal annotations\n\
- Create FAQs\n\
- Generate executive summaries";

/// One document being worked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSession {
    /// Original text.
    pub document: String,
    /// Result of the last run; empty when no tool is selected.
    pub processed: String,
    /// Display name, usually the source file name.
    pub name: String,
    /// Selected tool, if any.
    pub mode: Option<ProcessingMode>,
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self {
            document: String::new(),
            processed: String::new(),
            name: UNTITLED.to_owned(),
            mode: None,
        }
    }
}

impl DocumentSession {
    pub fn new(name: impl Into<String>, document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Load the welcome document if the session is empty and untitled.
    /// Returns whether it did.
    pub fn seed_welcome(&mut self) -> bool {
        if self.document.is_empty() && self.name == UNTITLED {
            self.set_document(WELCOME_TEXT);
            true
        } else {
            false
        }
    }

    /// Replace the document. Any selected tool is deselected, since its
    /// result no longer matches the text.
    pub fn set_document(&mut self, text: impl Into<String>) {
        self.document = text.into();
        self.mode = None;
        self.processed.clear();
    }

    /// Select `mode`, or deselect it if it is already selected.
    pub fn select_tool(&mut self, mode: ProcessingMode) {
        self.mode = if self.mode == Some(mode) {
            None
        } else {
            Some(mode)
        };
        self.processed.clear();
    }

    /// Recompute the processed result for the current document and tool.
    pub fn run(&mut self) -> &str {
        self.processed = match self.mode {
            Some(mode) if !self.document.is_empty() => process(&self.document, Some(mode)),
            _ => String::new(),
        };
        &self.processed
    }

    /// What the session currently shows: the result, or the untouched
    /// document when no tool is selected.
    pub fn output(&self) -> &str {
        match self.mode {
            Some(_) => &self.processed,
            None => &self.document,
        }
    }

    /// File name for exporting the result: the last extension of `name` is
    /// replaced by `<suffix>.txt`.
    pub fn export_file_name(&self, suffix: &str) -> String {
        let stem = match self.name.rfind('.') {
            Some(dot) if dot + 1 < self.name.len() && !self.name[dot + 1..].contains('/') => {
                &self.name[..dot]
            }
            _ => self.name.as_str(),
        };
        format!("{stem}{suffix}.txt")
    }

    /// Write the processed result into `dir`. Returns the written path.
    pub fn export(&self, dir: &Path, suffix: &str) -> Result<PathBuf> {
        if self.document.is_empty() {
            return Err(TextcraftError::EmptyDocument);
        }
        if self.processed.is_empty() {
            return Err(TextcraftError::NothingToExport);
        }
        let path = dir.join(self.export_file_name(suffix));
        std::fs::write(&path, &self.processed)?;
        info!(path = %path.display(), bytes = self.processed.len(), "processed document exported");
        Ok(path)
    }
}
