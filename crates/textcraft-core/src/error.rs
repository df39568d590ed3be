// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for TextCraft.
//
// The transformation engine itself never fails; these variants cover the
// surfaces around it (mode selection, file I/O, persisted configuration).

use thiserror::Error;

/// Top-level error type for all TextCraft operations.
#[derive(Debug, Error)]
pub enum TextcraftError {
    // -- Mode selection --
    #[error("unknown processing mode: {0}")]
    UnknownMode(String),

    // -- Document / session --
    #[error("document is empty")]
    EmptyDocument,

    #[error("no processed document to export")]
    NothingToExport,

    // -- Configuration / persistence --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TextcraftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "contract.txt");
        let err: TextcraftError = io_err.into();
        assert!(matches!(err, TextcraftError::Io(_)));
        assert!(err.to_string().contains("contract.txt"));
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            TextcraftError::UnknownMode("poem".into()).to_string(),
            "unknown processing mode: poem"
        );
        assert_eq!(
            TextcraftError::NothingToExport.to_string(),
            "no processed document to export"
        );
    }
}
