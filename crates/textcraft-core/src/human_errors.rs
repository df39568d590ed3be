// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the command line.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::ProcessingMode;
use crate::error::TextcraftError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must do something (pick a mode, fix a path, process first).
    ActionRequired,
    /// Cannot be fixed by the user from here (corrupt data, disk failure).
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

/// Convert a `TextcraftError` into a `HumanError`.
pub fn humanize_error(err: &TextcraftError) -> HumanError {
    match err {
        TextcraftError::UnknownMode(name) => {
            let known: Vec<&str> = ProcessingMode::ALL.iter().map(|m| m.as_str()).collect();
            HumanError {
                message: format!("\"{name}\" is not a tool we know."),
                suggestion: format!("Choose one of: {}.", known.join(", ")),
                severity: Severity::ActionRequired,
            }
        }

        TextcraftError::EmptyDocument => HumanError {
            message: "There is no text to work on.".into(),
            suggestion: "Type or paste your document, or pass a file name.".into(),
            severity: Severity::ActionRequired,
        },

        TextcraftError::NothingToExport => HumanError {
            message: "There is nothing to save yet.".into(),
            suggestion: "Pick a tool and process the document first.".into(),
            severity: Severity::ActionRequired,
        },

        TextcraftError::Config(detail) => HumanError {
            message: "That setting value is not allowed.".into(),
            suggestion: format!("Change the value and run `textcraft config` again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        TextcraftError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "That file could not be found.".into(),
                suggestion: "Check the file name and folder, then try again.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "We aren't allowed to open that file.".into(),
                suggestion: "Check the file's permissions, or choose another folder.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::InvalidData => HumanError {
                message: "That file doesn't look like plain text.".into(),
                suggestion: "Save the document as a UTF-8 .txt file and try again.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "Something went wrong reading or writing a file.".into(),
                suggestion: format!("Try again. (Detail: {io_err})"),
                severity: Severity::Permanent,
            },
        },

        TextcraftError::Serialization(detail) => HumanError {
            message: "Saved data is damaged.".into(),
            suggestion: format!("Run `textcraft config --reset` to start fresh. (Detail: {detail})"),
            severity: Severity::Permanent,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mode_lists_alternatives() {
        let human = humanize_error(&TextcraftError::UnknownMode("poem".into()));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert!(human.suggestion.contains("deduplicate"));
        assert!(human.message.contains("poem"));
    }

    #[test]
    fn missing_file_is_action_required() {
        let err = TextcraftError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "x"));
        assert_eq!(humanize_error(&err).severity, Severity::ActionRequired);
    }

    #[test]
    fn rejected_setting_points_at_the_value() {
        let human = humanize_error(&TextcraftError::Config(
            "export suffix \"/x\" must not contain a path separator".into(),
        ));
        assert_eq!(human.severity, Severity::ActionRequired);
        assert_eq!(human.message, "That setting value is not allowed.");
        assert!(human.suggestion.contains("path separator"));
        assert!(!human.suggestion.contains("--reset"));
    }

    #[test]
    fn damaged_data_is_permanent() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let human = humanize_error(&TextcraftError::Serialization(json_err));
        assert_eq!(human.severity, Severity::Permanent);
    }
}
