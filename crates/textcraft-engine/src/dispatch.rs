// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Mode dispatcher — the single entry point into the engine.

use textcraft_core::types::{ProcessingMode, parse_mode};
use tracing::debug;

use crate::{annotate, dedup, faq, simplify, summary, toc};

/// Transform `text` according to `mode`.
///
/// Empty input yields empty output whatever the mode; `None` returns the
/// input unchanged. Total over all inputs.
pub fn process(text: &str, mode: Option<ProcessingMode>) -> String {
    if text.is_empty() {
        return String::new();
    }
    let Some(mode) = mode else {
        return text.to_owned();
    };

    let output = match mode {
        ProcessingMode::Simplify => simplify::simplify_language(text),
        ProcessingMode::Toc => toc::generate_toc(text),
        ProcessingMode::Deduplicate => dedup::remove_duplicate_lines(text),
        ProcessingMode::Annotate => annotate::annotate_document(text),
        ProcessingMode::Faq => faq::generate_faq(text),
        ProcessingMode::Summary => summary::create_executive_summary(text),
    };

    debug!(
        mode = %mode,
        input_bytes = text.len(),
        output_bytes = output.len(),
        "document processed"
    );
    output
}

/// Like [`process`], with the mode given by identifier. Unrecognised names
/// select no transformation.
pub fn process_named(text: &str, mode: &str) -> String {
    process(text, parse_mode(mode))
}
