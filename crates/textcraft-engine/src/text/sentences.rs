// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sentence segmentation by terminal punctuation.

use std::sync::LazyLock;

use regex::Regex;

/// A run of non-terminators followed by one or more of `.`, `!`, `?`.
static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Split `text` into sentence fragments, in document order.
///
/// Fragments are returned untrimmed: leading whitespace (including blank
/// lines) belongs to the sentence it precedes, and each fragment ends with
/// its terminal punctuation. Text after the last terminator is dropped, as
/// is any terminator run with nothing before it.
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE.find_iter(text).map(|m| m.as_str()).collect()
}
