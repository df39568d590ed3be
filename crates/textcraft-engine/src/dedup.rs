// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Duplicate line removal.

use std::collections::HashSet;

use tracing::debug;

pub const DEDUP_BANNER: &str = "[DUPLICATE REMOVAL SUMMARY]";

/// Lines of `text` with repeats dropped; the first occurrence keeps its place.
///
/// Lines are split on `\n` only and compared exactly, so `"a"`, `"a "` and
/// `"A"` are three different lines. Empty lines are lines too.
pub fn unique_lines(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    text.split('\n').filter(|line| seen.insert(*line)).collect()
}

/// Remove duplicate lines and prepend a summary banner.
pub fn remove_duplicate_lines(text: &str) -> String {
    let total = text.split('\n').count();
    let unique = unique_lines(text);
    let removed = total - unique.len();
    debug!(total, removed, "duplicate lines removed");

    let noun = if removed == 1 { "line" } else { "lines" };
    format!(
        "{DEDUP_BANNER}\nRemoved {removed} duplicate {noun}.\n\n{}",
        unique.join("\n")
    )
}
