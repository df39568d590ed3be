// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language rewrite of legal text.
//
// Each legal term is replaced as a whole word, case-insensitively, in table
// order; later entries see the output of earlier ones. Afterwards every
// sentence terminator followed by whitespace becomes a paragraph break.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::text::whole_word;

pub const SIMPLIFIED_BANNER: &str = "[SIMPLIFIED VERSION]";

pub const SIMPLIFIED_NOTE: &str = "[Note: This is an automatically simplified version of the original legal text. Please consult the original document for legal purposes.]";

/// Legal term → plain-language replacement. Order is significant.
pub const LEGAL_TERMS: [(&str, &str); 14] = [
    ("hereinafter", "from now on"),
    ("aforementioned", "previously mentioned"),
    ("pursuant to", "according to"),
    ("in accordance with", "following"),
    ("notwithstanding", "despite"),
    ("heretofore", "until now"),
    ("therein", "in that"),
    ("thereto", "to that"),
    ("thereafter", "after that"),
    ("whereby", "by which"),
    ("wherein", "in which"),
    ("inter alia", "among other things"),
    ("shall", "will"),
    ("herein", "in this document"),
];

static LEGAL_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    LEGAL_TERMS
        .into_iter()
        .map(|(term, replacement)| {
            let pattern = whole_word(term).expect("legal term compiles as a literal");
            (pattern, replacement)
        })
        .collect()
});

/// A terminator followed by whitespace. The class is spelled out so that
/// U+0085 does not count as a gap while U+FEFF does.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([.!?])[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("sentence break pattern is valid")
});

/// Rewrite `text` in plain language and wrap it with the banner and note.
pub fn simplify_language(text: &str) -> String {
    let mut simplified = text.to_owned();
    for (pattern, replacement) in LEGAL_PATTERNS.iter() {
        simplified = pattern
            .replace_all(&simplified, NoExpand(*replacement))
            .into_owned();
    }

    let broken = SENTENCE_BREAK.replace_all(&simplified, "${1}\n\n");
    debug!(
        input_bytes = text.len(),
        output_bytes = broken.len(),
        "legal language simplified"
    );

    format!("{SIMPLIFIED_BANNER}\n\n{broken}\n\n{SIMPLIFIED_NOTE}")
}
