// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Contract annotation.
//
// For each trigger keyword, in table order, every newline-terminated line
// containing the keyword as a whole word gets an annotation block inserted
// after it. Triggers run one after another over the text as already
// annotated, so text inside an earlier block can itself trigger a later
// keyword. A line without a terminating newline is never annotated.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::text::whole_word;

/// Trigger keyword → review comment. Order is significant.
pub const ANNOTATIONS: [(&str, &str); 7] = [
    (
        "term",
        "The term section defines the duration of the agreement. Check that all dates are accurate.",
    ),
    (
        "termination",
        "The termination clause sets conditions for ending the agreement. Ensure proper notice periods.",
    ),
    (
        "payment",
        "The payment section outlines financial obligations. Verify amounts and due dates.",
    ),
    (
        "confidential",
        "This confidentiality clause protects sensitive information. Review scope and duration.",
    ),
    (
        "warranty",
        "The warranty section details product/service guarantees. Check for limitations.",
    ),
    (
        "liability",
        "The liability section limits legal responsibility. Consider insurance requirements.",
    ),
    (
        "indemnification",
        "This indemnification clause allocates risk. Ensure it's balanced between parties.",
    ),
];

/// Compiled triggers with their rendered blocks, in table order.
static TRIGGERS: LazyLock<Vec<(&'static str, Regex, String)>> = LazyLock::new(|| {
    ANNOTATIONS
        .into_iter()
        .map(|(keyword, comment)| {
            let pattern = whole_word(keyword).expect("trigger keyword compiles as a literal");
            (keyword, pattern, annotation_block(comment))
        })
        .collect()
});

/// Characters that end the searchable part of a line besides `\n`.
const LINE_BREAKS: [char; 3] = ['\r', '\u{2028}', '\u{2029}'];

/// Render one annotation block body.
pub fn annotation_block(comment: &str) -> String {
    format!("[ANNOTATION: {comment}]")
}

/// Insert `block` after every newline-terminated line that `trigger` matches.
fn annotate_with(text: &str, trigger: &Regex, block: &str) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut hits = 0;
    let mut rest = text;

    while let Some(nl) = rest.find('\n') {
        let line = &rest[..nl];
        // Only the stretch after the last carriage return or Unicode line
        // separator is searched.
        let searchable = line.rsplit(LINE_BREAKS).next().unwrap_or(line);
        out.push_str(line);
        if trigger.is_match(searchable) {
            out.push_str("\n\n");
            out.push_str(block);
            out.push('\n');
            hits += 1;
        }
        out.push('\n');
        rest = &rest[nl + 1..];
    }
    out.push_str(rest);

    (out, hits)
}

/// Annotate `text` with review comments for common contract clauses.
pub fn annotate_document(text: &str) -> String {
    let mut annotated = text.to_owned();
    for (keyword, trigger, block) in TRIGGERS.iter() {
        let (next, hits) = annotate_with(&annotated, trigger, block);
        if hits > 0 {
            debug!(keyword, hits, "annotations inserted");
        }
        annotated = next;
    }
    annotated
}
