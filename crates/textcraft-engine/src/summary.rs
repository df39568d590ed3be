// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Extractive executive summary.

use tracing::debug;

use crate::text::sentences;

pub const SUMMARY_HEADER: &str = "# EXECUTIVE SUMMARY";

pub const SUMMARY_NOTE: &str = "[Note: This is an automatically generated summary. The full document contains additional important details.]";

/// Sentences mentioning any of these (case-insensitively) are kept.
pub const KEY_TERMS: [&str; 7] = [
    "important",
    "significant",
    "critical",
    "essential",
    "conclude",
    "summary",
    "result",
];

const MAX_SUMMARY_SENTENCES: usize = 10;

/// Pick the summary sentences of `text`, trimmed, in assembly order.
///
/// The first sentence always leads. Then come paragraph openers: sentences
/// whose predecessor fragment ends in a blank line. Then key-term sentences
/// not already picked. At most ten are kept.
pub fn summary_sentences(text: &str) -> Vec<&str> {
    let all = sentences(text);
    let mut picked: Vec<&str> = Vec::new();

    if let Some(first) = all.first() {
        picked.push(first.trim());
    }

    // Fragments end at their punctuation, so this only fires for fragments
    // that somehow end in a blank line. Kept as is.
    for pair in all.windows(2) {
        if pair[0].ends_with("\n\n") || pair[0].ends_with("\r\n\r\n") {
            picked.push(pair[1].trim());
        }
    }

    for sentence in &all {
        let lower = sentence.to_lowercase();
        let trimmed = sentence.trim();
        if KEY_TERMS.iter().any(|term| lower.contains(term)) && !picked.contains(&trimmed) {
            picked.push(trimmed);
        }
    }

    picked.truncate(MAX_SUMMARY_SENTENCES);
    picked
}

/// Build the executive summary for `text`.
pub fn create_executive_summary(text: &str) -> String {
    let picked = summary_sentences(text);
    debug!(sentences = picked.len(), "executive summary extracted");
    format!(
        "{SUMMARY_HEADER}\n\n{}\n\n{SUMMARY_NOTE}",
        picked.join("\n\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sentence_always_leads() {
        let picked = summary_sentences("  Opening line here. Nothing else matters.");
        assert_eq!(picked, vec!["Opening line here."]);
    }

    #[test]
    fn key_terms_are_added_in_document_order() {
        let text = "Intro. Filler. This is IMPORTANT. More filler. The result was good.";
        assert_eq!(
            summary_sentences(text),
            vec!["Intro.", "This is IMPORTANT.", "The result was good."]
        );
    }

    #[test]
    fn first_sentence_is_not_repeated_for_key_terms() {
        let text = "A critical opening. A significant follow-up.";
        assert_eq!(
            summary_sentences(text),
            vec!["A critical opening.", "A significant follow-up."]
        );
    }

    #[test]
    fn duplicates_are_compared_after_trimming() {
        let text = "Essential point. Essential point.\n\nEssential point.";
        assert_eq!(summary_sentences(text), vec!["Essential point."]);
    }

    #[test]
    fn never_more_than_ten() {
        let text: String = (0..25).map(|i| format!("Critical item {i}. ")).collect();
        let picked = summary_sentences(&text);
        assert_eq!(picked.len(), 10);
        assert_eq!(picked[0], "Critical item 0.");
        assert_eq!(picked[9], "Critical item 9.");
    }

    #[test]
    fn wraps_with_header_and_note() {
        let out = create_executive_summary("We conclude here. Bye.");
        assert_eq!(
            out,
            format!("# EXECUTIVE SUMMARY\n\nWe conclude here.\n\n{SUMMARY_NOTE}")
        );
    }

    #[test]
    fn no_sentences_gives_empty_body() {
        let out = create_executive_summary("no terminator");
        assert_eq!(out, format!("# EXECUTIVE SUMMARY\n\n\n\n{SUMMARY_NOTE}"));
    }
}
