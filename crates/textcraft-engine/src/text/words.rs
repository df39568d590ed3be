// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Whole-word, ASCII case-insensitive term patterns.
//
// Word boundaries and case folding are ASCII-only: non-ASCII characters count
// as non-word characters, so "café term" and "term—clause" both match "term",
// and "ſhall" does not match "shall".

use regex::{Regex, RegexBuilder};

/// Compile `term` as a literal matched only as a whole word, ignoring ASCII case.
pub fn whole_word(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .unicode(false)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(term: &str) -> Regex {
        whole_word(term).unwrap()
    }

    #[test]
    fn matches_whole_words_only() {
        let m = word("term");
        assert!(m.is_match("the term ends"));
        assert!(m.is_match("Term."));
        assert!(!m.is_match("termination"));
        assert!(!m.is_match("midterm"));
        assert!(!m.is_match("term_sheet"));
        assert!(!m.is_match("term2"));
    }

    #[test]
    fn ignores_ascii_case_only() {
        let m = word("shall");
        assert!(m.is_match("The Buyer SHALL pay"));
        assert!(m.is_match("ShAlL"));
        assert!(!m.is_match("ſhall"));
    }

    #[test]
    fn non_ascii_neighbours_are_boundaries() {
        let m = word("term");
        assert!(m.is_match("café term"));
        assert!(m.is_match("éterm"));
        assert!(m.is_match("term—clause"));
    }

    #[test]
    fn multi_word_terms() {
        let m = word("pursuant to");
        assert!(m.is_match("Pursuant To section 4"));
        assert!(!m.is_match("pursuant  to"));
        assert!(!m.is_match("pursuant today"));
    }

    #[test]
    fn replacement_is_left_to_right() {
        let out = word("shall").replace_all("He shall, she SHALL; shallow.", "will");
        assert_eq!(out, "He will, she will; shallow.");
    }

    #[test]
    fn metacharacters_are_literal() {
        let m = word("a.b");
        assert!(m.is_match("see a.b here"));
        assert!(!m.is_match("see axb here"));
    }

    #[test]
    fn empty_haystack() {
        assert!(!word("term").is_match(""));
    }
}
