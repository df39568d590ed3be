// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// FAQ generation.
//
// Mid-length sentences are turned into questions by splitting on a copula or
// modal ("is", "are", "must", "should"); each question is answered with the
// first sentence of the document sharing a word of four or more letters with
// it. A closing question guesses the purpose of the whole document.

use tracing::debug;

use crate::text::sentences;

pub const FAQ_HEADER: &str = "# FREQUENTLY ASKED QUESTIONS";

pub const FALLBACK_ANSWER: &str = "Please refer to the document for details on this topic.";

/// Sentences considered, exclusive bounds in characters.
const MIN_SENTENCE_CHARS: usize = 30;
const MAX_SENTENCE_CHARS: usize = 200;
const MAX_QUESTIONS: usize = 10;

/// Marker → question lead, checked in this order.
const QUESTION_MARKERS: [(&str, &str); 4] = [
    (" is ", "What is "),
    (" are ", "What are "),
    (" must ", "Why must "),
    (" should ", "Why should "),
];

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Turn a statement into a question, if it contains one of the markers.
pub fn question_for(sentence: &str) -> Option<String> {
    let sentence = sentence.trim();
    QUESTION_MARKERS.into_iter().find_map(|(marker, lead)| {
        let at = sentence.find(marker)?;
        let tail = sentence[at + marker.len()..].trim_end_matches(TERMINATORS);
        Some(format!("{lead}{tail}?"))
    })
}

/// Words of a question worth searching for: lower-cased, ASCII punctuation
/// and all non-ASCII symbols stripped, split on spaces, longer than three
/// characters.
fn keywords(question: &str) -> Vec<String> {
    let cleaned: String = question
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    cleaned
        .split(' ')
        .filter(|word| word.chars().count() > 3)
        .map(str::to_owned)
        .collect()
}

/// First sentence of `source` mentioning any keyword of `question`.
pub fn answer_for(question: &str, source: &str) -> String {
    let words = keywords(question);
    sentences(source)
        .into_iter()
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            words.iter().any(|word| lower.contains(word.as_str()))
        })
        .map(|sentence| sentence.trim().to_owned())
        .unwrap_or_else(|| FALLBACK_ANSWER.to_owned())
}

/// Best guess at what kind of document `text` is.
pub fn guess_document_purpose(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    let has = |needle: &str| lower.contains(needle);

    if has("agreement") && has("parties") {
        "outline an agreement between parties"
    } else if has("policy") && (has("privacy") || has("security")) {
        "establish policies or guidelines"
    } else if has("report") && (has("findings") || has("results")) {
        "present findings or results"
    } else {
        "provide important information"
    }
}

/// Build the FAQ for `text`.
pub fn generate_faq(text: &str) -> String {
    let questions: Vec<String> = sentences(text)
        .into_iter()
        .filter(|sentence| {
            let len = sentence.chars().count();
            len > MIN_SENTENCE_CHARS && len < MAX_SENTENCE_CHARS
        })
        .take(MAX_QUESTIONS)
        .filter_map(question_for)
        .collect();
    debug!(questions = questions.len(), "faq questions generated");

    let mut faq = format!("{FAQ_HEADER}\n\n");
    for (index, question) in questions.iter().enumerate() {
        let n = index + 1;
        faq.push_str(&format!("Q{n}: {question}\n"));
        faq.push_str(&format!("A{n}: {}\n\n", answer_for(question, text)));
    }

    let n = questions.len() + 1;
    faq.push_str(&format!("Q{n}: What is the purpose of this document?\n"));
    faq.push_str(&format!(
        "A{n}: This document appears to {}.\n\n",
        guess_document_purpose(text)
    ));
    faq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_from_markers() {
        assert_eq!(
            question_for("The deadline is January 1st."),
            Some("What is January 1st?".into())
        );
        assert_eq!(
            question_for(" Invoices are payable within thirty days!! "),
            Some("What are payable within thirty days?".into())
        );
        assert_eq!(
            question_for("Each party must keep records."),
            Some("Why must keep records?".into())
        );
        assert_eq!(
            question_for("Tenants should report damage?"),
            Some("Why should report damage?".into())
        );
        assert_eq!(question_for("Nothing to ask here."), None);
    }

    #[test]
    fn marker_priority_beats_position() {
        // " must " comes first in the sentence, but " is " is checked first.
        assert_eq!(
            question_for("Rent must be paid when it is due."),
            Some("What is due?".into())
        );
    }

    #[test]
    fn repeated_marker_keeps_the_whole_tail() {
        // Deliberately differs from splitting on every marker occurrence,
        // which would stop at the second " is " and drop the "?".
        assert_eq!(
            question_for("The fee is due when the invoice is received."),
            Some("What is due when the invoice is received?".into())
        );
    }

    #[test]
    fn deadline_sentence_answers_itself() {
        let text = "The project deadline is January 1st for everyone.";
        let out = generate_faq(text);
        assert!(out.starts_with(
            "# FREQUENTLY ASKED QUESTIONS\n\nQ1: What is January 1st for everyone?\n"
        ));
        assert!(out.contains("A1: The project deadline is January 1st for everyone.\n\n"));
    }

    #[test]
    fn answer_prefers_first_overlapping_sentence() {
        let source = "Rent covers the flat. The deposit is held in trust by the agent.";
        // "what" counts as a keyword too; neither sentence contains it.
        assert_eq!(
            answer_for("What is held in trust by the agent?", source),
            "The deposit is held in trust by the agent."
        );
        assert_eq!(answer_for("What is xyz?", "Nothing matches."), FALLBACK_ANSWER);
    }

    #[test]
    fn keyword_extraction() {
        assert_eq!(
            keywords("What is the café's fee?"),
            vec!["what".to_owned(), "cafs".to_owned()]
        );
    }

    #[test]
    fn length_filter_and_limit() {
        let short = "It is short.";
        assert!(generate_faq(short).starts_with(
            "# FREQUENTLY ASKED QUESTIONS\n\nQ1: What is the purpose of this document?\n"
        ));

        let many: String = (0..15)
            .map(|i| format!("The clause number {i} is binding on everyone. "))
            .collect();
        let out = generate_faq(&many);
        assert!(out.contains("Q10: What is binding on everyone?"));
        assert!(out.contains("Q11: What is the purpose of this document?"));
        assert!(!out.contains("Q12:"));
    }

    #[test]
    fn sentences_without_markers_are_skipped() {
        let text = "This sentence has no usable marker words at all. The fee is one hundred dollars per month.";
        let out = generate_faq(text);
        assert!(out.contains("Q1: What is one hundred dollars per month?"));
        assert!(out.contains("Q2: What is the purpose of this document?"));
    }

    #[test]
    fn purpose_rules_in_order() {
        assert_eq!(
            guess_document_purpose("This Agreement binds both PARTIES and its privacy policy."),
            "outline an agreement between parties"
        );
        assert_eq!(
            guess_document_purpose("Our privacy policy"),
            "establish policies or guidelines"
        );
        assert_eq!(
            guess_document_purpose("Annual report with results"),
            "present findings or results"
        );
        assert_eq!(guess_document_purpose("hello"), "provide important information");
    }

    #[test]
    fn closing_question_always_present() {
        let out = generate_faq("x");
        assert_eq!(
            out,
            "# FREQUENTLY ASKED QUESTIONS\n\n\
             Q1: What is the purpose of this document?\n\
             A1: This document appears to provide important information.\n\n"
        );
    }
}
