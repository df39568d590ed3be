// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Table of contents synthesis.
//
// Headings are guessed line by line: an all-caps line is a level-1 heading,
// a short capitalised line without a closing period is a level-2 heading.
// The "page" column is a running counter over detected headings.

use tracing::debug;

pub const TOC_HEADER: &str = "# TABLE OF CONTENTS";

const LEVEL_ONE_MAX_CHARS: usize = 100;
const LEVEL_TWO_MAX_CHARS: usize = 80;

/// A detected heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    /// 1 or 2.
    pub level: u8,
}

/// Classify one line. Surrounding whitespace is ignored.
fn classify(line: &str) -> Option<Heading> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let chars = line.chars().count();
    let level = if line.to_uppercase() == line && chars < LEVEL_ONE_MAX_CHARS {
        1
    } else if line.starts_with(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit())
        && chars < LEVEL_TWO_MAX_CHARS
        && !line.ends_with('.')
    {
        2
    } else {
        return None;
    };

    Some(Heading {
        text: line.to_owned(),
        level,
    })
}

/// All headings of `text`, in document order.
pub fn detect_headings(text: &str) -> Vec<Heading> {
    text.split('\n').filter_map(classify).collect()
}

/// Prepend a table of contents to `text`.
pub fn generate_toc(text: &str) -> String {
    let headings = detect_headings(text);
    debug!(headings = headings.len(), "table of contents synthesized");

    let mut toc = format!("{TOC_HEADER}\n\n");
    for (index, heading) in headings.iter().enumerate() {
        let indent = "  ".repeat(usize::from(heading.level) - 1);
        toc.push_str(&format!(
            "{indent}{}. {} ...... Page {}\n",
            heading.level,
            heading.text,
            index + 1
        ));
    }

    format!("{toc}\n\n---\n\n{text}")
}
