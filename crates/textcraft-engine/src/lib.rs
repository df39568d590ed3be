// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// textcraft-engine — Deterministic document transforms for TextCraft.
//
// Six independent string-to-string routines (plain-language rewrite, table of
// contents, line deduplication, clause annotation, FAQ, executive summary)
// behind a single total dispatcher. Nothing here fails, allocates shared
// state, or performs I/O.

pub mod annotate;
pub mod dedup;
pub mod dispatch;
pub mod faq;
pub mod simplify;
pub mod summary;
pub mod text;
pub mod toc;

// Re-export the entry points so callers can use `textcraft_engine::process` etc.
pub use annotate::annotate_document;
pub use dedup::remove_duplicate_lines;
pub use dispatch::{process, process_named};
pub use faq::generate_faq;
pub use simplify::simplify_language;
pub use summary::create_executive_summary;
pub use toc::generate_toc;
