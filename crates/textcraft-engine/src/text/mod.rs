// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text scanning primitives shared by the transforms — whole-word matching
// and sentence segmentation.

pub mod sentences;
pub mod words;

pub use sentences::sentences;
pub use words::whole_word;
