// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::PathBuf;

/// Return the application data directory (not created here).
///
/// `TEXTCRAFT_DATA_DIR` wins when set, which keeps test runs and scripted
/// use away from the user's real settings.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("TEXTCRAFT_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs_fallback().join("textcraft")
}

fn dirs_fallback() -> PathBuf {
    // Try XDG data dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    // Last resort
    std::env::temp_dir()
}
