// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — everything the command line needs besides the engine:
// locating the data directory, persisted settings, and document I/O.

pub mod app_services;
pub mod data_dir;
