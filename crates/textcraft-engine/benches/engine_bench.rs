// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the textcraft-engine transforms.
// Every mode runs over the same synthetic contract so the numbers are
// comparable across routines.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use textcraft_core::ProcessingMode;
use textcraft_engine::process;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A contract-shaped document of roughly 40 KB: numbered sections with
/// headings, legal boilerplate, repeated lines and every annotation keyword.
fn synthetic_contract() -> String {
    let mut doc = String::from("MASTER SERVICES AGREEMENT\n\n");
    for section in 1..=60 {
        doc.push_str(&format!("Section {section} Obligations\n"));
        doc.push_str(
            "Hereinafter the Supplier shall deliver the services pursuant to the schedule. \
             The payment is due within thirty days of invoice.\n",
        );
        doc.push_str(
            "Notwithstanding the foregoing, confidential information must be protected. \
             This warranty is important to both parties.\n",
        );
        doc.push_str("Liability and indemnification are capped as set out herein.\n");
        doc.push_str("The term of this agreement is significant.\n\n");
    }
    doc
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Benchmark each processing mode on the synthetic contract.
fn bench_modes(c: &mut Criterion) {
    let doc = synthetic_contract();
    let mut group = c.benchmark_group("process");

    for mode in ProcessingMode::ALL {
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| black_box(process(black_box(&doc), Some(mode))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
