// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Switchyard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switchyard::layout::{compute_layout, LayoutParams};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable): group `layout.columns`, case IDs from `fixtures::Case::id`.
fn benches_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout.columns");
    for case in fixtures::Case::ALL {
        let config = fixtures::fixture(case);
        let params = LayoutParams::from(&config.params);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let layout = compute_layout(black_box(&config.columns), black_box(1400.0), &params);
                black_box(layout.canvas_height())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);
