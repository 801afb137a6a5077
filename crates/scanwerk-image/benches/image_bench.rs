// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the scanwerk-image crate: the per-frame enhance
// chain and the Sobel edge detector at live-preview resolution.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scanwerk_core::raster::{self, Raster};
use scanwerk_image::{adjust_contrast, desaturate, detect_edges};

/// A 480x360 raster with a diagonal gradient — roughly what a live preview
/// frame looks like after the geometric scaler.
fn preview_raster() -> Raster {
    let (width, height) = (480u32, 360u32);
    let mut r = Raster::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) % 256) as u8;
            r.set(x, y, raster::pack(255, v, v / 2, 255 - v));
        }
    }
    r
}

fn bench_enhance_chain(c: &mut Criterion) {
    let input = preview_raster();
    c.bench_function("desaturate + contrast 1.8 (480x360)", |b| {
        b.iter(|| {
            let gray = desaturate(black_box(&input));
            black_box(adjust_contrast(&gray, 1.8));
        });
    });
}

fn bench_edge_detection(c: &mut Criterion) {
    let gray = desaturate(&preview_raster());
    let prepared = adjust_contrast(&gray, 2.2);
    c.bench_function("detect_edges (480x360)", |b| {
        b.iter(|| {
            black_box(detect_edges(black_box(&prepared)));
        });
    });
}

criterion_group!(benches, bench_enhance_chain, bench_edge_detection);
criterion_main!(benches);
