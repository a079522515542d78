// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gridplane_axis::{Axis, LabelSpec, LineSpec, TickSpec};
use gridplane_grid::{GridFrame, GridPrimitive, HeuristicTextMeasurer};
use kurbo::Size;

const SHAPES: [(f64, f64); 3] = [(320.0, 240.0), (1280.0, 720.0), (3840.0, 2160.0)];

fn labeled_axes() -> (Axis, Axis) {
    (
        Axis::horizontal().with_labels(LabelSpec::Values),
        Axis::vertical().with_labels(LabelSpec::Values),
    )
}

fn keyed_axes(n: usize) -> (Axis, Axis) {
    let ticks: Vec<(String, f64)> = (0..n).map(|i| (format!("{}", i as f64 * 7.5), 6.0)).collect();
    let labels: Vec<(String, String)> = (0..n)
        .map(|i| (format!("{}", i as f64 * 7.5), format!("k{i}")))
        .collect();
    (
        Axis::horizontal()
            .with_ticks(TickSpec::Keyed(ticks.clone()))
            .with_labels(LabelSpec::Keyed(labels.clone())),
        Axis::vertical()
            .with_lines(LineSpec::Off)
            .with_ticks(TickSpec::Keyed(ticks))
            .with_labels(LabelSpec::Keyed(labels)),
    )
}

fn bench_grid_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("gridplane_grid");

    for (w, h) in SHAPES {
        let shape = Size::new(w, h);
        let (x, y) = labeled_axes();
        group.bench_function(format!("compute(auto,{w}x{h})"), |b| {
            b.iter(|| black_box(GridFrame::compute(black_box(&x), black_box(&y), shape)));
        });

        let frame = GridFrame::compute(&x, &y, shape);
        group.bench_function(format!("primitives(auto,{w}x{h})"), |b| {
            b.iter(|| black_box(frame.primitives(&HeuristicTextMeasurer)));
        });

        let mut out: Vec<GridPrimitive> = Vec::new();
        group.bench_function(format!("render_into(auto,{w}x{h})"), |b| {
            b.iter(|| {
                frame.render_into(&mut out, &HeuristicTextMeasurer);
                black_box(out.len())
            });
        });
    }

    for n in [16_usize, 256] {
        let (x, y) = keyed_axes(n);
        group.bench_function(format!("compute(keyed,n={n})"), |b| {
            b.iter(|| black_box(GridFrame::compute(&x, &y, Size::new(1280.0, 720.0))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grid_frame);
criterion_main!(benches);
