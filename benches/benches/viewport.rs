// Copyright 2025 the Gridplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use gridplane::{GridMap, MapConfig};
use gridplane_view::{Mode, PanZoomGesture, ViewportConfig, ViewportState};
use kurbo::{Point, Size, Vec2};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn gestures(n: usize, seed: u64) -> Vec<PanZoomGesture> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| PanZoomGesture {
            dx: rng.next_f64() * 40.0 - 20.0,
            dy: rng.next_f64() * 40.0 - 20.0,
            dz: rng.next_f64() * 200.0 - 100.0,
            x0: rng.next_f64() * 1280.0,
            y0: rng.next_f64() * 720.0,
            is_right: false,
        })
        .collect()
}

fn config() -> ViewportConfig {
    ViewportConfig::default()
        .with_size(Size::new(1280.0, 720.0))
        .with_zoom_limits(0.01, 100.0)
        .with_mode(Mode::Grab)
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("gridplane_view");
    let stream = gestures(1_000, 0x5eed);

    group.bench_function("process_gesture(n=1000)", |b| {
        b.iter_batched(
            || ViewportState::new(config()),
            |mut vp| {
                for g in &stream {
                    vp.process_gesture(*g);
                }
                black_box(vp.center())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("process_gesture_observed(n=1000)", |b| {
        b.iter_batched(
            || {
                let mut vp = ViewportState::new(config());
                vp.observe(|e| {
                    black_box(e);
                });
                vp
            },
            |mut vp| {
                for g in &stream {
                    vp.process_gesture(*g);
                }
                black_box(vp.revision())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("map_panzoom(n=100)", |b| {
        b.iter_batched(
            || GridMap::new(MapConfig::default().with_viewport(config())),
            |mut map| {
                for g in &stream[..100] {
                    map.panzoom(*g);
                }
                black_box(map.origin_pixel())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("map_pan_only(n=100)", |b| {
        b.iter_batched(
            || GridMap::new(MapConfig::default().with_viewport(config())),
            |mut map| {
                for i in 0..100 {
                    map.panzoom(PanZoomGesture::pan(Vec2::new(f64::from(i % 7) - 3.0, 1.0)));
                }
                black_box(map.pixel_to_value(Point::new(640.0, 360.0)))
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
