// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_freehand::{StrokeOptions, StrokePoint, TaperOptions, compute_radii};

/// A wavy stroke with uneven spacing, so pressure keeps changing.
fn wavy_stroke(len: usize) -> Vec<StrokePoint> {
    let mut points = Vec::with_capacity(len);
    let mut prev = Point::ZERO;
    let mut running = 0.0;
    for i in 0..len {
        let t = i as f64;
        let pt = Point::new(t * (2.0 + (t * 0.07).sin()), 20.0 * (t * 0.11).sin());
        let distance = if i == 0 { 0.0 } else { pt.distance(prev) };
        running += distance;
        let pressure = 0.5 + 0.4 * (t * 0.05).cos();
        points.push(StrokePoint::new(pt, pressure, distance, running));
        prev = pt;
    }
    points
}

fn bench_compute_radii(c: &mut Criterion) {
    let mut group = c.benchmark_group("freehand/compute_radii");

    let simulated = StrokeOptions::new(8.0)
        .with_start(TaperOptions::start().with_taper(true))
        .with_end(TaperOptions::end().with_taper(true));
    let device = simulated.with_simulate_pressure(false);

    // Typical strokes are tens to low hundreds of points; long ones come from
    // slow handwriting or high-rate tablets.
    for len in [32usize, 128, 512, 4_096] {
        let points = wavy_stroke(len);
        group.throughput(Throughput::Elements(len as u64));

        for (name, options) in [("simulated", &simulated), ("device", &device)] {
            group.bench_with_input(BenchmarkId::new(name, len), &points, |b, points| {
                b.iter_batched(
                    || points.clone(),
                    |mut points| {
                        let info = compute_radii(&mut points, options);
                        black_box((info, points));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compute_radii);
criterion_main!(benches);
