// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_drag_surface::{ChildFlags, DragSurface, LocalChild, NoParents, Offsets};

fn build_surface(len: u32) -> DragSurface<u32> {
    let mut surface = DragSurface::new(Size::new(1_920.0, 1_080.0));
    for key in 0..len {
        let step = f64::from(key % 64);
        surface.insert(
            key,
            LocalChild {
                offsets: Offsets::left_top(step * 16.0, step * 8.0),
                size: Size::new(64.0, 32.0),
                flags: ChildFlags::default(),
            },
        );
    }
    surface
}

fn bench_restack(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_surface/restack");

    // Each restack shifts every child between the old and new slot, so cycling
    // the back-most child to the front touches all n children.
    for len in [16_u32, 128, 1_024, 4_096] {
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("bring_to_front", len), &len, |b, &len| {
            b.iter_batched(
                || build_surface(len),
                |mut surface| {
                    for key in 0..len {
                        black_box(surface.bring_to_front(key).ok());
                    }
                    black_box(surface);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("send_to_back", len), &len, |b, &len| {
            b.iter_batched(
                || build_surface(len),
                |mut surface| {
                    for key in (0..len).rev() {
                        black_box(surface.send_to_back(key).ok());
                    }
                    black_box(surface);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_visibility_renumber(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_surface/set_visible");

    for len in [128_u32, 1_024, 4_096] {
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_with_input(BenchmarkId::new("hide_show_even", len), &len, |b, &len| {
            b.iter_batched(
                || build_surface(len),
                |mut surface| {
                    for key in (0..len).step_by(2) {
                        black_box(surface.set_visible(key, false).ok());
                    }
                    for key in (0..len).step_by(2) {
                        black_box(surface.set_visible(key, true).ok());
                    }
                    black_box(surface);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_surface/pointer_move");
    let moves = 1_024_u32;
    group.throughput(Throughput::Elements(u64::from(moves)));

    for (name, out_of_view) in [("clamped", false), ("unclamped", true)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut surface = build_surface(64);
                    surface.set_allow_drag_out_of_view(out_of_view);
                    surface.pointer_down(0, Point::new(8.0, 8.0), &NoParents);
                    surface
                },
                |mut surface| {
                    for i in 0..moves {
                        let t = f64::from(i);
                        let position = Point::new(t * 3.0 - 400.0, t * 2.0 - 300.0);
                        black_box(surface.pointer_move(position));
                    }
                    black_box(surface.pointer_up());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_restack,
    bench_visibility_renumber,
    bench_pointer_move
);
criterion_main!(benches);
