//! Benchmarks for the fixed-point core and the frame drivers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fixtrace::prelude::*;

fn bench_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed");

    let a = Fx32::from_f32(3.25);
    let b = Fx32::from_f32(-1.5);
    group.bench_function("mul", |bench| {
        bench.iter(|| black_box(a).mul(black_box(b)))
    });

    let squared = Fx32::from_f32(21.5);
    group.bench_function("sphere_sqrt", |bench| {
        bench.iter(|| sphere_sqrt(black_box(squared)))
    });

    group.finish();
}

fn bench_shade(c: &mut Criterion) {
    let mut group = c.benchmark_group("shade");

    let scene = Scene::default();
    let viewport = Viewport::default();

    group.bench_function("sphere_pixel", |bench| {
        bench.iter(|| {
            shade_pixel(
                black_box(&scene),
                black_box(&viewport),
                ViewportCoord { x: 24, y: 16 },
            )
        })
    });

    group.bench_function("sky_pixel", |bench| {
        bench.iter(|| {
            shade_pixel(
                black_box(&scene),
                black_box(&viewport),
                ViewportCoord { x: 24, y: 0 },
            )
        })
    });

    group.bench_function("floor_pixel", |bench| {
        bench.iter(|| {
            shade_pixel(
                black_box(&scene),
                black_box(&viewport),
                ViewportCoord { x: 24, y: 32 },
            )
        })
    });

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    group.sample_size(20);

    let scene = Scene::default();
    let viewport = Viewport::default();

    group.bench_function("serial", |bench| {
        bench.iter(|| {
            let mut fb = FrameBuffer::new(viewport.width as u32, viewport.out_height() as u32);
            render_frame(black_box(&scene), black_box(&viewport), &mut fb).unwrap();
            fb
        })
    });

    group.bench_function("parallel", |bench| {
        bench.iter(|| {
            let mut fb = FrameBuffer::new(viewport.width as u32, viewport.out_height() as u32);
            render_frame_parallel(black_box(&scene), black_box(&viewport), &mut fb).unwrap();
            fb
        })
    });

    group.finish();
}

criterion_group!(benches, bench_fixed, bench_shade, bench_frame);
criterion_main!(benches);
