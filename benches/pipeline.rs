//! Benchmarks for the dragon pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dragon::{colorize, rasterize, Colour, PathWalker, Stroke, TurnSequence};

fn dragon(iterations: u32) -> TurnSequence {
    TurnSequence::generate(iterations, &TurnSequence::default_seed()).unwrap()
}

// -- Curve benchmarks --

fn bench_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve");
    let seed = TurnSequence::default_seed();

    group.bench_function("generate_12", |b| {
        b.iter(|| TurnSequence::generate(black_box(12), &seed).unwrap())
    });

    group.bench_function("generate_16", |b| {
        b.iter(|| TurnSequence::generate(black_box(16), &seed).unwrap())
    });

    let medium = dragon(12);
    let large = dragon(16);

    group.bench_function("walk_12", |b| {
        b.iter(|| PathWalker::new().walk(black_box(&medium)))
    });

    group.bench_function("walk_16", |b| {
        b.iter(|| PathWalker::new().walk(black_box(&large)))
    });

    group.finish();
}

// -- Rendering benchmarks --

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let path = PathWalker::new().walk(&dragon(14));

    group.bench_function("rasterize_14", |b| {
        b.iter(|| rasterize(black_box(&path), 1, Stroke::Mark).unwrap())
    });

    group.bench_function("rasterize_14_stretch_4", |b| {
        b.iter(|| rasterize(black_box(&path), 4, Stroke::Mark).unwrap())
    });

    let grid = rasterize(&path, 1, Stroke::Mark).unwrap();

    group.bench_function("colorize_14", |b| {
        b.iter(|| colorize(black_box(&grid), Colour::SKY, Colour::SLATE))
    });

    group.finish();
}

criterion_group!(benches, bench_curve, bench_rendering);
criterion_main!(benches);
