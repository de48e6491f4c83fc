//! Criterion micro-benchmarks for the feature-layer codec and observation
//! assembly.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use herald_bench::{reference_frame, reference_translator};
use herald_obs::unpack_plane;
use herald_test_utils::solid_plane;

fn bench_unpack_1bpp(c: &mut Criterion) {
    let plane = solid_plane(1, 84, 84, 1);
    c.bench_function("unpack_plane_1bpp_84x84", |b| {
        b.iter(|| black_box(unpack_plane(black_box(&plane), "creep").unwrap()));
    });
}

fn bench_unpack_32bpp(c: &mut Criterion) {
    let plane = solid_plane(32, 84, 84, 1234);
    c.bench_function("unpack_plane_32bpp_84x84", |b| {
        b.iter(|| black_box(unpack_plane(black_box(&plane), "unit_hit_points").unwrap()));
    });
}

fn bench_observe(c: &mut Criterion) {
    let mut translator = reference_translator();
    let frame = reference_frame();
    c.bench_function("observe_84_64_feature_frame", |b| {
        b.iter(|| black_box(translator.observe(black_box(&frame)).unwrap()));
    });
}

criterion_group!(benches, bench_unpack_1bpp, bench_unpack_32bpp, bench_observe);
criterion_main!(benches);
