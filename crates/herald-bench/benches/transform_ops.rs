//! Criterion micro-benchmarks for coordinate transform chains.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use herald_core::Point;
use herald_transform::{Chain, Linear, PixelToCoord, Transform};

fn world_to_screen_chain() -> Chain {
    Chain::new(vec![
        Box::new(Linear::new(Point::new(1.0, -1.0), Point::new(0.0, 64.0)).unwrap()),
        Box::new(Linear::translation(Point::new(-16.0, -16.0))),
        Box::new(Linear::new(Point::new(3.5, 3.5), Point::new(42.0, 42.0)).unwrap()),
        Box::new(PixelToCoord),
    ])
}

fn bench_chain_fwd(c: &mut Criterion) {
    let chain = world_to_screen_chain();
    c.bench_function("chain_fwd_pt", |b| {
        b.iter(|| black_box(chain.fwd_pt(black_box(Point::new(23.25, 41.75)))));
    });
}

fn bench_chain_roundtrip(c: &mut Criterion) {
    let chain = world_to_screen_chain();
    c.bench_function("chain_roundtrip", |b| {
        b.iter(|| {
            let fwd = chain.fwd_pt(black_box(Point::new(23.25, 41.75)));
            black_box(chain.back_pt(fwd))
        });
    });
}

criterion_group!(benches, bench_chain_fwd, bench_chain_roundtrip);
criterion_main!(benches);
