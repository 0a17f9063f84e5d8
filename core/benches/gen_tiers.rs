use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use uncover_core::*;

const TIERS: [(&str, Coord, CellCount); 4] = [
    ("beginner", 9, 10),
    ("expert", 24, 99),
    ("dense", 24, 500),
    ("huge", 200, 8000),
];

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for (name, dim_size, hazards) in TIERS {
        let config = GameConfig::new(dim_size, hazards).unwrap();
        group.bench_with_input(BenchmarkId::new("rejection", name), &config, |b, &config| {
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| RejectionPlacer.place(black_box(config), &mut rng).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sample", name), &config, |b, &config| {
            let mut rng = SmallRng::seed_from_u64(0);
            b.iter(|| SamplePlacer.place(black_box(config), &mut rng).unwrap());
        });
    }
    group.finish();
}

fn counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting");
    for (name, dim_size, hazards) in TIERS {
        let config = GameConfig::new(dim_size, hazards).unwrap();
        let layout = RejectionPlacer
            .place(config, &mut SmallRng::seed_from_u64(0))
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &layout, |b, layout| {
            b.iter(|| CountLayer::compute(black_box(layout)));
        });
    }
    group.finish();
}

criterion_group!(benches, placement, counting);
criterion_main!(benches);
