//! Benchmarks for docking derivation.
//!
//! Compares direct derivation against the memoized table and cache paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gatewheel::{
    DockingCache, DockingTable, Gate, IdentityTable, Line, Positioning, WheelConfiguration,
    WheelOptions,
};

fn bench_single_lookup(c: &mut Criterion) {
    let identity = IdentityTable::canonical().unwrap();
    let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
    let positioning = Positioning::new(identity, &wheel);
    let table = DockingTable::build(&positioning).unwrap();
    let cache = DockingCache::new();
    let gate = Gate::new(41).unwrap();
    let line = Line::new(3).unwrap();

    let mut group = c.benchmark_group("docking_lookup");
    group.throughput(Throughput::Elements(1));

    group.bench_function("direct", |b| {
        b.iter(|| black_box(positioning.docking_data(black_box(gate), black_box(line))));
    });
    group.bench_function("table", |b| {
        b.iter(|| black_box(*table.get(black_box(gate), black_box(line))));
    });
    group.bench_function("cache", |b| {
        b.iter(|| black_box(cache.docking_data(&positioning, black_box(gate), black_box(line))));
    });

    group.finish();
}

fn bench_full_table(c: &mut Criterion) {
    let identity = IdentityTable::canonical().unwrap();
    let wheel = WheelConfiguration::new(WheelOptions::default()).unwrap();
    let positioning = Positioning::new(identity, &wheel);

    let mut group = c.benchmark_group("docking_table");
    group.throughput(Throughput::Elements(384));

    group.bench_function("build", |b| {
        b.iter(|| black_box(DockingTable::build(black_box(&positioning))));
    });

    group.finish();
}

fn bench_configuration(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_configuration");
    group.throughput(Throughput::Elements(1));

    group.bench_function("default", |b| {
        b.iter(|| black_box(WheelConfiguration::new(black_box(WheelOptions::default()))));
    });
    group.bench_function("identity_table", |b| {
        b.iter(|| {
            black_box(IdentityTable::from_entries(
                gatewheel_spec::tables::identity::GATE_BINARIES
                    .iter()
                    .map(|&(g, s)| (i64::from(g), s)),
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_lookup,
    bench_full_table,
    bench_configuration
);
criterion_main!(benches);
