use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use molview::io::molfile;
use molview::renderer::geometry::build_molecule_group;
use molview::renderer::impostor::PreparedInstances;

const ASPIRIN: &str = include_str!("../assets/molecules/aspirin.mol");

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse_aspirin", |b| {
        b.iter(|| black_box(molfile::parse(black_box(ASPIRIN))))
    });
}

fn build_benchmark(c: &mut Criterion) {
    let molecule = molfile::parse(ASPIRIN).unwrap();
    c.bench_function("build_aspirin_group", |b| {
        b.iter(|| black_box(build_molecule_group(black_box(&molecule))))
    });

    let group = build_molecule_group(&molecule);
    c.bench_function("pack_aspirin_instances", |b| {
        b.iter(|| black_box(PreparedInstances::from_group(black_box(&group))))
    });
}

criterion_group!(benches, parse_benchmark, build_benchmark);
criterion_main!(benches);
