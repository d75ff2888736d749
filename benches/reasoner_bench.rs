//! Criterion benchmarks for the relation algebra and the constraint
//! network.
//!
//! Uses synthetic inputs (all basic-relation pairs, chains of intervals) to
//! measure pure engine overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use allen_calculus::allen::AllenRelation;
use allen_calculus::network::ConstraintNetwork;

fn bench_compose(c: &mut Criterion) {
    c.bench_function("compose_all_basic_pairs", |b| {
        b.iter(|| {
            let mut acc = AllenRelation::EMPTY;
            for x in AllenRelation::BASICS {
                for y in AllenRelation::BASICS {
                    acc = acc | black_box(x).compose(black_box(y));
                }
            }
            acc
        })
    });

    c.bench_function("compose_full_full", |b| {
        b.iter(|| black_box(AllenRelation::FULL).compose(black_box(AllenRelation::FULL)))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("from_symbols", |b| {
        b.iter(|| AllenRelation::from_symbols(black_box("(pmoFDseSdfOMP)")))
    });
}

fn bench_network_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("network_chain");
    for n in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let names: Vec<String> = (0..n).map(|i| format!("iv{i}")).collect();
            b.iter(|| {
                let mut net = ConstraintNetwork::new();
                for w in names.windows(2) {
                    net.add(&w[0], &w[1], AllenRelation::PRECEDES).unwrap();
                }
                net
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compose, bench_parse, bench_network_chain);
criterion_main!(benches);
