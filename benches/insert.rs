mod common;

use common::bench;
use criterion::{criterion_group, criterion_main, Criterion};
use packed_bitset::Set;
use std::collections::BTreeSet;

const N: usize = 100_000;

fn packed_insert(count: usize) -> Set<u64> {
    let mut set = Set::new(N);
    for i in (0..N).step_by(N / count) {
        set.insert(i);
    }
    set
}

fn btreeset_insert(count: usize) -> BTreeSet<usize> {
    let mut set = BTreeSet::new();
    for i in (0..N).step_by(N / count) {
        set.insert(i);
    }
    set
}

pub fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for count in [100usize, 1_000, 10_000] {
        bench(&mut group, "packed_bitset", count, &count, |&count| packed_insert(count));
        bench(&mut group, "btreeset", count, &count, |&count| btreeset_insert(count));
    }
    group.finish();
}

criterion_group!(benches_insert, bench_insert);
criterion_main!(benches_insert);
