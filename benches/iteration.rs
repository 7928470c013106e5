use criterion::{black_box, criterion_group, criterion_main, Criterion};
use packed_bitset::Set;

const N: usize = 200_000;

fn iteration(set: &Set<u64>) -> usize {
    set.iter().count()
}

pub fn bench_iter(c: &mut Criterion) {
    let mut set: Set<u64> = Set::new(N);
    for i in (0..N).step_by(64) {
        set.insert(i);
    }

    c.bench_function("packed_bitset iter", |b| b.iter(|| iteration(black_box(&set))));
}

criterion_group!(benches_iter, bench_iter);
criterion_main!(benches_iter);
