use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fold_left::{fold_left, Combiner, Seed, Slot, SparseVec};

fn sparse(len: usize, stride: usize) -> SparseVec<u64> {
    (0..len)
        .map(|k| {
            if k % stride == 0 {
                Slot::Hole
            } else {
                Slot::Value(k as u64)
            }
        })
        .collect()
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold-left sum");

    for len in [1_000, 10_000, 100_000] {
        let dense: Vec<u64> = (0..len as u64).collect();

        group.bench_with_input(BenchmarkId::new("dense", len), &dense, |b, numbers| {
            b.iter(|| {
                fold_left(
                    Some(numbers),
                    Combiner::function(|acc: u64, &n, _, _| acc.wrapping_add(n)),
                    Seed::Value(0),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("sparse", len), &sparse(len, 3), |b, numbers| {
            b.iter(|| {
                fold_left(
                    Some(numbers),
                    Combiner::function(|acc: u64, &n, _, _| acc.wrapping_add(n)),
                    Seed::Omitted,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
