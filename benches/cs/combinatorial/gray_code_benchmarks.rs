use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graycode::cs::combinatorial::{gray_transition_positions, GrayTransitions};

fn bench_gray_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("gray_transitions");

    for n in [4usize, 10, 16] {
        group.bench_with_input(BenchmarkId::new("vector", n), &n, |b, &n| {
            b.iter(|| gray_transition_positions(black_box(n)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("iterator", n), &n, |b, &n| {
            b.iter(|| {
                GrayTransitions::new(black_box(n))
                    .unwrap()
                    .map(u64::from)
                    .sum::<u64>()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gray_transitions);
criterion_main!(benches);
