use criterion::*;
use epistasis::dataset::Dataset;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn toy_dataset(n_snps: usize, n_cases: usize, n_ctrls: usize) -> Dataset {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut next_col = |rng: &mut SmallRng, n: usize| -> Vec<u8> {
        (0..n).map(|_| rng.gen_range(0..3)).collect()
    };
    let cases: Vec<Vec<u8>> = (0..n_snps).map(|_| next_col(&mut rng, n_cases)).collect();
    let ctrls: Vec<Vec<u8>> = (0..n_snps).map(|_| next_col(&mut rng, n_ctrls)).collect();
    Dataset::from_columns(&cases, &ctrls)
}

pub fn combine_benchmark(c: &mut Criterion) {
    let ds = toy_dataset(10, 2000, 2000);
    let mut group = c.benchmark_group("genotype-combine");
    group.bench_function("order1-combine-to-order2", |b| {
        b.iter(|| black_box(ds.snp(0).combine(ds.snp(1))))
    });
    group.bench_function("order1-combine-and-popcount", |b| {
        b.iter(|| black_box(ds.snp(0).combine_and_popcount(ds.snp(1))))
    });
}

criterion_group!(benches, combine_benchmark);
criterion_main!(benches);
