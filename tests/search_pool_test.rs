use epistasis::combination::Distribution;
use epistasis::dataset::Dataset;
use epistasis::search::pool;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn toy_dataset(n_snps: usize, n_cases: usize, n_ctrls: usize, seed: u64) -> Dataset {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut next_col = |rng: &mut SmallRng, n: usize| -> Vec<u8> {
        (0..n).map(|_| rng.gen_range(0..3)).collect()
    };
    let cases: Vec<Vec<u8>> = (0..n_snps).map(|_| next_col(&mut rng, n_cases)).collect();
    let ctrls: Vec<Vec<u8>> = (0..n_snps).map(|_| next_col(&mut rng, n_ctrls)).collect();
    Dataset::from_columns(&cases, &ctrls)
}

#[test]
fn single_and_multi_threaded_runs_agree_on_the_winning_set() {
    let ds = toy_dataset(10, 20, 20, 11);
    let order = 2;
    let base = Distribution::full(ds.n_snps(), order - 1);
    let mut one = pool::run(&ds, &base, order, 1, 8).into_sorted_vec();
    let base = Distribution::full(ds.n_snps(), order - 1);
    let mut many = pool::run(&ds, &base, order, 4, 8).into_sorted_vec();

    one.sort_by(|a, b| a.combination.cmp(&b.combination));
    many.sort_by(|a, b| a.combination.cmp(&b.combination));

    assert_eq!(one.len(), many.len());
    for (a, b) in one.iter().zip(many.iter()) {
        assert_eq!(a.combination, b.combination);
        assert!((a.score - b.score).abs() < 1e-5);
    }
}

#[test]
fn thread_count_does_not_change_result_count() {
    let ds = toy_dataset(9, 15, 15, 12);
    let order = 3;
    for threads in [1usize, 2, 3, 5] {
        let base = Distribution::full(ds.n_snps(), order - 1);
        let top = pool::run(&ds, &base, order, threads, 10);
        assert!(top.len() <= 10);
    }
}
