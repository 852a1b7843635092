//! Checks the depth-first worker against a brute-force combine chain built
//! directly off the public genotype API, across several search orders.

use epistasis::combination::Distribution;
use epistasis::dataset::Dataset;
use epistasis::mi::mutual_information;
use epistasis::search::worker::SearchWorker;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_dataset(n_snps: usize, n_cases: usize, n_ctrls: usize, seed: u64) -> Dataset {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut next_col = |rng: &mut SmallRng, n: usize| -> Vec<u8> {
        (0..n).map(|_| rng.gen_range(0..3)).collect()
    };
    let cases: Vec<Vec<u8>> = (0..n_snps).map(|_| next_col(&mut rng, n_cases)).collect();
    let ctrls: Vec<Vec<u8>> = (0..n_snps).map(|_| next_col(&mut rng, n_ctrls)).collect();
    Dataset::from_columns(&cases, &ctrls)
}

/// Brute-force score of one combination: chain `combine` across all but the
/// last index, then `combine_and_popcount` the last, scoring via mutual
/// information directly — independent of `SearchWorker`'s internals.
fn brute_force_score(ds: &Dataset, combo: &[usize]) -> f32 {
    let mut table = ds.snp(combo[0]).clone();
    for &idx in &combo[1..combo.len() - 1] {
        table = table.combine(ds.snp(idx));
    }
    let contingency = table.combine_and_popcount(ds.snp(*combo.last().unwrap()));
    mutual_information(&contingency)
}

fn check_order(ds: &Dataset, order: usize) {
    let prefixes = Distribution::full(ds.n_snps(), order - 1);
    let total = Distribution::full(ds.n_snps(), order).count();
    let worker = SearchWorker::new(ds, order);
    let top = worker.run(prefixes, total.max(1));
    let results = top.into_sorted_vec();
    assert_eq!(results.len(), total);
    for r in &results {
        assert_eq!(r.combination.len(), order);
        let expected = brute_force_score(ds, &r.combination);
        assert!((r.score - expected).abs() < 1e-5);
    }
}

#[test]
fn worker_scores_match_brute_force_for_order_two() {
    let ds = random_dataset(6, 20, 20, 1);
    check_order(&ds, 2);
}

#[test]
fn worker_scores_match_brute_force_for_order_three() {
    let ds = random_dataset(7, 20, 20, 2);
    check_order(&ds, 3);
}

#[test]
fn worker_scores_match_brute_force_for_order_four() {
    let ds = random_dataset(8, 15, 15, 3);
    check_order(&ds, 4);
}

#[test]
fn run_produces_a_topn_bounded_by_noutputs() {
    let ds = random_dataset(10, 20, 20, 4);
    let worker = SearchWorker::new(&ds, 2);
    let top = worker.run(Distribution::full(ds.n_snps(), 1), 5);
    assert!(top.len() <= 5);
}

#[test]
fn every_prefix_is_rebuilt_independently_across_a_full_sweep() {
    // Regression coverage for the per-prefix rebuild model: every prefix in
    // the distribution must yield its full complement of trailing leaves,
    // with no state leaking between consecutive prefixes.
    let ds = random_dataset(9, 15, 15, 5);
    let order = 3;
    let total = Distribution::full(ds.n_snps(), order).count();
    let worker = SearchWorker::new(&ds, order);
    let top = worker.run(Distribution::full(ds.n_snps(), order - 1), total);
    assert_eq!(top.len(), total);
}
