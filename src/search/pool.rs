//! C8: partitions a rank's share of the combination space across a fixed
//! pool of OS threads and joins their independent top-n results.
//!
//! Grounded in the teacher's `Permutate::call_multi_thread`
//! (`src/strategy/permutate.rs`), which fans work out over
//! `crossbeam::thread::scope` and joins at the end; adapted here from a
//! streaming producer/consumer channel (which fits the teacher's
//! per-chromosome fitness pipeline) to a batch model, since every worker in
//! this search owns a disjoint slice of the combination space up front and
//! shares no mutable state with its siblings until the final merge.

use crate::combination::Distribution;
use crate::dataset::Dataset;
use crate::search::worker::SearchWorker;
use crate::topn::TopN;

/// Runs `base` — a rank's `order - 1`-length prefix distribution (C9) —
/// across `threads` worker threads, each taking `base.layer(threads, tid)`,
/// and returns this rank's merged top-n.
pub fn run(dataset: &Dataset, base: &Distribution, order: usize, threads: usize, noutputs: usize) -> TopN {
    if threads <= 1 {
        let worker = SearchWorker::new(dataset, order);
        return worker.run(base.layer(1, 0), noutputs);
    }

    let partials: Vec<TopN> = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = (0..threads)
            .map(|tid| {
                scope.spawn(move |_| {
                    let worker = SearchWorker::new(dataset, order);
                    let prefixes = base.layer(threads, tid);
                    worker.run(prefixes, noutputs)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("search worker thread panicked"))
            .collect()
    })
    .expect("crossbeam scope failed to join all worker threads");

    TopN::merge(noutputs, partials)
}
