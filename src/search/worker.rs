//! C6: the depth-first search loop run by one worker thread over its share
//! of the combination space — an iterator of `order - 1`-length prefixes —
//! building the joint genotype table for a prefix once and sweeping every
//! valid trailing SNP index against it.
//!
//! Grounded in `original_source/include/fiuncho/ThreadedSearch.h`'s `run()`,
//! whose outer loop builds `gts` fresh from each new prefix (`combine`d from
//! `c[0]` up through `c[K-2]`) and then walks the trailing index `i` from
//! `c[K-2] + 1` to `M`, scoring one combination per step; the prefix table is
//! built once per outer iteration and amortised over however many trailing
//! indices it has left to sweep.

use crate::combination::Combination;
use crate::dataset::Dataset;
use crate::genotype::GenotypeTable;
use crate::mi::mutual_information;
use crate::result::SearchResult;
use crate::topn::TopN;

/// Runs one worker's share of the search: an iterator of `order - 1`-length
/// prefixes, one genotype-table build per prefix, and an inner sweep over
/// every trailing SNP index greater than the prefix's last element.
pub struct SearchWorker<'d> {
    dataset: &'d Dataset,
    order: usize,
}

impl<'d> SearchWorker<'d> {
    pub fn new(dataset: &'d Dataset, order: usize) -> Self {
        assert!(order >= 2, "search order must be >= 2");
        SearchWorker { dataset, order }
    }

    /// Builds the joint genotype table covering every SNP in `prefix`
    /// (`order - 1` of them), used as the left-hand side of the leaf sweep's
    /// combine-and-popcount. Only called when `order >= 3`; for `order == 2`
    /// the prefix is a single SNP and its own table is used directly.
    fn prefix_table(&self, prefix: &[usize]) -> GenotypeTable {
        debug_assert_eq!(prefix.len(), self.order - 1);
        let mut table = self.dataset.snp(prefix[0]).combine(self.dataset.snp(prefix[1]));
        for &idx in &prefix[2..] {
            table = table.combine(self.dataset.snp(idx));
        }
        table
    }

    /// Scores every leaf SNP index in `(prefix.last(), m)` against `base`,
    /// inserting each resulting combination into `top`.
    fn sweep_leaves(&self, prefix: &Combination, base: &GenotypeTable, top: &mut TopN) {
        let m = self.dataset.n_snps();
        let last = *prefix.last().expect("prefix is non-empty");
        for leaf in (last + 1)..m {
            let contingency = base.combine_and_popcount(self.dataset.snp(leaf));
            let score = mutual_information(&contingency);
            let mut combo = prefix.clone();
            combo.push(leaf);
            top.add(SearchResult::new(combo, score));
        }
    }

    /// Builds the prefix's table (if needed) and sweeps every valid leaf,
    /// adding each combination to `top`.
    fn sweep_prefix(&self, prefix: &Combination, top: &mut TopN) {
        if self.order == 2 {
            // No intermediate table: the prefix is a single SNP's own table.
            self.sweep_leaves(prefix, self.dataset.snp(prefix[0]), top);
        } else {
            let prefix_table = self.prefix_table(prefix);
            self.sweep_leaves(prefix, &prefix_table, top);
        }
    }

    /// Runs this worker's entire share: one [`sweep_prefix`] call per prefix
    /// the iterator yields, returning the worker-local bounded top-n.
    pub fn run(self, prefixes: impl Iterator<Item = Combination>, noutputs: usize) -> TopN {
        let mut top = TopN::new(noutputs);
        for prefix in prefixes {
            self.sweep_prefix(&prefix, &mut top);
        }
        top
    }
}
