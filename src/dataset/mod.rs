//! The in-memory, read-only dataset the search runs over: one packed
//! [`GenotypeTable`] per SNP, shared immutably across every worker thread.

use crate::genotype::GenotypeTable;

/// A per-SNP packed genotype table (order 1), the atomic unit [`Dataset`]
/// stores and the search combines together.
pub type SnpTable = GenotypeTable;

/// The full case/control genotype dataset: `n_cases + n_ctrls` samples
/// genotyped at `snps.len()` biallelic SNPs. Read-only once built, so it can
/// be shared (by reference) across every worker thread without locking.
#[derive(Debug)]
pub struct Dataset {
    n_cases: usize,
    n_ctrls: usize,
    snps: Vec<SnpTable>,
}

impl Dataset {
    /// Builds a dataset directly from already-separated per-SNP genotype
    /// columns. `cases[j]`/`ctrls[j]` are the genotype codes (0/1/2) for SNP
    /// `j`, one entry per case/control sample; every column must have the
    /// same `cases.len()` and `ctrls.len()`.
    pub fn from_columns(cases: &[Vec<u8>], ctrls: &[Vec<u8>]) -> Self {
        assert_eq!(cases.len(), ctrls.len(), "case and control column counts differ");
        let n_cases = cases.first().map_or(0, |c| c.len());
        let n_ctrls = ctrls.first().map_or(0, |c| c.len());
        let snps = cases
            .iter()
            .zip(ctrls.iter())
            .map(|(c, t)| {
                debug_assert_eq!(c.len(), n_cases);
                debug_assert_eq!(t.len(), n_ctrls);
                SnpTable::from_snp(c, t)
            })
            .collect();
        Dataset {
            n_cases,
            n_ctrls,
            snps,
        }
    }

    pub fn n_snps(&self) -> usize {
        self.snps.len()
    }

    pub fn n_cases(&self) -> usize {
        self.n_cases
    }

    pub fn n_ctrls(&self) -> usize {
        self.n_ctrls
    }

    pub fn n_samples(&self) -> usize {
        self.n_cases + self.n_ctrls
    }

    #[inline]
    pub fn snp(&self, index: usize) -> &SnpTable {
        &self.snps[index]
    }

    pub fn snps(&self) -> &[SnpTable] {
        &self.snps
    }
}
