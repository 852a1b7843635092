//! The packed genotype table (C1): one bitset row per (joint genotype,
//! phenotype) cell, and the combine / combine-and-popcount kernels (C2/C3)
//! that build a K+1-order table, or its final popcounts, from a K-order
//! prefix table and a single SNP's table.

use super::arena::{words_for, Arena};
use super::contingency::ContingencyTable;
use crate::kernel;

/// A packed genotype table for a combination of `order` SNPs: `3^order`
/// joint-genotype rows, each split into a case bitset and a control bitset.
/// Samples set in a row are exactly those sample indices whose genotype at
/// every SNP in the combination matches that row's digit, restricted to the
/// row's phenotype class.
#[derive(Debug, Clone)]
pub struct GenotypeTable {
    order: usize,
    states: usize, // 3^order
    n_cases: usize,
    n_ctrls: usize,
    cases: Arena,
    ctrls: Arena,
}

impl GenotypeTable {
    /// Builds the order-1 table for a single SNP from its per-sample
    /// genotype codes (0/1/2), partitioned by phenotype. `case_genotypes`
    /// and `ctrl_genotypes` hold one genotype code per sample in that class.
    pub fn from_snp(case_genotypes: &[u8], ctrl_genotypes: &[u8]) -> Self {
        let n_cases = case_genotypes.len();
        let n_ctrls = ctrl_genotypes.len();
        let cases_words = words_for(n_cases);
        let ctrl_words = words_for(n_ctrls);
        let mut cases = Arena::new(3, cases_words);
        let mut ctrls = Arena::new(3, ctrl_words);
        for (i, &g) in case_genotypes.iter().enumerate() {
            debug_assert!(g < 3, "genotype code out of range: {g}");
            super::arena::set_bit(cases.row_mut(g as usize), i);
        }
        for (i, &g) in ctrl_genotypes.iter().enumerate() {
            debug_assert!(g < 3, "genotype code out of range: {g}");
            super::arena::set_bit(ctrls.row_mut(g as usize), i);
        }
        GenotypeTable {
            order: 1,
            states: 3,
            n_cases,
            n_ctrls,
            cases,
            ctrls,
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn states(&self) -> usize {
        self.states
    }

    pub fn n_cases(&self) -> usize {
        self.n_cases
    }

    pub fn n_ctrls(&self) -> usize {
        self.n_ctrls
    }

    #[inline]
    pub fn case_row(&self, g: usize) -> &[u64] {
        self.cases.row(g)
    }

    #[inline]
    pub fn ctrl_row(&self, g: usize) -> &[u64] {
        self.ctrls.row(g)
    }

    /// C2: combines this (order `a`) table with a single-SNP (order 1) table
    /// into a fresh order `a+1` table, via one AND per row pair.
    pub fn combine(&self, snp: &GenotypeTable) -> GenotypeTable {
        assert_eq!(snp.order, 1, "combine's right-hand side must be order 1");
        let new_order = self.order + 1;
        let new_states = self.states * 3;
        let mut cases = Arena::new(new_states, self.cases.row_words());
        let mut ctrls = Arena::new(new_states, self.ctrls.row_words());
        for gi in 0..self.states {
            for gb in 0..3 {
                let row = gi * 3 + gb;
                kernel::and_into(self.case_row(gi), snp.case_row(gb), cases.row_mut(row));
                kernel::and_into(self.ctrl_row(gi), snp.ctrl_row(gb), ctrls.row_mut(row));
            }
        }
        GenotypeTable {
            order: new_order,
            states: new_states,
            n_cases: self.n_cases,
            n_ctrls: self.n_ctrls,
            cases,
            ctrls,
        }
    }

    /// C3: combines this (order `a`) table with a single-SNP table directly
    /// into a [`ContingencyTable`] of popcounts, without ever materializing
    /// the order `a+1` bitset. Used for the last SNP of a combination, where
    /// the combined table itself is never reused as a prefix.
    pub fn combine_and_popcount(&self, snp: &GenotypeTable) -> ContingencyTable {
        assert_eq!(snp.order, 1, "combine's right-hand side must be order 1");
        let new_order = self.order + 1;
        let mut table = ContingencyTable::zeroed(new_order);
        for gi in 0..self.states {
            for gb in 0..3 {
                let row = gi * 3 + gb;
                let cases = kernel::and_popcount(self.case_row(gi), snp.case_row(gb));
                let ctrls = kernel::and_popcount(self.ctrl_row(gi), snp.ctrl_row(gb));
                table.set_case_count(row, cases as u32);
                table.set_ctrl_count(row, ctrls as u32);
            }
        }
        table
    }
}
