//! Enumeration of unordered K-combinations of SNP indices in colex order.
//!
//! A [`Combination`] is a strictly increasing `Vec<usize>` of column indices.
//! [`Distribution`] walks the combinatorial space in colex order (the order in
//! which the *last* index varies fastest) and supports jumping directly to
//! the `r`-th combination via the combinatorial number system, which is what
//! lets [`Distribution::strided`] hand every worker thread a disjoint,
//! round-robin slice of the space without materializing the whole thing.
//!
//! Two distributions compose via [`Distribution::layer`]: a rank's `(step,
//! offset)` slice of the space can itself be sliced again per thread, giving
//! every thread of every rank a disjoint stride without either level needing
//! to know the other's slice width directly.

use std::fmt;

/// An unordered combination of SNP column indices, strictly increasing.
pub type Combination = Vec<usize>;

/// Precomputed binomial coefficients `C(n, k)` for `n in 0..=m`, `k in 0..=k_max`,
/// used to unrank combinations in O(k) instead of re-deriving Pascal's triangle
/// on every step.
struct Binomial {
    k_max: usize,
    // table[n][k] = C(n, k), row-major, (m+1) rows of (k_max+1) columns
    table: Vec<u128>,
}

impl Binomial {
    fn build(m: usize, k_max: usize) -> Self {
        let cols = k_max + 1;
        let mut table = vec![0u128; (m + 1) * cols];
        for n in 0..=m {
            table[n * cols] = 1; // C(n, 0) = 1
            for k in 1..=k_max.min(n) {
                let a = table[(n - 1) * cols + k];
                let b = if k <= n - 1 { table[(n - 1) * cols + k - 1] } else { 0 };
                table[n * cols + k] = a + b;
            }
        }
        Binomial { k_max, table }
    }

    fn get(&self, n: usize, k: usize) -> u128 {
        if k > self.k_max || k > n {
            return if k == 0 { 1 } else { 0 };
        }
        self.table[n * (self.k_max + 1) + k]
    }
}

/// Total number of K-combinations of M items, `C(m, k)`.
pub fn count(m: usize, k: usize) -> u128 {
    if k > m {
        return 0;
    }
    Binomial::build(m, k).get(m, k)
}

/// Walks the colex-ordered space of K-combinations of `0..m`, optionally
/// restricted to a strided subsequence (every `stride`-th combination,
/// starting at `offset`), for round-robin partitioning across worker threads
/// and ranks.
pub struct Distribution {
    m: usize,
    k: usize,
    binom: Binomial,
    stride: u128,
    offset: u128,
    cursor: u128,
    total: u128,
}

impl Distribution {
    /// The full, unstrided distribution over all `C(m, k)` combinations.
    pub fn full(m: usize, k: usize) -> Self {
        Self::strided(m, k, 1, 0)
    }

    /// A distribution covering only combinations whose colex rank is
    /// `offset, offset + stride, offset + 2*stride, ...` — the slice handed
    /// to worker `offset` out of `stride` total workers.
    pub fn strided(m: usize, k: usize, stride: usize, offset: usize) -> Self {
        assert!(stride > 0, "stride must be >= 1");
        assert!(offset < stride, "offset must be < stride");
        let binom = Binomial::build(m, k);
        let total = binom.get(m, k);
        Distribution {
            m,
            k,
            binom,
            stride: stride as u128,
            offset: offset as u128,
            cursor: offset as u128,
            total,
        }
    }

    /// Composes this distribution's `(step, offset)` with a second level
    /// `(step', offset')`, yielding the distribution a sub-worker layered
    /// underneath it would walk: `step := step * step'`, `offset := offset *
    /// step' + offset'`. This is how a rank's stride over the combination
    /// space is further divided across that rank's own worker threads.
    ///
    /// Reads this distribution's starting offset, not its current iteration
    /// cursor, so `layer` gives a consistent result regardless of how far
    /// `self` has already been advanced by `next`.
    pub fn layer(&self, stride2: usize, offset2: usize) -> Distribution {
        assert!(stride2 > 0, "stride must be >= 1");
        assert!(offset2 < stride2, "offset must be < stride");
        let new_stride = self.stride * stride2 as u128;
        let new_offset = self.offset * stride2 as u128 + offset2 as u128;
        Distribution::strided(
            self.m,
            self.k,
            new_stride.try_into().expect("layered stride overflows usize"),
            new_offset.try_into().expect("layered offset overflows usize"),
        )
    }

    /// Number of combinations this (possibly strided) distribution will yield.
    pub fn len(&self) -> usize {
        if self.cursor >= self.total {
            0
        } else {
            (((self.total - self.cursor) + self.stride - 1) / self.stride) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode colex rank `r` into the combination it names, via the
    /// combinatorial number system: greedily pick the largest `c` with
    /// `C(c, i+1) <= r` for each digit from most to least significant.
    fn unrank(&self, mut r: u128) -> Combination {
        let mut out = vec![0usize; self.k];
        for i in (0..self.k).rev() {
            // find largest c in [i, m) with C(c, i+1) <= r
            let mut lo = i;
            let mut hi = self.m;
            while lo + 1 < hi {
                let mid = lo + (hi - lo) / 2;
                if self.binom.get(mid, i + 1) <= r {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            out[i] = lo;
            r -= self.binom.get(lo, i + 1);
        }
        out
    }
}

impl Iterator for Distribution {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.total {
            return None;
        }
        let combo = self.unrank(self.cursor);
        self.cursor += self.stride;
        Some(combo)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl fmt::Debug for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Distribution")
            .field("m", &self.m)
            .field("k", &self.k)
            .field("stride", &self.stride)
            .field("offset", &self.offset)
            .field("cursor", &self.cursor)
            .field("total", &self.total)
            .finish()
    }
}
