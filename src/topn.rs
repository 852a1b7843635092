//! C7: a bounded buffer of the best `n` results seen so far.
//!
//! Grounded in `original_source/include/fiuncho/utils/MaxArray.h`, which
//! keeps a fixed-capacity array sorted by descending score and rejects any
//! candidate that cannot beat its current worst entry in O(1) before paying
//! for the O(n) insertion. We reproduce that shape with a `Vec` instead of a
//! raw array, since `n` is a runtime parameter here rather than a template
//! constant.

use crate::result::SearchResult;

/// Keeps the `capacity` highest-scoring [`SearchResult`]s inserted so far,
/// sorted by descending score. Ties keep whichever result arrived first
/// (strict `>` on insert), matching the spec's resolution of the tie-break
/// open question.
#[derive(Debug, Clone)]
pub struct TopN {
    capacity: usize,
    items: Vec<SearchResult>,
}

impl TopN {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 1, "TopN capacity must be >= 1");
        TopN {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Considers `candidate` for inclusion. O(1) to reject once full unless
    /// the candidate beats the current worst entry.
    pub fn add(&mut self, candidate: SearchResult) {
        if self.items.len() < self.capacity {
            let pos = self
                .items
                .iter()
                .position(|r| candidate.score > r.score)
                .unwrap_or(self.items.len());
            self.items.insert(pos, candidate);
            return;
        }
        // full: reject unless strictly better than the current worst.
        let worst = self.items.last().expect("capacity >= 1 implies non-empty when full");
        if candidate.score > worst.score {
            let pos = self
                .items
                .iter()
                .position(|r| candidate.score > r.score)
                .unwrap_or(self.items.len());
            self.items.insert(pos, candidate);
            self.items.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Consumes the buffer, returning its contents sorted by descending
    /// score (already sorted by construction, but explicit for callers that
    /// merge several `TopN`s together).
    pub fn into_sorted_vec(self) -> Vec<SearchResult> {
        self.items
    }

    /// Merges several worker- or rank-local `TopN`s into a single bounded
    /// top-n, used by the thread pool join (C8) and the rank orchestrator's
    /// gather/merge (C9).
    pub fn merge(capacity: usize, parts: impl IntoIterator<Item = TopN>) -> TopN {
        let mut merged = TopN::new(capacity);
        for part in parts {
            for item in part.into_sorted_vec() {
                merged.add(item);
            }
        }
        merged
    }
}
