//! C9: the rank orchestrator. Runs this rank's share of the search, then
//! gathers and merges every rank's local top-n into a single, globally
//! sorted result list on rank 0.
//!
//! Grounded in `original_source/include/fiuncho/MPIEngine.h`'s top-level
//! `run()`, which does exactly this: a local `ThreadedSearch`, then an
//! `MPI_Gather`/`MPI_Gatherv` round, then a final sort of the merged set.

use crate::combination::Distribution;
use crate::dataset::Dataset;
use crate::error::CoreError;
use crate::result::{by_score_desc, SearchResult};
use crate::search::pool;
use crate::transport::RankTransport;

/// Validated parameters for a single search run, built via [`SearchConfigBuilder`].
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub order: usize,
    pub threads: usize,
    pub noutputs: usize,
}

/// Builder for [`SearchConfig`], following the teacher's
/// `Builder` + `TryFrom<Builder>` validation pattern (see
/// `src/strategy/permutate/builder.rs`): defaults are permissive, and
/// invalid combinations are only rejected at `build()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfigBuilder {
    order: Option<usize>,
    threads: Option<usize>,
    noutputs: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_noutputs(mut self, noutputs: usize) -> Self {
        self.noutputs = Some(noutputs);
        self
    }

    pub fn build(self) -> Result<SearchConfig, CoreError> {
        let order = self.order.unwrap_or(2);
        let threads = self.threads.unwrap_or(1);
        let noutputs = self.noutputs.unwrap_or(10);

        if order < 2 {
            return Err(CoreError::InvalidOrder { order });
        }
        if threads < 1 {
            return Err(CoreError::InvalidThreadCount { threads });
        }
        if noutputs < 1 {
            return Err(CoreError::InvalidOutputCount { noutputs });
        }
        Ok(SearchConfig {
            order,
            threads,
            noutputs,
        })
    }
}

impl TryFrom<SearchConfigBuilder> for SearchConfig {
    type Error = CoreError;

    fn try_from(builder: SearchConfigBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Maximum SNP count the core accepts, per spec.md §7 ("input too large").
/// `Combination` indices are stored as `u32`, so this is also the largest
/// variant count a combination can address.
pub const MAX_SNPS: u64 = (1u64 << 31) - 1;

/// Rejects SNP counts above [`MAX_SNPS`] before any worker is spawned.
pub fn validate_snp_count(snps: u64) -> Result<(), CoreError> {
    if snps > MAX_SNPS {
        return Err(CoreError::TooManyVariants {
            snps,
            max: MAX_SNPS,
        });
    }
    Ok(())
}

/// Runs the full distributed search: this rank's local threaded sweep
/// (C8), then a gather/merge across every rank (C9). Returns `Some` sorted
/// result list on rank 0, `None` on every other rank.
pub fn search<T: RankTransport>(
    dataset: &Dataset,
    config: &SearchConfig,
    transport: &T,
) -> Result<Option<Vec<SearchResult>>, CoreError> {
    validate_snp_count(dataset.n_snps() as u64)?;

    log::info!(
        "rank {}/{}: searching order={} threads={} noutputs={}",
        transport.rank(),
        transport.world_size(),
        config.order,
        config.threads,
        config.noutputs
    );

    // C9: this rank's slice of the (order - 1)-length prefix space, further
    // layered across its own thread pool inside `pool::run` (C8).
    let rank_dist = Distribution::strided(
        dataset.n_snps(),
        config.order - 1,
        transport.world_size(),
        transport.rank(),
    );
    let local_top = pool::run(dataset, &rank_dist, config.order, config.threads, config.noutputs);
    log::debug!("rank {}: local search complete", transport.rank());

    let local_results = local_top.into_sorted_vec();
    let gathered = transport.gather(&local_results)?;

    match gathered {
        None => Ok(None),
        Some(per_rank) => {
            let mut merged: Vec<SearchResult> = per_rank.into_iter().flatten().collect();
            merged.sort_by(by_score_desc);
            merged.truncate(config.noutputs);
            log::info!("merged {} rank(s) into {} result(s)", transport.world_size(), merged.len());
            Ok(Some(merged))
        }
    }
}
