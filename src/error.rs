//! Fatal error types for the core search engine and the external loader.
//!
//! Every error in the core is fatal to the whole search (no partial-result
//! recovery, see the crate-level docs): constructors and entry points return
//! a `Result`, and the binary turns any `Err` into a single diagnostic line on
//! stderr plus a non-zero exit code.

use thiserror::Error;

/// Errors raised by the search core itself, before or during a run.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CoreError {
    #[error("input too large: {snps} SNPs exceeds the maximum of {max}")]
    TooManyVariants { snps: u64, max: u64 },

    #[error("invalid order: K={order} must be >= 2")]
    InvalidOrder { order: usize },

    #[error("invalid thread count: T={threads} must be >= 1")]
    InvalidThreadCount { threads: usize },

    #[error("invalid output count: N={noutputs} must be >= 1")]
    InvalidOutputCount { noutputs: usize },

    #[error("failed to allocate {words} words for a worker's intermediate tables")]
    AllocationFailed { words: usize },

    #[error("arena allocation for row {row} is not aligned to {align} bytes")]
    Misaligned { row: usize, align: usize },

    #[error("inter-rank transport failed: {0}")]
    Transport(String),
}

/// Errors surfaced by the external dataset loader (TPED/TFAM or RAW).
/// The core treats any of these as fatal and forwards them unchanged.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("unrecognized input file extension: {0:?}")]
    UnrecognizedExtension(String),

    #[error("file unreadable: {path}: {source}")]
    FileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("sample/variant count mismatch: {detail}")]
    CountMismatch { detail: String },

    #[error("bad phenotype value: {value:?} (expected one of {{1, 2}})")]
    BadPhenotype { value: String },

    #[error("bad nucleotide code: {value:?}")]
    BadNucleotide { value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
