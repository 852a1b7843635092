//! The packed genotype representation: bit-arena storage, the combine and
//! combine-and-popcount kernels, and the contingency table they populate.
pub mod arena;
pub mod contingency;
pub mod table;

pub use self::contingency::ContingencyTable;
pub use self::table::GenotypeTable;
