//! Command-line surface, reproducing the argument contract of
//! `original_source/include/fiuncho/utils/Arg_parser.h` (itself a TCLAP
//! parser) with `clap`'s derive API, the idiom favored across the retrieved
//! example pack's CLI-shaped repositories.

use clap::Parser;
use std::path::PathBuf;

/// Number of worker threads to use when `-t`/`--threads` is not given:
/// every hardware thread this process can see, falling back to 1 if the
/// platform can't report it.
fn default_threads() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Exhaustive search for high-order epistasis in case/control genotype data.
#[derive(Debug, Parser)]
#[command(name = "epistasis-search", version, about)]
pub struct Cli {
    /// Genotype input: one `.raw` file, or a `.tped`/`.tfam` pair.
    #[arg(required = true, num_args = 1..=2)]
    pub inputs: Vec<PathBuf>,

    /// Path to write the sorted result list to.
    pub output: PathBuf,

    /// Number of SNPs per combination (K).
    #[arg(short = 'o', long = "order", default_value_t = 2)]
    pub order: usize,

    /// Number of worker threads per rank. Defaults to the number of
    /// available hardware threads.
    #[arg(short = 't', long = "threads", default_value_t = default_threads())]
    pub threads: usize,

    /// Number of top results to keep.
    #[arg(short = 'n', long = "noutputs", default_value_t = 10)]
    pub noutputs: usize,
}
