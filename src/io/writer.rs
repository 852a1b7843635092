//! Writes the final, sorted result list to the output file.
//!
//! Grounded in `original_source/include/fiuncho/utils/Result.h`'s `str()`:
//! one line per result, the combination's SNP indices followed by its
//! score, all space-separated.

use crate::result::SearchResult;
use std::io::{self, Write};

pub fn write<W: Write>(mut out: W, results: &[SearchResult]) -> io::Result<()> {
    for r in results {
        for idx in &r.combination {
            write!(out, "{idx} ")?;
        }
        writeln!(out, "{}", r.score)?;
    }
    Ok(())
}
