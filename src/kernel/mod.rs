//! The combine (AND) and popcount kernels (C2/C3), with a scalar fallback and
//! a runtime-dispatched x86 AVX2 path.
//!
//! Dispatch happens once, lazily, via [`std::sync::OnceLock`]: the teacher
//! repo does not need SIMD dispatch anywhere, so this is grounded directly in
//! `original_source`'s `ContingencyTable<T>::combine_and_popcount`, which
//! relies on the compiler auto-vectorizing a plain word loop. We make the
//! vectorization an explicit, testable choice instead of hoping for it.

mod scalar;
#[cfg(target_arch = "x86_64")]
mod x86;

use std::sync::OnceLock;

/// `out[i] = a[i] & b[i]` for every word. `out` must be at least as long as
/// the shorter of `a`, `b`.
pub fn and_into(a: &[u64], b: &[u64], out: &mut [u64]) {
    dispatch().and_into(a, b, out)
}

/// `sum(popcount(a[i] & b[i]))` over all words, without materializing the AND.
pub fn and_popcount(a: &[u64], b: &[u64]) -> u64 {
    dispatch().and_popcount(a, b)
}

trait Kernel: Sync {
    fn and_into(&self, a: &[u64], b: &[u64], out: &mut [u64]);
    fn and_popcount(&self, a: &[u64], b: &[u64]) -> u64;
}

fn dispatch() -> &'static dyn Kernel {
    static CHOSEN: OnceLock<Box<dyn Kernel>> = OnceLock::new();
    CHOSEN
        .get_or_init(|| {
            #[cfg(target_arch = "x86_64")]
            {
                if std::is_x86_feature_detected!("avx2") {
                    log::debug!("combine/popcount kernel: avx2");
                    return Box::new(x86::Avx2Kernel);
                }
            }
            log::debug!("combine/popcount kernel: scalar");
            Box::new(scalar::ScalarKernel)
        })
        .as_ref()
}
