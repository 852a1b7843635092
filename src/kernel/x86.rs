use super::Kernel;
use std::arch::x86_64::*;

/// AVX2 path: ANDs four words at a time, then leans on the scalar `popcnt`
/// instruction per lane (there is no packed popcount before AVX-512's
/// VPOPCNTQ, so the win here is purely in the AND, not the count).
pub struct Avx2Kernel;

impl Kernel for Avx2Kernel {
    fn and_into(&self, a: &[u64], b: &[u64], out: &mut [u64]) {
        unsafe { and_into_avx2(a, b, out) }
    }

    fn and_popcount(&self, a: &[u64], b: &[u64]) -> u64 {
        unsafe { and_popcount_avx2(a, b) }
    }
}

#[target_feature(enable = "avx2")]
unsafe fn and_into_avx2(a: &[u64], b: &[u64], out: &mut [u64]) {
    let n = a.len().min(b.len());
    let chunks = n / 4;
    for c in 0..chunks {
        let i = c * 4;
        let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
        let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
        let r = _mm256_and_si256(va, vb);
        _mm256_storeu_si256(out.as_mut_ptr().add(i) as *mut __m256i, r);
    }
    for i in (chunks * 4)..n {
        out[i] = a[i] & b[i];
    }
}

#[target_feature(enable = "avx2")]
unsafe fn and_popcount_avx2(a: &[u64], b: &[u64]) -> u64 {
    let n = a.len().min(b.len());
    let chunks = n / 4;
    let mut acc = 0u64;
    let mut lanes = [0u64; 4];
    for c in 0..chunks {
        let i = c * 4;
        let va = _mm256_loadu_si256(a.as_ptr().add(i) as *const __m256i);
        let vb = _mm256_loadu_si256(b.as_ptr().add(i) as *const __m256i);
        let r = _mm256_and_si256(va, vb);
        _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, r);
        for lane in lanes {
            acc += lane.count_ones() as u64;
        }
    }
    for i in (chunks * 4)..n {
        acc += (a[i] & b[i]).count_ones() as u64;
    }
    acc
}
