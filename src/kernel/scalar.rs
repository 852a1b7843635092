use super::Kernel;

pub struct ScalarKernel;

impl Kernel for ScalarKernel {
    fn and_into(&self, a: &[u64], b: &[u64], out: &mut [u64]) {
        let n = a.len().min(b.len());
        for i in 0..n {
            out[i] = a[i] & b[i];
        }
    }

    fn and_popcount(&self, a: &[u64], b: &[u64]) -> u64 {
        let n = a.len().min(b.len());
        let mut acc = 0u64;
        for i in 0..n {
            acc += (a[i] & b[i]).count_ones() as u64;
        }
        acc
    }
}
