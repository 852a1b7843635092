//! C9's rank-to-rank collaborator: gathers every rank's local top-n results
//! at rank 0. Grounded in `original_source/include/fiuncho/MPIEngine.h`,
//! which performs a two-phase `MPI_Gather` (lengths) + `MPI_Gatherv`
//! (payloads) using the wire format in [`crate::wire`].

use crate::error::CoreError;
use crate::result::SearchResult;
use crate::wire::{decode_results, encode_results};

/// Abstracts the distributed gather so the rank orchestrator (C9) can be
/// exercised without an MPI installation, and so a real `mpi`-backed
/// transport can be swapped in behind the `mpi` feature.
pub trait RankTransport {
    /// This process's rank, in `0..world_size()`.
    fn rank(&self) -> usize;

    /// Total number of ranks participating in the run.
    fn world_size(&self) -> usize;

    /// Gathers every rank's local results at rank 0. Non-root ranks receive
    /// `None`; rank 0 receives `Some` with one entry per rank, in rank order
    /// (including its own, at index 0).
    fn gather(&self, local: &[SearchResult]) -> Result<Option<Vec<Vec<SearchResult>>>, CoreError>;
}

/// The default, single-process transport: `world_size() == 1`, and
/// `gather` simply hands back the local results unchanged. Lets the whole
/// pipeline run without an MPI installation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleRankTransport;

impl RankTransport for SingleRankTransport {
    fn rank(&self) -> usize {
        0
    }

    fn world_size(&self) -> usize {
        1
    }

    fn gather(&self, local: &[SearchResult]) -> Result<Option<Vec<Vec<SearchResult>>>, CoreError> {
        Ok(Some(vec![local.to_vec()]))
    }
}

#[cfg(feature = "mpi")]
pub use self::mpi_transport::MpiTransport;

#[cfg(feature = "mpi")]
mod mpi_transport {
    use super::*;
    use mpi::collective::CommunicatorCollectives;
    use mpi::topology::Communicator;

    /// A real multi-process transport built on `mpi` (rsmpi), reproducing
    /// the original's two-phase gather: first each rank's encoded payload
    /// length, then (via `Gatherv`) the payloads themselves.
    pub struct MpiTransport {
        world: mpi::topology::SystemCommunicator,
    }

    impl MpiTransport {
        pub fn new(world: mpi::topology::SystemCommunicator) -> Self {
            MpiTransport { world }
        }
    }

    impl RankTransport for MpiTransport {
        fn rank(&self) -> usize {
            self.world.rank() as usize
        }

        fn world_size(&self) -> usize {
            self.world.size() as usize
        }

        fn gather(
            &self,
            local: &[SearchResult],
        ) -> Result<Option<Vec<Vec<SearchResult>>>, CoreError> {
            let root_process = self.world.process_at_rank(0);
            let payload = encode_results(local);
            let my_len = payload.len() as i32;

            if self.rank() == 0 {
                let world_size = self.world_size();
                let mut lengths = vec![0i32; world_size];
                root_process.gather_into_root(&my_len, &mut lengths);

                let total: i32 = lengths.iter().sum();
                let displs: Vec<i32> = lengths
                    .iter()
                    .scan(0i32, |acc, &len| {
                        let d = *acc;
                        *acc += len;
                        Some(d)
                    })
                    .collect();
                let mut buf = vec![0u8; total as usize];
                {
                    let mut partition =
                        mpi::datatype::PartitionMut::new(&mut buf, lengths.clone(), &displs[..]);
                    root_process.gather_varcount_into_root(&payload[..], &mut partition);
                }

                let mut out = Vec::with_capacity(world_size);
                for (len, displ) in lengths.iter().zip(displs.iter()) {
                    let slice = &buf[*displ as usize..(*displ + *len) as usize];
                    out.push(
                        decode_results(slice)
                            .map_err(|e| CoreError::Transport(e.to_string()))?,
                    );
                }
                Ok(Some(out))
            } else {
                root_process.gather_into(&my_len);
                root_process.gather_varcount_into(&payload[..]);
                Ok(None)
            }
        }
    }
}
