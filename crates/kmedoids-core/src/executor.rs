//! Parallel-for execution over disjoint output slots.
//!
//! Both clustering steps are data-parallel loops where unit `i` writes
//! only slot `i` of an output buffer. This module abstracts that shape
//! behind one contract with two interchangeable backends:
//!
//! - [`Scheduler::WorkSharing`]: a persistent rayon pool partitions the
//!   index range among its worker team
//! - [`Scheduler::ChunkAndJoin`]: scoped threads are spawned per call
//!   over a static contiguous partition, remainder folded into the last
//!   chunk, and joined before the call returns
//!
//! Either way, every slot is written exactly once and all writes are
//! observably complete when `for_each_slot` returns, which is the full
//! barrier the engine relies on between steps. Because each unit owns a
//! disjoint `&mut` slot, no locks are involved and scheduling order
//! cannot change the result.

use crate::error::CoreResult;

/// Scheduling backend for the parallel steps.
///
/// Both backends satisfy the same contract and produce bit-identical
/// results; the choice is a throughput/ergonomics trade-off, not a
/// behavioral one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheduler {
    /// Work-sharing parallel loop on a persistent rayon thread pool.
    #[default]
    WorkSharing,
    /// Explicit per-call thread spawn over static contiguous chunks.
    ChunkAndJoin,
}

#[derive(Debug)]
enum Backend {
    /// Persistent worker team, parallel loop per call.
    Pool(rayon::ThreadPool),
    /// Scoped spawn-and-join per call.
    Scoped,
}

/// Executes per-index closures over mutable slot buffers.
///
/// Built once per engine with a fixed thread count; the rayon pool (for
/// the work-sharing backend) persists across iterations.
#[derive(Debug)]
pub struct ParallelExecutor {
    backend: Backend,
    num_threads: usize,
}

impl ParallelExecutor {
    /// Build an executor for the given backend and worker count.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ClusteringError::ThreadPool`] if the rayon pool
    /// cannot be constructed (work-sharing backend only).
    pub fn new(scheduler: Scheduler, num_threads: usize) -> CoreResult<Self> {
        let backend = match scheduler {
            Scheduler::WorkSharing => Backend::Pool(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(num_threads)
                    .build()?,
            ),
            Scheduler::ChunkAndJoin => Backend::Scoped,
        };

        Ok(Self {
            backend,
            num_threads,
        })
    }

    /// The backend this executor runs on.
    #[inline]
    pub fn scheduler(&self) -> Scheduler {
        match self.backend {
            Backend::Pool(_) => Scheduler::WorkSharing,
            Backend::Scoped => Scheduler::ChunkAndJoin,
        }
    }

    /// Configured worker count.
    #[inline]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Run `op(i, &mut slots[i])` for every index, in parallel.
    ///
    /// Each slot is written by exactly one unit; all units have finished
    /// when this returns. `op` must be pure with respect to the slot
    /// index for the run to be deterministic, which both clustering
    /// steps guarantee (they read only immutable shared state).
    pub fn for_each_slot<T, F>(&self, slots: &mut [T], op: F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        match &self.backend {
            Backend::Pool(pool) => Self::work_sharing(pool, slots, &op),
            Backend::Scoped => self.chunk_and_join(slots, &op),
        }
    }

    fn work_sharing<T, F>(pool: &rayon::ThreadPool, slots: &mut [T], op: &F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        use rayon::prelude::*;

        pool.install(|| {
            slots
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, slot)| op(i, slot));
        });
    }

    fn chunk_and_join<T, F>(&self, slots: &mut [T], op: &F)
    where
        T: Send,
        F: Fn(usize, &mut T) + Sync,
    {
        let len = slots.len();
        if len == 0 {
            return;
        }

        // Static contiguous partition: len / threads per chunk, the
        // remainder folded into the last chunk.
        let threads = self.num_threads.min(len);
        let chunk_len = len / threads;

        std::thread::scope(|scope| {
            let mut rest = slots;
            let mut start = 0;
            for t in 0..threads {
                let take = if t == threads - 1 {
                    rest.len()
                } else {
                    chunk_len
                };
                let (chunk, tail) = rest.split_at_mut(take);
                rest = tail;
                scope.spawn(move || {
                    for (offset, slot) in chunk.iter_mut().enumerate() {
                        op(start + offset, slot);
                    }
                });
                start += take;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squares(executor: &ParallelExecutor, len: usize) -> Vec<usize> {
        let mut out = vec![0usize; len];
        executor.for_each_slot(&mut out, |i, slot| *slot = i * i);
        out
    }

    #[test]
    fn test_work_sharing_writes_every_slot_once() {
        let executor = ParallelExecutor::new(Scheduler::WorkSharing, 4).unwrap();

        let out = squares(&executor, 1000);

        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, i * i);
        }

        println!("[VERIFIED] work-sharing backend fills every slot");
    }

    #[test]
    fn test_chunk_and_join_writes_every_slot_once() {
        let executor = ParallelExecutor::new(Scheduler::ChunkAndJoin, 4).unwrap();

        let out = squares(&executor, 1000);

        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, i * i);
        }

        println!("[VERIFIED] chunk-and-join backend fills every slot");
    }

    #[test]
    fn test_scheduler_accessor_reports_backend() {
        let ws = ParallelExecutor::new(Scheduler::WorkSharing, 2).unwrap();
        let cj = ParallelExecutor::new(Scheduler::ChunkAndJoin, 2).unwrap();

        assert_eq!(ws.scheduler(), Scheduler::WorkSharing);
        assert_eq!(cj.scheduler(), Scheduler::ChunkAndJoin);
        assert_eq!(ws.num_threads(), 2);

        println!("[VERIFIED] scheduler/num_threads accessors round-trip");
    }

    #[test]
    fn test_more_threads_than_slots() {
        for scheduler in [Scheduler::WorkSharing, Scheduler::ChunkAndJoin] {
            let executor = ParallelExecutor::new(scheduler, 8).unwrap();
            let out = squares(&executor, 3);
            assert_eq!(out, vec![0, 1, 4]);
        }

        println!("[VERIFIED] executors handle len < num_threads");
    }

    #[test]
    fn test_empty_slots_is_a_no_op() {
        for scheduler in [Scheduler::WorkSharing, Scheduler::ChunkAndJoin] {
            let executor = ParallelExecutor::new(scheduler, 4).unwrap();
            let mut out: Vec<usize> = vec![];
            executor.for_each_slot(&mut out, |_, _| panic!("must not run"));
        }

        println!("[VERIFIED] empty slot buffers run zero units");
    }

    #[test]
    fn test_single_thread_is_a_valid_realization() {
        for scheduler in [Scheduler::WorkSharing, Scheduler::ChunkAndJoin] {
            let executor = ParallelExecutor::new(scheduler, 1).unwrap();
            let out = squares(&executor, 64);
            let expected: Vec<usize> = (0..64).map(|i| i * i).collect();
            assert_eq!(out, expected);
        }

        println!("[VERIFIED] num_threads=1 produces identical output");
    }
}
