//! Partition-and-race-to-first-result over a factor search range.
//!
//! The range is split into contiguous batches, one worker per batch, all
//! feeding a single result channel. The coordinator takes the first `Found`,
//! raises the shared cancel token, then drains the channel so every worker
//! is accounted for before the surrounding scope joins them.

use crossbeam::channel;
use rayon::prelude::*;
use std::thread;

use crate::search::{CancelToken, SearchOutcome, SearchTask};

const DEFAULT_BLOCK_SIZE: u64 = 1_000_000;

/// Split `[from, to)` into `parts` contiguous half-open batches covering it
/// exactly. The remainder is spread over the leading batches, so sizes
/// differ by at most one.
pub fn partition(from: u64, to: u64, parts: usize) -> Vec<(u64, u64)> {
    assert!(parts > 0, "at least one partition");
    assert!(from <= to, "inverted range {}..{}", from, to);

    let width = to - from;
    let base = width / parts as u64;
    let extra = width % parts as u64;

    let mut batches = Vec::with_capacity(parts);
    let mut start = from;
    for i in 0..parts as u64 {
        let len = base + u64::from(i < extra);
        batches.push((start, start + len));
        start += len;
    }
    batches
}

/// Runs one `SearchTask` per batch concurrently and surfaces the first
/// `Found`, cancelling the rest.
pub struct ParallelSearch {
    workers: usize,
    block_size: u64,
}

impl ParallelSearch {
    /// One worker per available core.
    pub fn new() -> Self {
        Self::with_workers(num_cpus::get())
    }

    pub fn with_workers(workers: usize) -> Self {
        assert!(workers > 0, "at least one worker");
        ParallelSearch {
            workers,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Cancellation latency is bounded by one block of work per worker.
    pub fn block_size(mut self, block_size: u64) -> Self {
        self.block_size = block_size;
        self
    }

    /// Search `[from, to)` for a divisor of `target` across all workers.
    ///
    /// Returns `Found` from whichever worker reports a hit first; every
    /// other in-flight worker is cancelled at its next block boundary. If
    /// all workers exhaust their batches the composite outcome is
    /// `NotFound`. All workers are joined before this returns, whether they
    /// won, lost, or were cancelled.
    pub fn run(&self, target: u64, from: u64, to: u64) -> SearchOutcome {
        let cancel = CancelToken::new();
        let (sender, receiver) = channel::bounded(self.workers);

        thread::scope(|s| {
            for (batch_from, batch_to) in partition(from, to, self.workers) {
                let task = SearchTask::new(target, batch_from, batch_to, self.block_size);
                let sender = sender.clone();
                let cancel = cancel.clone();
                s.spawn(move || {
                    // The channel is never closed before all workers report,
                    // so the send cannot fail; the buffer holds one slot per
                    // worker.
                    let _ = sender.send(task.run(&cancel));
                });
            }
            drop(sender);

            // Drain every worker's report. The first Found wins and raises
            // the token; later hits and Cancelled reports are absorbed.
            let mut winner = SearchOutcome::NotFound;
            for outcome in receiver.iter() {
                if let SearchOutcome::Found(factor) = outcome {
                    if winner == SearchOutcome::NotFound {
                        winner = SearchOutcome::Found(factor);
                        cancel.cancel();
                    }
                }
            }
            winner
        })
    }
}

impl Default for ParallelSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel-iterator variant of the same search, for comparison against the
/// hand-partitioned coordinator. Rayon does the partitioning and the
/// first-hit short-circuiting.
pub fn find_factor_rayon(target: u64, from: u64, to: u64) -> Option<u64> {
    (from..to).into_par_iter().find_first(|&n| target % n == 0)
}
