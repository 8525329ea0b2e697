//! Block-wise scan of a numeric range for a divisor of a target value.
//!
//! The scan is cooperatively cancellable: a shared token is polled only at
//! block boundaries, so cancellation latency is bounded by one block of
//! work, never preemptive. Cancellation is reported as its own outcome so a
//! caller can never mistake "stopped early" for "scanned and found nothing".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag. Raised once (idempotently) by a coordinator or
/// the first winning worker, polled by everyone else.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        CancelToken(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The outcome of one range scan. `Found` carries the divisor; absence and
/// cancellation are distinct variants, never a zero sentinel and never an
/// error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(u64),
    NotFound,
    Cancelled,
}

/// One unit of search work: the half-open candidate range `[from, to)` for
/// divisors of `target`, scanned in blocks of `block_size`.
#[derive(Clone, Copy, Debug)]
pub struct SearchTask {
    target: u64,
    from: u64,
    to: u64,
    block_size: u64,
}

impl SearchTask {
    /// Panics if the range is inverted, starts below 1 (zero is not a
    /// divisor candidate), or the block size is zero.
    pub fn new(target: u64, from: u64, to: u64, block_size: u64) -> Self {
        assert!(from <= to, "inverted range {}..{}", from, to);
        assert!(from >= 1, "divisor candidates start at 1");
        assert!(block_size > 0, "block size must be positive");
        SearchTask {
            target,
            from,
            to,
            block_size,
        }
    }

    pub fn range(&self) -> (u64, u64) {
        (self.from, self.to)
    }

    /// Scan the range, returning at the first divisor. The token is checked
    /// after each block, including the last, so a worker between block
    /// boundaries finishes its current block before honoring cancellation.
    pub fn run(&self, cancel: &CancelToken) -> SearchOutcome {
        let mut block_start = self.from;
        while block_start < self.to {
            let block_end = self.to.min(block_start + self.block_size);

            for candidate in block_start..block_end {
                if self.target % candidate == 0 {
                    return SearchOutcome::Found(candidate);
                }
            }

            if cancel.is_cancelled() {
                return SearchOutcome::Cancelled;
            }
            block_start = block_end;
        }
        SearchOutcome::NotFound
    }
}
