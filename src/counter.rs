//! Shared mutable state with and without mutual exclusion.
//!
//! The unsafe discipline performs the read-modify-write as two independent
//! atomic steps, so two threads can interleave between the read and the
//! write and lose updates. The safe discipline wraps the same two steps in
//! a mutex critical section, which totally orders the mutations.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::thread;

/// A counter mutated by exactly two worker threads for the lifetime of one
/// demo run. Both disciplines write the same cell; only the safe one holds
/// the lock while doing so.
///
/// Each run constructs its own counter, so repeated runs are independent.
pub struct SharedCounter {
    cell: AtomicI64,
    lock: Mutex<()>,
}

impl SharedCounter {
    pub fn new() -> Self {
        SharedCounter {
            cell: AtomicI64::new(0),
            lock: Mutex::new(()),
        }
    }

    /// Read-modify-write with no exclusion. A concurrent caller may read the
    /// same value and overwrite this store.
    pub fn increment_unsafe(&self) {
        let value = self.cell.load(Ordering::Relaxed);
        self.cell.store(value + 1, Ordering::Relaxed);
    }

    pub fn decrement_unsafe(&self) {
        let value = self.cell.load(Ordering::Relaxed);
        self.cell.store(value - 1, Ordering::Relaxed);
    }

    /// The same read-modify-write, but at most one caller executes it at a
    /// time. Safe mutations observe a consistent total order.
    pub fn increment_safe(&self) {
        let _guard = self.lock.lock().unwrap();
        let value = self.cell.load(Ordering::Relaxed);
        self.cell.store(value + 1, Ordering::Relaxed);
    }

    pub fn decrement_safe(&self) {
        let _guard = self.lock.lock().unwrap();
        let value = self.cell.load(Ordering::Relaxed);
        self.cell.store(value - 1, Ordering::Relaxed);
    }

    pub fn value(&self) -> i64 {
        self.cell.load(Ordering::Relaxed)
    }
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Race a tight increment loop against a tight decrement loop with no
/// synchronization. On multi-core hardware the result is unlikely to be
/// zero, but nothing about the deviation is guaranteed.
pub fn run_unsafe(steps: u64) -> i64 {
    let counter = SharedCounter::new();
    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..steps {
                counter.increment_unsafe();
            }
        });
        s.spawn(|| {
            for _ in 0..steps {
                counter.decrement_unsafe();
            }
        });
    });
    counter.value()
}

/// The same two loops under mutual exclusion. Always returns exactly zero.
pub fn run_safe(steps: u64) -> i64 {
    let counter = SharedCounter::new();
    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..steps {
                counter.increment_safe();
            }
        });
        s.spawn(|| {
            for _ in 0..steps {
                counter.decrement_safe();
            }
        });
    });
    counter.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_run_is_exactly_zero() {
        for steps in [1, 100, 100_000] {
            assert_eq!(run_safe(steps), 0, "safe run with {} steps", steps);
        }
    }

    #[test]
    fn test_unsafe_run_completes() {
        // The final value is interleaving-dependent, so no particular number
        // can be asserted. The run must still finish with both workers joined
        // and a readable counter.
        let result = run_unsafe(100_000);
        assert!(result >= -100_000 && result <= 100_000);
    }

    #[test]
    fn test_single_thread_disciplines_agree() {
        let counter = SharedCounter::new();
        counter.increment_unsafe();
        counter.increment_unsafe();
        counter.increment_safe();
        counter.decrement_safe();
        counter.decrement_unsafe();
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_runs_are_independent() {
        assert_eq!(run_safe(10), 0);
        assert_eq!(run_safe(10), 0);
    }
}
