//! Concurrency patterns over shared and partitioned work.
//!
//! Three demonstrations built on one orchestration layer:
//! - unsynchronized vs. mutually-exclusive mutation of a shared counter
//!   (exposing a data race and its fix),
//! - a compute-bound factor search that partitions a numeric range across
//!   workers and races to the first hit, cancelling the rest,
//! - an IO-bound fan-out/fan-in that counts long words across independently
//!   failing file and URL sources.
//!
//! Run with: cargo run --bin race_condition | compute_bound | io_bound

pub mod aggregate;
pub mod coordinator;
pub mod counter;
pub mod error;
pub mod primes;
pub mod search;
