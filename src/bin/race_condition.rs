//! Unsafe vs. safe mutation of one shared counter by two racing threads.
//!
//! Run with: cargo run --release --bin race_condition

use concurrency_patterns::counter;

const STEPS: u64 = 1_000_000;

fn main() {
    println!("=== Shared Counter Race ===\n");
    println!("{} increments racing {} decrements\n", STEPS, STEPS);

    // Lost updates make a nonzero result likely on multi-core hardware,
    // but the exact value changes from run to run.
    println!("Unsafe result = {}", counter::run_unsafe(STEPS));

    // Mutual exclusion makes zero certain.
    println!("Safe result = {}", counter::run_safe(STEPS));
}
