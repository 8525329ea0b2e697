//! Compute-bound factor search: one worker, then a worker per core, then
//! rayon. Generates the product of two random primes and times the hunt for
//! a factor (simulating an attempt at breaking RSA encryption).
//!
//! Run with: cargo run --release --bin compute_bound

use std::time::{Duration, Instant};

use concurrency_patterns::coordinator::{self, ParallelSearch};
use concurrency_patterns::primes;
use concurrency_patterns::search::{CancelToken, SearchOutcome, SearchTask};

// 31-bit primes keep the product comfortably inside u64.
const BITS: u32 = 31;
const BLOCK_SIZE: u64 = 1_000_000;

fn main() {
    let max = 1u64 << BITS;
    let min = max / 2;

    let mut rng = rand::thread_rng();
    let p1 = primes::probable_prime(BITS, &mut rng);
    let p2 = primes::probable_prime(BITS, &mut rng);
    let product = p1 * p2;
    println!("Prime 1 = {}", p1);
    println!("Prime 2 = {}", p2);
    println!("Factoring {}", product);

    // The smaller prime lies in [min, max), so every strategy must find it.
    println!("\nUsing 1 worker");
    let task = SearchTask::new(product, min, max, BLOCK_SIZE);
    let start = Instant::now();
    let outcome = task.run(&CancelToken::new());
    report(outcome, start.elapsed());

    let workers = num_cpus::get();
    println!("\nUsing {} workers", workers);
    let search = ParallelSearch::with_workers(workers).block_size(BLOCK_SIZE);
    let start = Instant::now();
    let outcome = search.run(product, min, max);
    report(outcome, start.elapsed());

    println!("\nUsing rayon");
    let start = Instant::now();
    let outcome = match coordinator::find_factor_rayon(product, min, max) {
        Some(factor) => SearchOutcome::Found(factor),
        None => SearchOutcome::NotFound,
    };
    report(outcome, start.elapsed());
}

fn report(outcome: SearchOutcome, elapsed: Duration) {
    match outcome {
        SearchOutcome::Found(factor) => println!("Found factor {}", factor),
        SearchOutcome::NotFound => println!("No factor in range"),
        SearchOutcome::Cancelled => println!("Search cancelled"),
    }
    println!("Time taken = {:?}", elapsed);
}
