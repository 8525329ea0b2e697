//! IO-bound fan-out/fan-in: count long words across local files and web
//! URLs, one concurrent worker per source. A missing file or failed request
//! contributes zero without disturbing the other sources.
//!
//! Run with: cargo run --release --bin io_bound

use concurrency_patterns::aggregate::{self, FileSource, Source, UrlSource};

const LONG_LENGTH: usize = 12;

fn main() {
    let sources: Vec<Box<dyn Source>> = vec![
        Box::new(FileSource::new("Alice in Wonderland", "data/alice30.txt")),
        Box::new(FileSource::new("Count of Monte Cristo", "data/crsto10.txt")),
        Box::new(FileSource::new("War and Peace", "data/war-and-peace.txt")),
        Box::new(UrlSource::new(
            "Frankenstein",
            "https://www.gutenberg.org/files/84/84-0.txt",
        )),
        Box::new(UrlSource::new(
            "Pride and Prejudice",
            "https://www.gutenberg.org/files/1342/1342-0.txt",
        )),
        Box::new(UrlSource::new(
            "Great Gatsby",
            "https://www.gutenberg.org/files/64317/64317-0.txt",
        )),
    ];

    println!("=== Long Word Count ===\n");
    let report = aggregate::total_long_words(&sources, LONG_LENGTH);

    println!();
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(count) => println!("{}: {} long words", outcome.label, count),
            Err(e) => println!("{}: failed ({}), contributing 0", outcome.label, e),
        }
    }
    println!("\nFound {} long words", report.total());
}
