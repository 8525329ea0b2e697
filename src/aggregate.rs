//! IO-bound fan-out/fan-in: count long words across independent sources.
//!
//! One worker per source runs concurrently; a source that fails to open or
//! read contributes zero and is recorded in the report without disturbing
//! its siblings. The aggregator returns only after every worker is joined,
//! and every source yields exactly one outcome.

use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::thread;

use crate::error::SourceError;

lazy_static! {
    // Words are maximal runs of letters; everything else is a separator.
    static ref NON_LETTERS: Regex = Regex::new(r"[^\p{L}]+").unwrap();
}

/// A data source from which one may open a readable text stream, with a
/// label for display. The opening worker exclusively owns the stream, which
/// is closed on drop along every exit path.
pub trait Source: Send + Sync {
    fn describe(&self) -> &str;
    fn open(&self) -> Result<Box<dyn Read + Send>, SourceError>;
}

/// A source backed by a local file.
pub struct FileSource {
    label: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        FileSource {
            label: label.into(),
            path: path.into(),
        }
    }
}

impl Source for FileSource {
    fn describe(&self) -> &str {
        &self.label
    }

    fn open(&self) -> Result<Box<dyn Read + Send>, SourceError> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// A source backed by a web URL, fetched with a blocking GET.
pub struct UrlSource {
    label: String,
    url: String,
}

impl UrlSource {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        UrlSource {
            label: label.into(),
            url: url.into(),
        }
    }
}

impl Source for UrlSource {
    fn describe(&self) -> &str {
        &self.label
    }

    fn open(&self) -> Result<Box<dyn Read + Send>, SourceError> {
        let response = reqwest::blocking::get(&self.url)?.error_for_status()?;
        Ok(Box::new(response))
    }
}

/// Count words of length >= `min_len` in one stream, line by line.
pub fn count_long_words<R: Read>(reader: R, min_len: usize) -> Result<u64, SourceError> {
    let mut total = 0u64;
    for line in BufReader::new(reader).lines() {
        let line = line?;
        total += NON_LETTERS
            .split(&line)
            .filter(|word| word.chars().count() >= min_len)
            .count() as u64;
    }
    Ok(total)
}

/// One source's isolated outcome: its count, or the failure that replaced
/// it.
pub struct SourceOutcome {
    pub label: String,
    pub result: Result<u64, SourceError>,
}

impl SourceOutcome {
    /// Failures contribute zero.
    pub fn contribution(&self) -> u64 {
        *self.result.as_ref().unwrap_or(&0)
    }
}

/// Per-source breakdown of one aggregation run, in input order.
pub struct AggregateReport {
    pub outcomes: Vec<SourceOutcome>,
}

impl AggregateReport {
    /// Sum of all contributions. Completion order of the workers cannot
    /// affect this: addition over the per-source counts commutes.
    pub fn total(&self) -> u64 {
        self.outcomes.iter().map(SourceOutcome::contribution).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SourceOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Run one counting worker per source concurrently and wait for all of
/// them. A worker that panics aborts the run; an IO failure does not.
pub fn total_long_words(sources: &[Box<dyn Source>], min_len: usize) -> AggregateReport {
    let outcomes = thread::scope(|s| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| {
                s.spawn(move || {
                    println!("Starting {}", source.describe());
                    let result = source
                        .open()
                        .and_then(|stream| count_long_words(stream, min_len));
                    println!("Ending {}", source.describe());
                    SourceOutcome {
                        label: source.describe().to_string(),
                        result,
                    }
                })
            })
            .collect();

        // Joining in spawn order keeps the breakdown in input order; the
        // total is order-independent either way.
        handles
            .into_iter()
            .map(|handle| handle.join().expect("aggregation worker panicked"))
            .collect()
    });
    AggregateReport { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MIN_LEN: usize = 7;

    fn temp_source(label: &str, text: &str) -> (NamedTempFile, Box<dyn Source>) {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(text.as_bytes()).expect("write temp file");
        let source = Box::new(FileSource::new(label, file.path()));
        (file, source as Box<dyn Source>)
    }

    #[test]
    fn test_counts_words_at_threshold() {
        let text = "placard nвостоков tiny enormousness, word-breaking;evident\n";
        // placard (7), nвостоков (9 characters, not bytes), enormousness
        // (12), breaking (8), evident (7); the hyphen splits word-breaking.
        let count = count_long_words(text.as_bytes(), MIN_LEN).unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_punctuation_and_digits_split_words() {
        let text = "abcdefg123hijklmn\nabc def\n";
        // Digits separate two 7-letter words.
        assert_eq!(count_long_words(text.as_bytes(), 7).unwrap(), 2);
    }

    #[test]
    fn test_empty_stream_counts_zero() {
        assert_eq!(count_long_words("".as_bytes(), MIN_LEN).unwrap(), 0);
    }

    #[test]
    fn test_aggregates_across_sources() {
        let (_f1, s1) = temp_source("first", "greatest expectations\nand more handling\n");
        let (_f2, s2) = temp_source("second", "shorter text, nothing long here\n");
        let sources = vec![s1, s2];

        let report = total_long_words(&sources, MIN_LEN);
        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].label, "first");
        // greatest (8), expectations (12), handling (8) / shorter (7), nothing (7)
        assert_eq!(report.outcomes[0].contribution(), 3);
        assert_eq!(report.outcomes[1].contribution(), 2);
        assert_eq!(report.total(), 5);
    }

    #[test]
    fn test_failed_source_is_isolated() {
        let (_f1, readable_a) = temp_source("a", "elephants remember\n");
        let (_f2, readable_b) = temp_source("b", "nothing notable\n");
        let missing: Box<dyn Source> =
            Box::new(FileSource::new("missing", "/no/such/path/anywhere.txt"));
        let sources = vec![readable_a, missing, readable_b];

        let report = total_long_words(&sources, MIN_LEN);
        assert_eq!(report.outcomes.len(), 3);
        // elephants (9), remember (8) / nothing (7), notable (7)
        assert_eq!(report.total(), 4);
        let failed: Vec<&str> = report.failures().map(|o| o.label.as_str()).collect();
        assert_eq!(failed, vec!["missing"]);
    }

    #[test]
    fn test_every_source_yields_one_outcome() {
        let sources: Vec<Box<dyn Source>> = (0..5)
            .map(|i| {
                Box::new(FileSource::new(format!("s{}", i), "/definitely/missing"))
                    as Box<dyn Source>
            })
            .collect();
        let report = total_long_words(&sources, MIN_LEN);
        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(report.total(), 0);
        assert_eq!(report.failures().count(), 5);
    }
}
