//! Error types for the IO-bound aggregation path.

use thiserror::Error;

/// Failure to open or read one data source. Recovered locally by the
/// aggregator: the source contributes zero and its siblings are unaffected.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}
