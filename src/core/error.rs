// src/core/error.rs

use thiserror::Error;

/// Failure modes of one fetch-parse-filter cycle. Every variant is terminal
/// for the cycle that raised it: nothing is retried and a failed stage
/// returns no partial results.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Extraction marker absent from the raw page text.
    #[error("field marker {0} not found in page text")]
    FieldNotFound(&'static str),

    /// A value failed numeric coercion after cleanup.
    #[error("cannot coerce {field} value {value:?}")]
    TypeCoercion { field: &'static str, value: String },

    /// An expected options table is missing from the page.
    #[error("options table {0} not found (calls at 0, puts at 1)")]
    MissingTable(usize),

    /// A data row carried the wrong number of cells.
    #[error("expected {expected} cells per row, got {got}")]
    RowShape { expected: usize, got: usize },

    #[error("no call strikes above the current price")]
    NoOtmCalls,

    #[error("no put strikes at or below the at-the-money strike")]
    NoOtmPuts,

    #[error("http error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
