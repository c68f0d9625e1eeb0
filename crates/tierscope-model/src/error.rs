use thiserror::Error;

/// Errors raised while fitting or using a classifier
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("cannot fit a model on an empty dataset")]
    EmptyDataset,

    #[error("labels contain {found} distinct class(es), at least 2 are required")]
    TooFewClasses { found: usize },

    #[error("{rows} row(s) cannot be split into non-empty train and test sets (test size {test_size})")]
    InsufficientRows { rows: usize, test_size: f64 },

    #[error("feature rows ({rows}) and labels ({labels}) differ in length")]
    LengthMismatch { rows: usize, labels: usize },

    #[error("feature row {row} has {found} column(s), expected {expected}")]
    RaggedFeatures {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("model has not been fitted")]
    NotFitted,
}
