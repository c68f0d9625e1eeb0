//! Classification for tierscope
//!
//! A small, fully seeded random forest and the severity model built on it.
//! Given the same rows, labels and seed, training and prediction are
//! deterministic.

mod error;
mod forest;
mod severity;
mod split;
mod tree;

pub use error::ModelError;
pub use forest::{ForestParams, RandomForest};
pub use severity::SeverityModel;
pub use split::{Split, train_test_split};
pub use tree::DecisionTree;

/// A supervised classifier over dense `f64` feature rows
pub trait Classifier {
    /// Fit the model. `labels[i]` is the class of `features[i]`.
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError>;

    /// Predict one class per row
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError>;
}

/// Check that `features` and `labels` describe a usable training set.
///
/// Returns the row width.
pub(crate) fn validate_training_set(
    features: &[Vec<f64>],
    labels: &[usize],
) -> Result<usize, ModelError> {
    if features.is_empty() {
        return Err(ModelError::EmptyDataset);
    }
    if features.len() != labels.len() {
        return Err(ModelError::LengthMismatch {
            rows: features.len(),
            labels: labels.len(),
        });
    }
    validate_rows(features)
}

/// Check that all rows share the width of the first one. Returns that width.
pub(crate) fn validate_rows(features: &[Vec<f64>]) -> Result<usize, ModelError> {
    let width = features.first().map_or(0, Vec::len);
    if let Some((row, found)) = features
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(ModelError::RaggedFeatures {
            row,
            expected: width,
            found,
        });
    }
    Ok(width)
}
