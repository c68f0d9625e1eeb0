use std::collections::BTreeSet;

use crate::{Classifier, ForestParams, ModelError, RandomForest, train_test_split};

/// Random forest trained to predict a row's category code.
///
/// The label is also one of the input features, so the model mostly
/// reproduces it. Only the training partition is fitted; the held-out rows
/// are never scored.
#[derive(Debug)]
pub struct SeverityModel {
    forest: RandomForest,
    train_rows: usize,
    test_rows: usize,
}

impl SeverityModel {
    /// Split the dataset and fit a forest on the training part
    pub fn train(
        features: &[Vec<f64>],
        labels: &[u8],
        params: &ForestParams,
    ) -> Result<Self, ModelError> {
        if features.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        if features.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                rows: features.len(),
                labels: labels.len(),
            });
        }

        let classes: BTreeSet<u8> = labels.iter().copied().collect();
        if classes.len() < 2 {
            return Err(ModelError::TooFewClasses {
                found: classes.len(),
            });
        }

        let split = train_test_split(features.len(), params.test_size, params.seed)?;
        let train_features: Vec<Vec<f64>> =
            split.train.iter().map(|&i| features[i].clone()).collect();
        let train_labels: Vec<usize> = split
            .train
            .iter()
            .map(|&i| usize::from(labels[i]))
            .collect();

        let mut forest = RandomForest::from_params(params);
        forest.fit(&train_features, &train_labels)?;

        tracing::info!(
            train = split.train.len(),
            held_out = split.test.len(),
            classes = classes.len(),
            "trained severity model"
        );

        Ok(Self {
            forest,
            train_rows: split.train.len(),
            test_rows: split.test.len(),
        })
    }

    /// Predict an anomaly code for every row
    pub fn predict_all(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ModelError> {
        let predictions = self.forest.predict(features)?;
        // Classes come from u8 labels, so they always fit
        Ok(predictions
            .into_iter()
            .map(|class| u8::try_from(class).unwrap_or(u8::MAX))
            .collect())
    }

    /// Rows used for fitting
    pub fn train_rows(&self) -> usize {
        self.train_rows
    }

    /// Rows held out and discarded
    pub fn test_rows(&self) -> usize {
        self.test_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(codes: &[u8]) -> Vec<Vec<f64>> {
        codes
            .iter()
            .map(|&c| vec![f64::from(c), 12.0, f64::from(c >= 2)])
            .collect()
    }

    #[test]
    fn test_train_and_predict_reproduces_labels() {
        let labels: Vec<u8> = (0..30).map(|i| (i % 4) as u8).collect();
        let features = rows(&labels);

        let model = SeverityModel::train(&features, &labels, &ForestParams::default()).unwrap();
        assert_eq!(model.train_rows(), 24);
        assert_eq!(model.test_rows(), 6);
        assert_eq!(model.predict_all(&features).unwrap(), labels);
    }

    #[test]
    fn test_single_class_is_rejected() {
        let labels = vec![0u8; 10];
        let features = rows(&labels);
        assert_eq!(
            SeverityModel::train(&features, &labels, &ForestParams::default()).unwrap_err(),
            ModelError::TooFewClasses { found: 1 }
        );
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        assert_eq!(
            SeverityModel::train(&[], &[], &ForestParams::default()).unwrap_err(),
            ModelError::EmptyDataset
        );
    }

    #[test]
    fn test_two_rows_train_on_one() {
        let labels = vec![0u8, 2];
        let features = rows(&labels);
        let model = SeverityModel::train(&features, &labels, &ForestParams::default()).unwrap();

        assert_eq!(model.train_rows(), 1);
        let predictions = model.predict_all(&features).unwrap();
        assert_eq!(predictions.len(), 2);
        // A single training row yields one constant prediction
        assert_eq!(predictions[0], predictions[1]);
    }
}
