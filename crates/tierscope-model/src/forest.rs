use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::tree::{DecisionTree, argmax};
use crate::{Classifier, ModelError, validate_rows, validate_training_set};

/// Random forest hyper-parameters
#[derive(Clone, Debug, PartialEq)]
pub struct ForestParams {
    /// Number of trees
    pub trees: usize,

    /// Seed for bootstrapping, feature sampling and the train/test split
    pub seed: u64,

    /// Fraction of rows held out by the train/test split
    pub test_size: f64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            trees: 100,
            seed: 42,
            test_size: 0.2,
        }
    }
}

/// Bagged ensemble of [`DecisionTree`]s.
///
/// Each tree sees a bootstrap sample of the rows and `sqrt(width)` candidate
/// features per split. Predictions average the trees' leaf distributions.
#[derive(Clone, Debug)]
pub struct RandomForest {
    trees: usize,
    seed: u64,
    n_classes: usize,
    estimators: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(trees: usize, seed: u64) -> Self {
        Self {
            trees: trees.max(1),
            seed,
            n_classes: 0,
            estimators: Vec::new(),
        }
    }

    pub fn from_params(params: &ForestParams) -> Self {
        Self::new(params.trees, params.seed)
    }

    /// Fitted trees
    pub fn estimators(&self) -> &[DecisionTree] {
        &self.estimators
    }

    /// Mean class distribution over all trees
    fn predict_distribution(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        let mut sum = vec![0.0; self.n_classes];
        for tree in &self.estimators {
            let distribution = tree.leaf_distribution(row)?;
            for (total, p) in sum.iter_mut().zip(distribution) {
                *total += p;
            }
        }
        let n = self.estimators.len() as f64;
        Ok(sum.into_iter().map(|total| total / n).collect())
    }
}

impl Classifier for RandomForest {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        let width = validate_training_set(features, labels)?;
        let rows = features.len();
        let n_classes = labels.iter().max().map_or(0, |max| max + 1);
        let max_features = ((width as f64).sqrt() as usize).max(1);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut estimators = Vec::with_capacity(self.trees);

        for _ in 0..self.trees {
            let sample: Vec<usize> = (0..rows).map(|_| rng.random_range(0..rows)).collect();
            let mut tree = DecisionTree::new(Some(max_features), rng.random());
            tree.fit_rows(features, labels, sample, n_classes);
            estimators.push(tree);
        }

        tracing::debug!(
            trees = estimators.len(),
            rows,
            classes = n_classes,
            "fitted random forest"
        );

        self.n_classes = n_classes;
        self.estimators = estimators;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        if self.estimators.is_empty() {
            return Err(ModelError::NotFitted);
        }
        validate_rows(features)?;
        debug_assert!(self.estimators.iter().all(|t| t.n_classes() == self.n_classes));

        features
            .iter()
            .map(|row| self.predict_distribution(row).map(|d| argmax(&d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> (Vec<Vec<f64>>, Vec<usize>) {
        let mut features = Vec::new();
        let mut labels = Vec::new();
        for i in 0..40 {
            let class = i % 4;
            // Message length is constant so only the class-bearing columns split
            features.push(vec![class as f64, 20.0, f64::from(class == 2)]);
            labels.push(class);
        }
        (features, labels)
    }

    #[test]
    fn test_forest_learns_label_column() {
        let (features, labels) = dataset();
        let mut forest = RandomForest::new(25, 42);
        forest.fit(&features, &labels).unwrap();

        assert_eq!(forest.estimators().len(), 25);
        assert_eq!(forest.predict(&features).unwrap(), labels);
    }

    #[test]
    fn test_forest_is_deterministic() {
        let (features, labels) = dataset();

        let mut a = RandomForest::new(10, 7);
        let mut b = RandomForest::new(10, 7);
        a.fit(&features, &labels).unwrap();
        b.fit(&features, &labels).unwrap();

        let probe = vec![vec![1.5, 30.0, 0.0], vec![2.5, 12.0, 1.0]];
        assert_eq!(a.predict(&probe).unwrap(), b.predict(&probe).unwrap());
    }

    #[test]
    fn test_forest_rejects_bad_input() {
        let mut forest = RandomForest::new(5, 1);
        assert_eq!(forest.fit(&[], &[]), Err(ModelError::EmptyDataset));
        assert_eq!(
            forest.fit(&[vec![1.0]], &[0, 1]),
            Err(ModelError::LengthMismatch { rows: 1, labels: 2 })
        );
        assert!(matches!(
            forest.fit(&[vec![1.0], vec![1.0, 2.0]], &[0, 1]),
            Err(ModelError::RaggedFeatures { row: 1, .. })
        ));
        assert_eq!(forest.predict(&[vec![1.0]]), Err(ModelError::NotFitted));
    }
}
