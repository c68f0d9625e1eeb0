use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Classifier, ModelError, validate_rows, validate_training_set};

/// Smallest impurity decrease that still counts as a useful split
const IMPURITY_EPSILON: f64 = 1e-12;

#[derive(Clone, Debug)]
enum Node {
    Leaf {
        /// Class frequencies of the training rows that reached this leaf
        distribution: Vec<f64>,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// CART classification tree using Gini impurity.
///
/// Trees grow until every leaf is pure or cannot be split any further.
#[derive(Clone, Debug)]
pub struct DecisionTree {
    /// Candidate features inspected per split (`None` = all)
    max_features: Option<usize>,
    seed: u64,
    width: usize,
    n_classes: usize,
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Create an unfitted tree
    pub fn new(max_features: Option<usize>, seed: u64) -> Self {
        Self {
            max_features,
            seed,
            width: 0,
            n_classes: 0,
            nodes: Vec::new(),
        }
    }

    /// Number of nodes, leaves included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Grow the tree from a subset of rows. `rows` may repeat indices.
    pub(crate) fn fit_rows(
        &mut self,
        features: &[Vec<f64>],
        labels: &[usize],
        rows: Vec<usize>,
        n_classes: usize,
    ) {
        let width = features.first().map_or(0, Vec::len);
        let max_features = self.max_features.unwrap_or(width).clamp(1, width.max(1));

        let mut builder = TreeBuilder {
            features,
            labels,
            n_classes,
            width,
            max_features,
            rng: StdRng::seed_from_u64(self.seed),
            nodes: Vec::new(),
        };
        builder.build(rows);

        self.width = width;
        self.n_classes = n_classes;
        self.nodes = builder.nodes;
    }

    /// Class distribution of the leaf `row` falls into
    pub(crate) fn leaf_distribution(&self, row: &[f64]) -> Result<&[f64], ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::NotFitted);
        }
        if row.len() != self.width {
            return Err(ModelError::RaggedFeatures {
                row: 0,
                expected: self.width,
                found: row.len(),
            });
        }

        let mut index = 0;
        loop {
            match &self.nodes[index] {
                Node::Leaf { distribution } => return Ok(distribution),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    pub(crate) fn n_classes(&self) -> usize {
        self.n_classes
    }
}

impl Classifier for DecisionTree {
    fn fit(&mut self, features: &[Vec<f64>], labels: &[usize]) -> Result<(), ModelError> {
        validate_training_set(features, labels)?;
        let n_classes = labels.iter().max().map_or(0, |max| max + 1);
        self.fit_rows(features, labels, (0..features.len()).collect(), n_classes);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<usize>, ModelError> {
        validate_rows(features)?;
        features
            .iter()
            .map(|row| self.leaf_distribution(row).map(argmax))
            .collect()
    }
}

/// Index of the largest value; ties go to the lowest index
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = i;
        }
    }
    best
}

fn gini(counts: &[usize], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    1.0 - counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total;
            p * p
        })
        .sum::<f64>()
}

struct Candidate {
    feature: usize,
    threshold: f64,
    /// Weighted impurity of the two children
    impurity: f64,
}

struct TreeBuilder<'a> {
    features: &'a [Vec<f64>],
    labels: &'a [usize],
    n_classes: usize,
    width: usize,
    max_features: usize,
    rng: StdRng,
    nodes: Vec<Node>,
}

impl TreeBuilder<'_> {
    /// Build the subtree for `rows` and return its node index
    fn build(&mut self, rows: Vec<usize>) -> usize {
        let counts = self.class_counts(&rows);
        let impurity = gini(&counts, rows.len());

        if rows.len() < 2 || impurity <= IMPURITY_EPSILON {
            return self.push_leaf(&counts, rows.len());
        }

        let Some(split) = self.best_split(&rows, impurity) else {
            return self.push_leaf(&counts, rows.len());
        };

        let features = self.features;
        let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
            .into_iter()
            .partition(|&r| features[r][split.feature] <= split.threshold);

        // Reserve the slot so the parent precedes its children
        let index = self.nodes.len();
        self.nodes.push(Node::Leaf {
            distribution: Vec::new(),
        });
        let left = self.build(left_rows);
        let right = self.build(right_rows);
        self.nodes[index] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        index
    }

    fn push_leaf(&mut self, counts: &[usize], total: usize) -> usize {
        let distribution = counts
            .iter()
            .map(|&c| if total == 0 { 0.0 } else { c as f64 / total as f64 })
            .collect();
        self.nodes.push(Node::Leaf { distribution });
        self.nodes.len() - 1
    }

    fn class_counts(&self, rows: &[usize]) -> Vec<usize> {
        let mut counts = vec![0; self.n_classes];
        for &r in rows {
            counts[self.labels[r]] += 1;
        }
        counts
    }

    /// Best improving split over a random subset of features.
    ///
    /// Keeps inspecting features past `max_features` until one improves.
    fn best_split(&mut self, rows: &[usize], parent_impurity: f64) -> Option<Candidate> {
        let mut order: Vec<usize> = (0..self.width).collect();
        order.shuffle(&mut self.rng);

        let mut best: Option<Candidate> = None;
        for (visited, feature) in order.into_iter().enumerate() {
            if visited >= self.max_features && best.is_some() {
                break;
            }
            let Some(candidate) = self.best_split_on(rows, feature) else {
                continue;
            };
            if candidate.impurity >= parent_impurity - IMPURITY_EPSILON {
                continue;
            }
            if best.as_ref().is_none_or(|b| candidate.impurity < b.impurity) {
                best = Some(candidate);
            }
        }
        best
    }

    fn best_split_on(&self, rows: &[usize], feature: usize) -> Option<Candidate> {
        let mut sorted: Vec<(f64, usize)> = rows
            .iter()
            .map(|&r| (self.features[r][feature], self.labels[r]))
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let total = sorted.len();
        let all = self.class_counts(rows);
        let mut left = vec![0; self.n_classes];
        let mut best: Option<Candidate> = None;

        for i in 0..total - 1 {
            left[sorted[i].1] += 1;
            let (value, next) = (sorted[i].0, sorted[i + 1].0);
            if value >= next {
                continue;
            }

            let n_left = i + 1;
            let n_right = total - n_left;
            let right: Vec<usize> = all.iter().zip(&left).map(|(a, l)| a - l).collect();
            let impurity = (n_left as f64 * gini(&left, n_left)
                + n_right as f64 * gini(&right, n_right))
                / total as f64;

            if best.as_ref().is_none_or(|b| impurity < b.impurity) {
                best = Some(Candidate {
                    feature,
                    threshold: value + (next - value) / 2.0,
                    impurity,
                });
            }
        }
        best
    }
}
