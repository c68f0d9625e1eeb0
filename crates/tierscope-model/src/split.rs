use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::ModelError;

/// Row indices of a train/test partition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Shuffle `0..rows` with a seeded RNG and cut it into train and test parts.
///
/// The test part holds `ceil(test_size * rows)` indices. Both parts must be
/// non-empty.
pub fn train_test_split(rows: usize, test_size: f64, seed: u64) -> Result<Split, ModelError> {
    let insufficient = || ModelError::InsufficientRows { rows, test_size };

    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(insufficient());
    }

    let n_test = (test_size * rows as f64).ceil() as usize;
    if n_test == 0 || n_test >= rows {
        return Err(insufficient());
    }

    let mut indices: Vec<usize> = (0..rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train = indices.split_off(n_test);
    tracing::debug!(train = train.len(), test = indices.len(), "split dataset");

    Ok(Split {
        train,
        test: indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sizes() {
        let split = train_test_split(10, 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);

        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_split_rounds_test_up() {
        let split = train_test_split(2, 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 1);
        assert_eq!(split.test.len(), 1);

        let split = train_test_split(11, 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 3);
    }

    #[test]
    fn test_split_is_deterministic() {
        assert_eq!(
            train_test_split(50, 0.2, 42).unwrap(),
            train_test_split(50, 0.2, 42).unwrap()
        );
    }

    #[test]
    fn test_split_rejects_too_few_rows() {
        assert!(matches!(
            train_test_split(1, 0.2, 42),
            Err(ModelError::InsufficientRows { rows: 1, .. })
        ));
        assert!(train_test_split(0, 0.2, 42).is_err());
        assert!(train_test_split(10, 0.0, 42).is_err());
        assert!(train_test_split(10, 1.0, 42).is_err());
    }
}
