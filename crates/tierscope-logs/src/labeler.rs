use tierscope_types::{ClassifiedRecord, FeatureRecord};

/// Attach each prediction and its tier to the matching feature row.
///
/// `predictions` must hold one code per feature row.
pub fn label_records(features: Vec<FeatureRecord>, predictions: &[u8]) -> Vec<ClassifiedRecord> {
    debug_assert_eq!(features.len(), predictions.len());
    features
        .into_iter()
        .zip(predictions)
        .map(|(features, &code)| ClassifiedRecord::new(features, code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureBuilder;
    use tierscope_types::{StructuredRecord, Tier};

    #[test]
    fn test_label_records() {
        let features: Vec<FeatureRecord> = ["INFO", "WARNING", "ERROR", "CRITICAL"]
            .iter()
            .map(|kind| {
                FeatureBuilder::build(StructuredRecord::new(
                    "a b".to_string(),
                    kind.to_string(),
                    "m".to_string(),
                ))
            })
            .collect();

        let tiers: Vec<Tier> = label_records(features, &[0, 1, 2, 3])
            .into_iter()
            .map(|r| r.tier)
            .collect();
        assert_eq!(
            tiers,
            vec![Tier::Normal, Tier::Suspicious, Tier::Critical, Tier::Critical]
        );
    }
}
