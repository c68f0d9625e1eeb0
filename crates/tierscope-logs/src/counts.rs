use tierscope_types::{ClassifiedRecord, Tier};

/// Counts per tier
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierCounts {
    pub normal: usize,
    pub suspicious: usize,
    pub critical: usize,
}

impl TierCounts {
    /// Count the tiers of a classified dataset
    pub fn from_records(records: &[ClassifiedRecord]) -> Self {
        let mut counts = Self::default();
        for record in records {
            match record.tier {
                Tier::Normal => counts.normal += 1,
                Tier::Suspicious => counts.suspicious += 1,
                Tier::Critical => counts.critical += 1,
            }
        }
        counts
    }

    pub fn get(&self, tier: Tier) -> usize {
        match tier {
            Tier::Normal => self.normal,
            Tier::Suspicious => self.suspicious,
            Tier::Critical => self.critical,
        }
    }

    /// `(tier, count)` pairs in display order
    pub fn pairs(&self) -> [(Tier, usize); 3] {
        Tier::ALL.map(|tier| (tier, self.get(tier)))
    }

    pub fn total(&self) -> usize {
        self.normal + self.suspicious + self.critical
    }

    /// Largest single count, for scaling charts
    pub fn max(&self) -> usize {
        self.normal.max(self.suspicious).max(self.critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::classified;

    #[test]
    fn test_tier_counts() {
        let records = vec![
            classified("INFO", "a", 0),
            classified("WARNING", "b", 1),
            classified("ERROR", "c", 2),
            classified("CRITICAL", "d", 3),
            classified("INFO", "e", 0),
        ];
        let counts = TierCounts::from_records(&records);

        assert_eq!(
            counts,
            TierCounts {
                normal: 2,
                suspicious: 1,
                critical: 2
            }
        );
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.max(), 2);
        assert_eq!(counts.pairs()[1], (Tier::Suspicious, 1));
    }
}
