use std::collections::HashSet;

use tierscope_types::{ClassifiedRecord, LogType, Tier};

/// Selects classified records by tier and raw log type
#[derive(Clone, Debug, Default)]
pub struct RecordFilter {
    /// Tiers to include (empty = all)
    tiers: HashSet<Tier>,

    /// Log types to include (empty = all)
    types: HashSet<LogType>,
}

impl RecordFilter {
    /// Create a filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Set tiers to filter by
    pub fn with_tiers<I: IntoIterator<Item = Tier>>(mut self, tiers: I) -> Self {
        self.tiers = tiers.into_iter().collect();
        self
    }

    /// Set log types to filter by
    pub fn with_types<I: IntoIterator<Item = LogType>>(mut self, types: I) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &ClassifiedRecord) -> bool {
        let tier_match = self.tiers.is_empty() || self.tiers.contains(&record.tier);
        let type_match =
            self.types.is_empty() || self.types.contains(&record.features.record.log_type());

        tier_match && type_match
    }

    /// Matching records in their original order
    pub fn select<'a>(&self, records: &'a [ClassifiedRecord]) -> Vec<&'a ClassifiedRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Number of matching records
    pub fn count(&self, records: &[ClassifiedRecord]) -> usize {
        records.iter().filter(|r| self.matches(r)).count()
    }
}

/// Filters behind the report sections and the alert banner
pub struct FilterPresets;

impl FilterPresets {
    /// Records classified into the critical tier
    pub fn critical() -> RecordFilter {
        RecordFilter::new().with_tiers([Tier::Critical])
    }

    /// Records whose raw type is exactly `ERROR`
    pub fn errors() -> RecordFilter {
        RecordFilter::new().with_types([LogType::Error])
    }

    /// Records whose raw type is exactly `WARNING`
    pub fn warnings() -> RecordFilter {
        RecordFilter::new().with_types([LogType::Warning])
    }
}
