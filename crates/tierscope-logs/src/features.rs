use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

use tierscope_types::{FeatureRecord, StructuredRecord};

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("bracket pattern is valid"));

/// Message substrings that flag a failure
const FAILURE_KEYWORDS: [&str; 2] = ["falha", "grave"];

/// Date-time layouts accepted inside the brackets
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Derives model features from structured records
pub struct FeatureBuilder;

impl FeatureBuilder {
    pub fn build(record: StructuredRecord) -> FeatureRecord {
        let parsed_timestamp = Self::extract_timestamp(&record.timestamp);
        let message_lower = record.message.to_lowercase();
        let category_code = record.log_type().category_code();
        let message_length = message_lower.chars().count();
        let has_failure_keyword = Self::has_failure_keyword(&message_lower);

        FeatureRecord {
            record,
            parsed_timestamp,
            message_lower,
            category_code,
            message_length,
            has_failure_keyword,
        }
    }

    /// Parse the text between the first pair of square brackets
    pub fn extract_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
        let inner = BRACKETED.captures(timestamp)?.get(1)?.as_str().trim();
        Self::parse_datetime(inner)
    }

    fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
        for format in DATETIME_FORMATS {
            if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
                return Some(ts);
            }
        }

        if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
            return Some(ts.naive_utc());
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    }

    /// Expects an already lowercased message
    pub fn has_failure_keyword(message_lower: &str) -> bool {
        FAILURE_KEYWORDS
            .iter()
            .any(|keyword| message_lower.contains(keyword))
    }
}

/// Build features for every record, keeping order
pub fn build_features(records: Vec<StructuredRecord>) -> Vec<FeatureRecord> {
    let features: Vec<FeatureRecord> = records.into_iter().map(FeatureBuilder::build).collect();
    tracing::debug!(
        rows = features.len(),
        timestamps = features.iter().filter(|f| f.parsed_timestamp.is_some()).count(),
        "built features"
    );
    features
}
