//! Shared types for tierscope
//!
//! This crate contains the record types that flow through the pipeline,
//! from the structured log line up to the classified, tiered record.

use chrono::NaiveDateTime;
use ratatui::style::Color;

// ============================================================================
// Log Types
// ============================================================================

/// Raw event type token, matched exactly as it appears in the log
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LogType {
    #[default]
    Info,
    Warning,
    Error,
    Critical,
    /// Any token outside the known set
    Other,
}

impl LogType {
    /// Match a type token. Case-sensitive: `"error"` is `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "INFO" => Self::Info,
            "WARNING" => Self::Warning,
            "ERROR" => Self::Error,
            "CRITICAL" => Self::Critical,
            _ => Self::Other,
        }
    }

    /// Numeric category code used as model feature and training label.
    ///
    /// Unknown types share code 0 with `INFO`.
    pub fn category_code(&self) -> u8 {
        match self {
            Self::Info | Self::Other => 0,
            Self::Warning => 1,
            Self::Error => 2,
            Self::Critical => 3,
        }
    }
}

/// Severity tier assigned from the classifier output
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Normal,
    Suspicious,
    Critical,
}

impl Tier {
    /// All tiers in display order
    pub const ALL: [Tier; 3] = [Tier::Normal, Tier::Suspicious, Tier::Critical];

    /// Map an anomaly code to a tier. Codes 2, 3 and anything out of range
    /// all land on `Critical`.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Normal,
            1 => Self::Suspicious,
            _ => Self::Critical,
        }
    }

    /// Label shown to operators
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Suspicious => "Suspeito",
            Self::Critical => "Crítico",
        }
    }

    /// Get display color for this tier
    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::Green,
            Self::Suspicious => Color::Yellow,
            Self::Critical => Color::Red,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Records
// ============================================================================

/// A log line split into its three parts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredRecord {
    /// First two whitespace tokens joined by a space
    pub timestamp: String,

    /// Event type token, e.g. `ERROR`
    pub kind: String,

    /// Free text after the first `": "`
    pub message: String,
}

impl StructuredRecord {
    pub fn new(timestamp: String, kind: String, message: String) -> Self {
        Self {
            timestamp,
            kind,
            message,
        }
    }

    /// Typed view of the raw type token
    pub fn log_type(&self) -> LogType {
        LogType::from_token(&self.kind)
    }
}

/// Structured record with derived model features
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    pub record: StructuredRecord,

    /// Date-time found between square brackets in the timestamp, if any
    pub parsed_timestamp: Option<NaiveDateTime>,

    /// Lowercased message
    pub message_lower: String,

    /// See [`LogType::category_code`]
    pub category_code: u8,

    /// Character count of `message_lower`
    pub message_length: usize,

    /// Message mentions a failure keyword
    pub has_failure_keyword: bool,
}

impl FeatureRecord {
    /// Feature vector fed to the classifier
    pub fn feature_vector(&self) -> Vec<f64> {
        vec![
            f64::from(self.category_code),
            self.message_length as f64,
            if self.has_failure_keyword { 1.0 } else { 0.0 },
        ]
    }

    /// Timestamp as shown in reports and alerts.
    ///
    /// Falls back to the raw timestamp text when it did not parse.
    pub fn display_timestamp(&self) -> String {
        match self.parsed_timestamp {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => self.record.timestamp.clone(),
        }
    }
}

/// Feature record with the classifier output and its tier
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedRecord {
    pub features: FeatureRecord,

    /// Raw class predicted by the classifier
    pub anomaly_code: u8,

    pub tier: Tier,
}

impl ClassifiedRecord {
    pub fn new(features: FeatureRecord, anomaly_code: u8) -> Self {
        Self {
            features,
            anomaly_code,
            tier: Tier::from_code(anomaly_code),
        }
    }

    /// Raw type token of the underlying line
    pub fn kind(&self) -> &str {
        &self.features.record.kind
    }

    pub fn message(&self) -> &str {
        &self.features.record.message
    }

    /// `<timestamp> - <message>` line used by reports and alerts
    pub fn listing_line(&self) -> String {
        format!(
            "{} - {}",
            self.features.display_timestamp(),
            self.features.record.message
        )
    }
}
