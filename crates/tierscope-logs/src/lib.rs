//! Log processing for tierscope
//!
//! This crate provides log loading, line structuring, feature extraction,
//! classification into tiers, critical-event alerts and the text report.

mod alert;
mod counts;
mod features;
mod filter;
mod labeler;
mod loader;
mod parser;
mod pipeline;
mod report;

pub use alert::{critical_events, emit_alerts};
pub use counts::TierCounts;
pub use features::{FeatureBuilder, build_features};
pub use filter::{FilterPresets, RecordFilter};
pub use labeler::label_records;
pub use loader::{LoadError, load_lines, read_lines};
pub use parser::{LineStructurer, structure_lines};
pub use pipeline::{LogPipeline, Outcome};
pub use report::{DEFAULT_REPORT_PATH, ReportError, render_report, write_report};

// Re-export types used in our public API
pub use tierscope_model::{ForestParams, ModelError};
pub use tierscope_types::{ClassifiedRecord, FeatureRecord, LogType, StructuredRecord, Tier};
