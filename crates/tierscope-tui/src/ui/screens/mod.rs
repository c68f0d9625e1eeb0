mod tier_chart;

pub use tier_chart::{CHART_TITLE, TierChartScreen};
