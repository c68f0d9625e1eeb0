use std::path::{Path, PathBuf};

use tierscope_model::{ForestParams, ModelError, SeverityModel};
use tierscope_types::{ClassifiedRecord, FeatureRecord};

use crate::{build_features, label_records, load_lines, structure_lines};

/// How a pipeline run ended
#[derive(Debug)]
pub enum Outcome {
    /// The input file does not exist; nothing was processed
    MissingInput(PathBuf),
    /// The input could not be read or was empty
    NoLogs,
    /// Every structured line, classified and tiered
    Classified(Vec<ClassifiedRecord>),
}

/// Runs load → structure → features → classify → label
pub struct LogPipeline {
    params: ForestParams,
}

impl LogPipeline {
    pub fn new(params: ForestParams) -> Self {
        Self { params }
    }

    /// Run the whole pipeline over a log file.
    ///
    /// Only a model-fit failure is returned as an error.
    pub fn run(&self, path: &Path) -> Result<Outcome, ModelError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "log file not found");
            return Ok(Outcome::MissingInput(path.to_path_buf()));
        }

        let lines = load_lines(path);
        if lines.is_empty() {
            return Ok(Outcome::NoLogs);
        }

        self.classify_lines(&lines).map(Outcome::Classified)
    }

    /// Structure, featurize, classify and label raw lines
    pub fn classify_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
    ) -> Result<Vec<ClassifiedRecord>, ModelError> {
        let features = build_features(structure_lines(lines));
        let predictions = self.predict(&features)?;
        let records = label_records(features, &predictions);

        tracing::info!(
            lines = lines.len(),
            records = records.len(),
            "classified log records"
        );
        Ok(records)
    }

    /// Train on the dataset and predict every row of that same dataset
    fn predict(&self, features: &[FeatureRecord]) -> Result<Vec<u8>, ModelError> {
        let matrix: Vec<Vec<f64>> = features.iter().map(FeatureRecord::feature_vector).collect();
        let labels: Vec<u8> = features.iter().map(|f| f.category_code).collect();

        let model = SeverityModel::train(&matrix, &labels, &self.params)?;
        model.predict_all(&matrix)
    }
}

impl Default for LogPipeline {
    fn default() -> Self {
        Self::new(ForestParams::default())
    }
}
