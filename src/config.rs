//! Run configuration
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use tierscope_logs::{DEFAULT_REPORT_PATH, ForestParams};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "tierscope.toml";

/// Default input location, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "log/log.txt";

/// Settings file contents. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub log_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub show_chart: Option<bool>,
    pub model: ModelSection,
}

/// `[model]` table
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    pub trees: Option<usize>,
    pub seed: Option<u64>,
    pub test_size: Option<f64>,
}

/// Effective configuration for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_path: PathBuf,
    pub report_path: PathBuf,
    pub show_chart: bool,
    pub model: ForestParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            show_chart: true,
            model: ForestParams::default(),
        }
    }
}

/// Command-line values that override the file
#[derive(Debug, Default)]
pub struct Overrides {
    pub log_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub trees: Option<usize>,
    pub no_chart: bool,
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, `tierscope.toml` is read
    /// if present.
    pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match path {
            Some(path) => Some(read_file_config(path)?),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Some(read_file_config(default)?)
                } else {
                    None
                }
            }
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.merge_file(file);
        }
        config.merge_overrides(overrides);
        config.validate()?;

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    fn merge_file(&mut self, file: FileConfig) {
        if let Some(log_path) = file.log_path {
            self.log_path = log_path;
        }
        if let Some(report_path) = file.report_path {
            self.report_path = report_path;
        }
        if let Some(show_chart) = file.show_chart {
            self.show_chart = show_chart;
        }
        if let Some(trees) = file.model.trees {
            self.model.trees = trees;
        }
        if let Some(seed) = file.model.seed {
            self.model.seed = seed;
        }
        if let Some(test_size) = file.model.test_size {
            self.model.test_size = test_size;
        }
    }

    fn merge_overrides(&mut self, overrides: Overrides) {
        if let Some(log_path) = overrides.log_path {
            self.log_path = log_path;
        }
        if let Some(report_path) = overrides.report_path {
            self.report_path = report_path;
        }
        if let Some(seed) = overrides.seed {
            self.model.seed = seed;
        }
        if let Some(trees) = overrides.trees {
            self.model.trees = trees;
        }
        if overrides.no_chart {
            self.show_chart = false;
        }
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.model.trees > 0, "model.trees must be at least 1");
        anyhow::ensure!(
            self.model.test_size > 0.0 && self.model.test_size < 1.0,
            "model.test_size must be between 0 and 1 (exclusive), got {}",
            self.model.test_size
        );
        Ok(())
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.log_path, PathBuf::from("log/log.txt"));
        assert_eq!(config.report_path, PathBuf::from("relatorio/relatorio.txt"));
        assert!(config.show_chart);
        assert_eq!(config.model, ForestParams::default());
    }

    #[test]
    fn test_file_values_and_overrides() {
        let file = write_config(
            r#"
log_path = "custom/app.log"
show_chart = false

[model]
trees = 10
seed = 7
"#,
        );

        let config = Config::load(
            Some(file.path()),
            Overrides {
                seed: Some(99),
                ..Overrides::default()
            },
        )
        .unwrap();

        assert_eq!(config.log_path, PathBuf::from("custom/app.log"));
        assert_eq!(config.report_path, PathBuf::from(DEFAULT_REPORT_PATH));
        assert!(!config.show_chart);
        assert_eq!(config.model.trees, 10);
        assert_eq!(config.model.seed, 99);
        assert_eq!(config.model.test_size, 0.2);
    }

    #[test]
    fn test_no_chart_override() {
        let file = write_config("show_chart = true\n");
        let config = Config::load(
            Some(file.path()),
            Overrides {
                no_chart: true,
                ..Overrides::default()
            },
        )
        .unwrap();
        assert!(!config.show_chart);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let file = write_config("unknown_key = 1\n");
        assert!(Config::load(Some(file.path()), Overrides::default()).is_err());

        let file = write_config("[model]\ntest_size = 1.5\n");
        let err = Config::load(Some(file.path()), Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("test_size"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("none.toml")), Overrides::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
