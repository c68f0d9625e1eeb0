use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read a log file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a UTF-8 log file into its lines, terminators stripped
pub fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Read a log file, reporting any failure and returning no lines instead
pub fn load_lines(path: &Path) -> Vec<String> {
    match read_lines(path) {
        Ok(lines) => {
            tracing::debug!(path = %path.display(), lines = lines.len(), "loaded log file");
            lines
        }
        Err(e) => {
            tracing::error!("Erro ao carregar logs: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_lines_strips_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "first line\r\nsecond line\nthird").unwrap();

        let lines = load_lines(file.path());
        assert_eq!(lines, vec!["first line", "second line", "third"]);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        assert!(load_lines(&missing).is_empty());
        assert!(matches!(read_lines(&missing), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_utf8_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();
        assert!(load_lines(file.path()).is_empty());
    }
}
