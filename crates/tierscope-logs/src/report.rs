use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use tierscope_types::ClassifiedRecord;

use crate::{FilterPresets, RecordFilter};

/// Default report location, relative to the working directory
pub const DEFAULT_REPORT_PATH: &str = "relatorio/relatorio.txt";

const HEADER: &str = "📌 RELATÓRIO DE LOGS 📌";
const RULE_WIDTH: usize = 50;

/// Failure to write the report file
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Render the full report text
pub fn render_report(records: &[ClassifiedRecord]) -> String {
    let critical = FilterPresets::critical();
    let errors = FilterPresets::errors();
    let warnings = FilterPresets::warnings();

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{HEADER}");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Total de eventos processados: {}", records.len());
    let _ = writeln!(out, "Eventos Críticos: {}", critical.count(records));
    let _ = writeln!(out, "Eventos de Erro: {}", errors.count(records));
    let _ = writeln!(out, "Eventos de Aviso: {}", warnings.count(records));

    write_section(&mut out, "🚨 Eventos Críticos", &critical, records);
    write_section(&mut out, "❌ Eventos de Erro", &errors, records);
    write_section(&mut out, "⚠️ Eventos de Aviso", &warnings, records);

    let _ = writeln!(out, "\nRelatório gerado com sucesso!");
    out
}

fn write_section(out: &mut String, title: &str, filter: &RecordFilter, records: &[ClassifiedRecord]) {
    let _ = writeln!(out, "\n--- {title} ---");
    for record in filter.select(records) {
        let _ = writeln!(out, "{}", record.listing_line());
    }
}

/// Write the report to `path`, creating parent directories and replacing
/// any previous file
pub fn write_report(path: &Path, records: &[ClassifiedRecord]) -> Result<(), ReportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_report(records).as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    tracing::info!(path = %path.display(), rows = records.len(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::classified;

    #[test]
    fn test_report_layout() {
        let records = vec![
            classified("INFO", "system started", 0),
            classified("ERROR", "falha de conexão", 2),
            classified("WARNING", "disco lento", 1),
        ];

        let expected = "📌 RELATÓRIO DE LOGS 📌
==================================================
Total de eventos processados: 3
Eventos Críticos: 1
Eventos de Erro: 1
Eventos de Aviso: 1

--- 🚨 Eventos Críticos ---
2024-01-01 10:00:00 - falha de conexão

--- ❌ Eventos de Erro ---
2024-01-01 10:00:00 - falha de conexão

--- ⚠️ Eventos de Aviso ---
2024-01-01 10:00:00 - disco lento

Relatório gerado com sucesso!
";
        assert_eq!(render_report(&records), expected);
    }

    #[test]
    fn test_report_without_critical_rows_keeps_sections() {
        let records = vec![classified("INFO", "ok", 0), classified("WARNING", "hmm", 1)];
        let report = render_report(&records);

        assert!(report.contains("Eventos Críticos: 0\n"));
        assert!(report.contains("--- 🚨 Eventos Críticos ---\n\n--- ❌ Eventos de Erro ---\n"));
        assert!(report.contains("--- ⚠️ Eventos de Aviso ---\n2024-01-01 10:00:00 - hmm\n"));
        assert!(report.ends_with("\nRelatório gerado com sucesso!\n"));
    }

    #[test]
    fn test_write_report_creates_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relatorio").join("relatorio.txt");

        write_report(&path, &[classified("ERROR", "first run", 2)]).unwrap();
        write_report(&path, &[classified("INFO", "second run", 0)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Total de eventos processados: 1"));
        assert!(!content.contains("first run"));
    }

    #[test]
    fn test_write_report_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let result = write_report(&blocker.join("relatorio.txt"), &[]);
        assert!(matches!(result, Err(ReportError::CreateDir { .. })));
    }
}
