use tierscope_types::StructuredRecord;

/// Splits raw log lines into timestamp, type and message
pub struct LineStructurer;

impl LineStructurer {
    /// Parse one line shaped like `<date> <time> <TYPE>: <message>`.
    ///
    /// Returns `None` for lines that do not have that shape.
    pub fn parse(line: &str) -> Option<StructuredRecord> {
        let mut tokens = line.trim().splitn(3, char::is_whitespace);
        let date = tokens.next()?;
        let time = tokens.next()?;
        let rest = tokens.next()?;

        let (kind, message) = rest.split_once(": ")?;
        if kind.is_empty() || message.is_empty() {
            return None;
        }

        Some(StructuredRecord::new(
            format!("{date} {time}"),
            kind.to_string(),
            message.to_string(),
        ))
    }
}

/// Structure every well-formed line, in order. Malformed lines are dropped.
pub fn structure_lines<S: AsRef<str>>(lines: &[S]) -> Vec<StructuredRecord> {
    let records: Vec<StructuredRecord> = lines
        .iter()
        .filter_map(|line| LineStructurer::parse(line.as_ref()))
        .collect();

    tracing::debug!(
        lines = lines.len(),
        records = records.len(),
        "structured log lines"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_line() {
        let record = LineStructurer::parse("2024-01-01 10:00:05 ERROR: falha de conexão").unwrap();
        assert_eq!(record.timestamp, "2024-01-01 10:00:05");
        assert_eq!(record.kind, "ERROR");
        assert_eq!(record.message, "falha de conexão");
    }

    #[test]
    fn test_parse_bracketed_timestamp() {
        let record = LineStructurer::parse("[2024-01-01 10:00:00] WARNING: disk: 91% used\n").unwrap();
        assert_eq!(record.timestamp, "[2024-01-01 10:00:00]");
        assert_eq!(record.kind, "WARNING");
        // Only the first ": " separates type from message
        assert_eq!(record.message, "disk: 91% used");
    }

    #[test]
    fn test_malformed_lines_are_dropped() {
        assert!(LineStructurer::parse("").is_none());
        assert!(LineStructurer::parse("2024-01-01 10:00:00").is_none());
        assert!(LineStructurer::parse("2024-01-01 10:00:00 INFO started").is_none());
        assert!(LineStructurer::parse("2024-01-01 10:00:00 INFO:").is_none());
        assert!(LineStructurer::parse("2024-01-01 10:00:00 : no type").is_none());
    }

    #[test]
    fn test_structure_lines_keeps_order() {
        let lines = [
            "2024-01-01 10:00:00 INFO: system started",
            "garbage",
            "2024-01-01 10:00:05 ERROR: falha de conexão",
            "2024-01-01 10:00:06 INFO no separator",
        ];
        let records = structure_lines(&lines);

        assert_eq!(records.len(), 2);
        assert!(records.len() <= lines.len());
        assert_eq!(records[0].message, "system started");
        assert_eq!(records[1].kind, "ERROR");
    }

    #[test]
    fn test_parse_multibyte_utf8_no_panic() {
        assert!(LineStructurer::parse("─────────────────").is_none());
        let record = LineStructurer::parse("dia 1 CRITICAL: ╭──╮ grave").unwrap();
        assert_eq!(record.message, "╭──╮ grave");
    }
}
