use std::io::{self, Write};

use tierscope_types::ClassifiedRecord;

use crate::FilterPresets;

/// Critical-tier records in their original order
pub fn critical_events(records: &[ClassifiedRecord]) -> Vec<&ClassifiedRecord> {
    FilterPresets::critical().select(records)
}

/// Write the critical-event banner, or a notice that there is nothing to report
pub fn emit_alerts<W: Write>(records: &[ClassifiedRecord], mut out: W) -> io::Result<()> {
    let critical = critical_events(records);

    if critical.is_empty() {
        writeln!(out, "Nenhum evento crítico detectado.")?;
        return Ok(());
    }

    tracing::warn!(count = critical.len(), "critical events detected");
    writeln!(out, "🚨 ALERTA: Eventos Críticos Detectados!")?;
    for record in critical {
        writeln!(out, "{}", record.listing_line())?;
    }
    out.flush()
}
