//! Flat per-prize rows and CSV rendering for the results download.
//!
//! Unset values render as empty strings. The CSV carries a UTF-8 BOM and CRLF
//! line endings so spreadsheet tools open it without mangling names.

use super::registry::PrizeRegistry;
use crate::error::{DrawError, DrawResult};
use crate::types::Prize;
use serde::{Deserialize, Serialize};
use std::io::Write;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One exported prize, every field already rendered as text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportRow {
    pub assigned_number: String,
    /// Redemption number claimed by a winner, empty while unclaimed
    pub winning_number: String,
    pub prize_name: String,
    pub display_order: String,
    pub excluded: String,
    pub selected: String,
    pub announced: String,
    pub memo: String,
}

impl From<&Prize> for ExportRow {
    fn from(p: &Prize) -> Self {
        let number = p.assigned_number.map(|n| n.to_string()).unwrap_or_default();
        Self {
            winning_number: if p.selected {
                number.clone()
            } else {
                String::new()
            },
            assigned_number: number,
            prize_name: p.name.clone(),
            display_order: p.display_order.to_string(),
            excluded: p.excluded.to_string(),
            selected: p.selected.to_string(),
            announced: p.announced.to_string(),
            memo: p.memo.clone(),
        }
    }
}

/// Rows for every record, in display order
pub fn export_rows(registry: &PrizeRegistry) -> DrawResult<Vec<ExportRow>> {
    if registry.is_empty() {
        return Err(DrawError::Precondition("No prizes to export".to_string()));
    }
    Ok(registry.prizes().iter().map(ExportRow::from).collect())
}

/// Write the CSV export (BOM, header, CRLF rows) to `out`
pub fn write_csv<W: Write>(registry: &PrizeRegistry, mut out: W) -> DrawResult<()> {
    let rows = export_rows(registry)?;
    out.write_all(UTF8_BOM).map_err(csv_failure)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);
    for row in &rows {
        writer.serialize(row).map_err(csv_failure)?;
    }
    writer.flush().map_err(csv_failure)?;
    Ok(())
}

/// Render the CSV export into memory
pub fn to_csv_bytes(registry: &PrizeRegistry) -> DrawResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(registry, &mut buf)?;
    Ok(buf)
}

/// `{title}_{timestamp}.csv` with a filesystem-safe timestamp
pub fn export_filename(title: &str, now: chrono::DateTime<chrono::Utc>) -> String {
    let ts = now
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}_{}.csv", title, ts)
}

fn csv_failure(e: impl std::fmt::Display) -> DrawError {
    DrawError::Export(e.to_string())
}
