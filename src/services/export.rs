//! CSV report export

use crate::model::columns::Column;
use crate::model::fleet::GeneratorRecord;
use crate::model::locale::Locale;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// UTF-8 byte order mark so spreadsheet tools pick the right encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Serialize the view as CSV with a localized header row
pub fn export_csv(
    records: &[&GeneratorRecord],
    columns: &[Column],
    locale: &Locale,
) -> Result<Vec<u8>> {
    let labels = locale.labels();
    let mut buffer = UTF8_BOM.to_vec();

    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(columns.iter().map(|c| c.label(labels)))?;
        for record in records {
            writer.write_record(columns.iter().map(|c| c.export_value(record, locale)))?;
        }
        writer.flush().context("Failed to flush CSV writer")?;
    }

    Ok(buffer)
}

/// `fleet_report_YYYYMMDD_HHMMSS.csv`
pub fn export_file_name(now: DateTime<Local>) -> String {
    format!("fleet_report_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Write the view to a timestamped file in `dir`
pub fn write_export(
    dir: &Path,
    records: &[&GeneratorRecord],
    columns: &[Column],
    locale: &Locale,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let bytes = export_csv(records, columns, locale)?;
    let path = dir.join(export_file_name(Local::now()));
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), rows = records.len(), "exported fleet report");
    Ok(path)
}
