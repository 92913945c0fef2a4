//! CSV export of disqualified entrants.

use std::path::Path;

use crate::entrants::DqRow;
use crate::errors::{DqError, DqResult};

/// Suggested file name for downloads
pub const EXPORT_FILE_NAME: &str = "dq_entrants.csv";

/// Column headers, in output order
pub const EXPORT_HEADERS: [&str; 3] = ["Entrant Name", "Participants", "Entrant ID"];

/// Render rows as UTF-8 CSV. The header row is written even when `rows` is empty.
pub fn rows_to_csv(rows: &[DqRow]) -> DqResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| DqError::Io(std::io::Error::other(e.to_string())))
}

/// Write the CSV export to `path`
pub fn write_csv(path: &Path, rows: &[DqRow]) -> DqResult<()> {
    let bytes = rows_to_csv(rows)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
