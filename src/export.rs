//! Serialize a table back to delimited text for download.

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tracing::{debug, info};

use crate::catalog::Table;
use crate::error::ExportError;

/// Output columns: the source schema followed by the derived fields.
pub const EXPORT_COLUMNS: [&str; 14] = [
    "show_id",
    "type",
    "title",
    "director",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "year_added",
    "month_added",
    "month_number",
    "duration_value",
];

/// Serialize `table` as comma-separated text.
pub fn serialize(table: &Table) -> Result<Vec<u8>, ExportError> {
    serialize_with(table, b',')
}

/// Serialize `table` with the given field delimiter.
///
/// Fields containing the delimiter, a quote or a line break are quoted.
/// Absent values become empty cells.
pub fn serialize_with(table: &Table, delimiter: u8) -> Result<Vec<u8>, ExportError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    wtr.write_record(EXPORT_COLUMNS)?;

    fn text(v: Option<&String>) -> &str {
        v.map_or("", String::as_str)
    }
    for r in table {
        let raw = &r.raw;
        let release_year = raw.release_year.to_string();
        let year_added = r.year_added().map(|y| y.to_string()).unwrap_or_default();
        let month_number = r.month_number().map(|m| m.to_string()).unwrap_or_default();
        let duration_value = r.duration_value().map(|d| d.to_string()).unwrap_or_default();
        wtr.write_record([
            text(raw.show_id.as_ref()),
            raw.kind.as_str(),
            text(raw.title.as_ref()),
            text(raw.director.as_ref()),
            text(raw.country.as_ref()),
            text(raw.date_added.as_ref()),
            release_year.as_str(),
            text(raw.rating.as_ref()),
            text(raw.duration.as_ref()),
            text(raw.listed_in.as_ref()),
            year_added.as_str(),
            r.month_added().unwrap_or(""),
            month_number.as_str(),
            duration_value.as_str(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    debug!(rows = table.len(), bytes = bytes.len(), "serialized table");
    Ok(bytes)
}

/// Serialize `table` and write it to `path`, creating parent directories.
pub fn write_to_path(table: &Table, path: &Path, delimiter: u8) -> Result<(), ExportError> {
    let bytes = serialize_with(table, delimiter)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    info!(path = %path.display(), rows = table.len(), "exported filtered catalog");
    Ok(())
}
