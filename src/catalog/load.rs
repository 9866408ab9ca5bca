use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::config::DataSettings;
use crate::error::LoadError;

use super::model::{RawRecord, Record, Table};

/// How to read the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl From<&DataSettings> for LoadOptions {
    fn from(settings: &DataSettings) -> Self {
        Self {
            delimiter: settings.delimiter_byte(),
        }
    }
}

/// Column positions resolved from the header row.
struct Columns {
    show_id: Option<usize>,
    kind: usize,
    title: Option<usize>,
    director: Option<usize>,
    country: Option<usize>,
    date_added: Option<usize>,
    release_year: usize,
    rating: Option<usize>,
    duration: Option<usize>,
    listed_in: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Ok(Self {
            show_id: find("show_id"),
            kind: find("type").ok_or(LoadError::MissingColumn("type"))?,
            title: find("title"),
            director: find("director"),
            country: find("country"),
            date_added: find("date_added"),
            release_year: find("release_year").ok_or(LoadError::MissingColumn("release_year"))?,
            rating: find("rating"),
            duration: find("duration"),
            listed_in: find("listed_in"),
        })
    }

    /// Build a raw row, or `None` when the row has no usable type/year.
    fn raw(&self, row: &StringRecord) -> Option<RawRecord> {
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let kind = cell(Some(self.kind))?;
        let release_year = cell(Some(self.release_year))?.parse::<i32>().ok()?;

        Some(RawRecord {
            show_id: cell(self.show_id),
            kind,
            title: cell(self.title),
            director: cell(self.director),
            country: cell(self.country),
            date_added: cell(self.date_added),
            release_year,
            rating: cell(self.rating),
            duration: cell(self.duration),
            listed_in: cell(self.listed_in),
        })
    }
}

/// Parse a catalog from any reader.
///
/// Rows with a missing type or a non-integer release year are skipped; every
/// other malformed cell only degrades that row's derived fields.
pub fn load_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Table, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in rdr.records() {
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                debug!("skipping undecodable row: {e}");
                skipped += 1;
                continue;
            }
        };
        match columns.raw(&row) {
            Some(raw) => records.push(Record::new(raw)),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped catalog rows without a usable type or release year");
    }

    Ok(Table::new(records))
}

/// Open and parse a catalog file.
pub fn load_path(path: &Path, options: LoadOptions) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_reader(file, options)?;
    info!(path = %path.display(), rows = table.len(), "loaded catalog");
    Ok(table)
}
