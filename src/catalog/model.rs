use chrono::NaiveDate;

use super::derive::Derived;

/// Value of the `type` column for feature films.
pub const MOVIE: &str = "Movie";
/// Value of the `type` column for series.
pub const TV_SHOW: &str = "TV Show";

/// One catalog row as it appears in the source, before any derivation.
///
/// Every free-text column is optional: empty cells are stored as `None`.
/// `date_added` and `duration` keep their source text so an export
/// reproduces the cell even when it could not be parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub show_id: Option<String>,
    pub kind: String,
    pub title: Option<String>,
    pub director: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: Option<String>,
    pub listed_in: Option<String>,
}

/// A catalog row plus the fields derived from it at load time.
///
/// The derived fields are private so they can only ever be produced from
/// the raw row they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub raw: RawRecord,
    derived: Derived,
}

impl Record {
    pub fn new(raw: RawRecord) -> Self {
        let derived = Derived::from_raw(&raw);
        Self { raw, derived }
    }

    pub fn kind(&self) -> &str {
        &self.raw.kind
    }

    pub fn release_year(&self) -> i32 {
        self.raw.release_year
    }

    pub fn date_added(&self) -> Option<NaiveDate> {
        self.derived.date_added
    }

    pub fn year_added(&self) -> Option<i32> {
        self.derived.year_added
    }

    pub fn month_added(&self) -> Option<&'static str> {
        self.derived.month_added
    }

    pub fn month_number(&self) -> Option<u32> {
        self.derived.month_number
    }

    pub fn duration_value(&self) -> Option<u32> {
        self.derived.duration_value
    }

    /// Read one of the categorical columns.
    pub fn get(&self, column: Column) -> Option<&str> {
        match column {
            Column::Kind => Some(self.raw.kind.as_str()),
            Column::Title => self.raw.title.as_deref(),
            Column::Director => self.raw.director.as_deref(),
            Column::Country => self.raw.country.as_deref(),
            Column::Rating => self.raw.rating.as_deref(),
            Column::Duration => self.raw.duration.as_deref(),
            Column::ListedIn => self.raw.listed_in.as_deref(),
        }
    }
}

/// Text columns that can be grouped and counted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Column {
    Kind,
    Title,
    Director,
    Country,
    Rating,
    Duration,
    ListedIn,
}

impl Column {
    /// Header name in the source file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Kind => "type",
            Column::Title => "title",
            Column::Director => "director",
            Column::Country => "country",
            Column::Rating => "rating",
            Column::Duration => "duration",
            Column::ListedIn => "listed_in",
        }
    }
}

/// An ordered, read-only sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Rows whose `type` equals `kind`, as a new table.
    pub fn of_kind(&self, kind: &str) -> Table {
        self.iter().filter(|r| r.kind() == kind).cloned().collect()
    }

    /// The raw rows, without derived fields.
    pub fn raw_rows(&self) -> Vec<RawRecord> {
        self.iter().map(|r| r.raw.clone()).collect()
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
