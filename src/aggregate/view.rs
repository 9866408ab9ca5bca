/// A named, ordered sequence of `(label, count)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountView {
    pub name: String,
    pub entries: Vec<(String, usize)>,
}

impl CountView {
    pub fn new(name: impl Into<String>, entries: Vec<(String, usize)>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Count for `label`, or 0 when it is not in the view.
    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(l, _)| l.as_str()).collect()
    }
}

/// Titles of one type added in one year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub kind: String,
    pub count: usize,
}

/// Titles of one type added in one calendar month (any year).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCount {
    pub month_number: u32,
    pub month: &'static str,
    pub kind: String,
    pub count: usize,
}

/// One equal-width histogram bucket, `[start, end)` except the last which
/// also includes `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}
