use indexmap::IndexMap;

use crate::catalog::{Column, MOVIE, TV_SHOW, Table};

use super::view::CountView;

/// Occurrence counter that remembers first-seen order.
///
/// Ranking sorts by count descending with a stable sort, so equal counts
/// keep the order in which their labels first appeared.
#[derive(Debug, Default)]
pub struct Counter {
    counts: IndexMap<String, usize>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, label: &str) {
        *self.counts.entry(label.to_string()).or_default() += 1;
    }

    /// Total occurrences recorded.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts in first-seen order.
    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.counts.into_iter().collect()
    }

    /// Counts sorted descending, truncated to `n`.
    pub fn top(self, n: usize) -> Vec<(String, usize)> {
        let mut counts = self.counts;
        counts.sort_by(|_, a, _, b| b.cmp(a));
        counts.into_iter().take(n).collect()
    }
}

/// Split a multi-valued cell into trimmed, non-empty pieces.
pub fn split_multi<'a>(cell: &'a str, delimiter: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    cell.split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

/// Rows per distinct `type`, in first-seen order.
pub fn type_distribution(table: &Table) -> CountView {
    let mut counter = Counter::new();
    for r in table {
        counter.add(r.kind());
    }
    CountView::new("Type", counter.into_entries())
}

/// The `n` most frequent values of a single-valued column. Absent cells
/// are not counted.
pub fn top_n(table: &Table, column: Column, n: usize) -> CountView {
    let mut counter = Counter::new();
    for value in table.iter().filter_map(|r| r.get(column)) {
        counter.add(value);
    }
    CountView::new(column.header(), counter.top(n))
}

/// The `n` most frequent pieces of a delimiter-joined column.
pub fn top_n_multi(table: &Table, column: Column, delimiter: &str, n: usize) -> CountView {
    let mut counter = Counter::new();
    for cell in table.iter().filter_map(|r| r.get(column)) {
        for piece in split_multi(cell, delimiter) {
            counter.add(piece);
        }
    }
    CountView::new(column.header(), counter.top(n))
}

/// Top genres computed separately for movies and for TV shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreSplit {
    pub movies: CountView,
    pub tv_shows: CountView,
}

pub fn genres_by_type(table: &Table, delimiter: &str, n: usize) -> GenreSplit {
    let mut movies = top_n_multi(&table.of_kind(MOVIE), Column::ListedIn, delimiter, n);
    movies.name = "Movie genres".to_string();
    let mut tv_shows = top_n_multi(&table.of_kind(TV_SHOW), Column::ListedIn, delimiter, n);
    tv_shows.name = "TV Show genres".to_string();
    GenreSplit { movies, tv_shows }
}
