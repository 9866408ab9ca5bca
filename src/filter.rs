//! Row filtering by type, country and release year.

use std::collections::BTreeSet;

use tracing::debug;

use crate::catalog::{FilterOptions, Record, Table};
use crate::config::FilterSettings;

/// Stand-in for an absent `country` during substring matching.
pub const ABSENT_COUNTRY: &str = "NA";

/// The user's current filter choices.
///
/// An empty `countries` set disables country filtering. An empty `types`
/// set or a range with `min > max` matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub types: BTreeSet<String>,
    pub countries: BTreeSet<String>,
    pub year_range: (i32, i32),
}

impl FilterCriteria {
    /// Every type, no country restriction and the full year span of `options`.
    pub fn all(options: &FilterOptions) -> Self {
        Self {
            types: options.types.iter().cloned().collect(),
            countries: BTreeSet::new(),
            year_range: options.year_bounds.unwrap_or((i32::MIN, i32::MAX)),
        }
    }

    /// Start from [`FilterCriteria::all`] and apply configured defaults.
    pub fn from_settings(options: &FilterOptions, settings: &FilterSettings) -> Self {
        let mut criteria = Self::all(options);
        if !settings.types.is_empty() {
            criteria.types = settings.types.iter().cloned().collect();
        }
        criteria.countries = settings.countries.iter().cloned().collect();
        if let Some(min) = settings.min_year {
            criteria.year_range.0 = min;
        }
        if let Some(max) = settings.max_year {
            criteria.year_range.1 = max;
        }
        criteria
    }

    /// Whether `record` passes every predicate.
    pub fn matches(&self, record: &Record) -> bool {
        let (min, max) = self.year_range;
        self.types.contains(record.kind())
            && (min..=max).contains(&record.release_year())
            && self.country_matches(record)
    }

    // Case-sensitive substring test; "India" also matches "Indiana".
    fn country_matches(&self, record: &Record) -> bool {
        if self.countries.is_empty() {
            return true;
        }
        let country = record.raw.country.as_deref().unwrap_or(ABSENT_COUNTRY);
        self.countries.iter().any(|c| country.contains(c.as_str()))
    }
}

/// Rows of `table` matching `criteria`, in their original order.
pub fn apply(table: &Table, criteria: &FilterCriteria) -> Table {
    let filtered: Table = table
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    debug!(
        input = table.len(),
        output = filtered.len(),
        "applied filter criteria"
    );
    filtered
}
