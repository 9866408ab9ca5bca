use indexmap::IndexSet;

use super::model::Table;

/// The choices a filter panel can offer for a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct `type` values in first-seen order.
    pub types: Vec<String>,
    /// Distinct, non-absent `country` cells in first-seen order (not split).
    pub countries: Vec<String>,
    /// Smallest and largest `release_year`, or `None` for an empty table.
    pub year_bounds: Option<(i32, i32)>,
}

impl FilterOptions {
    pub fn from_table(table: &Table) -> Self {
        let mut types: IndexSet<String> = IndexSet::new();
        let mut countries: IndexSet<String> = IndexSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for r in table {
            if !types.contains(r.kind()) {
                types.insert(r.kind().to_string());
            }
            if let Some(c) = r.raw.country.as_deref() {
                if !countries.contains(c) {
                    countries.insert(c.to_string());
                }
            }
            let y = r.release_year();
            year_bounds = Some(match year_bounds {
                Some((lo, hi)) => (lo.min(y), hi.max(y)),
                None => (y, y),
            });
        }

        Self {
            types: types.into_iter().collect(),
            countries: countries.into_iter().collect(),
            year_bounds,
        }
    }
}
