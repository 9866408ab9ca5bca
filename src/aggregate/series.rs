use std::collections::BTreeMap;

use indexmap::IndexSet;

use crate::catalog::Table;

use super::view::{MonthCount, YearCount};

/// Position of each type in first-seen order, used as the secondary sort key.
fn kind_order(table: &Table) -> IndexSet<&str> {
    table.iter().map(|r| r.kind()).collect()
}

/// Titles added per `(year_added, type)`, ordered by year then type.
///
/// Rows without a parsed `date_added` are left out.
pub fn yearly_by_type(table: &Table) -> Vec<YearCount> {
    let kinds = kind_order(table);
    let mut groups: BTreeMap<(i32, usize), usize> = BTreeMap::new();
    for r in table {
        if let (Some(year), Some(rank)) = (r.year_added(), kinds.get_index_of(&r.kind())) {
            *groups.entry((year, rank)).or_default() += 1;
        }
    }
    groups
        .into_iter()
        .map(|((year, k), count)| YearCount {
            year,
            kind: kinds[k].to_string(),
            count,
        })
        .collect()
}

/// Titles added per `(month, type)`, in calendar order January..December.
///
/// Months with no titles are omitted; rows without a parsed `date_added`
/// are left out.
pub fn monthly_by_type(table: &Table) -> Vec<MonthCount> {
    let kinds = kind_order(table);
    let mut groups: BTreeMap<(u32, usize), (&'static str, usize)> = BTreeMap::new();
    for r in table {
        let rank = kinds.get_index_of(&r.kind());
        if let (Some(number), Some(month), Some(rank)) = (r.month_number(), r.month_added(), rank) {
            groups
                .entry((number, rank))
                .or_insert((month, 0))
                .1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|((month_number, k), (month, count))| MonthCount {
            month_number,
            month,
            kind: kinds[k].to_string(),
            count,
        })
        .collect()
}
