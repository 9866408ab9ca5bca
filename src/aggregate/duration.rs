use std::collections::BTreeMap;

use crate::catalog::{MOVIE, TV_SHOW, Table};

use super::view::HistogramBin;

/// Non-absent `duration_value`s of rows with the given type, in table order.
pub fn duration_values(table: &Table, kind: &str) -> Vec<u32> {
    table
        .iter()
        .filter(|r| r.kind() == kind)
        .filter_map(|r| r.duration_value())
        .collect()
}

/// Movie running times in minutes.
pub fn movie_minutes(table: &Table) -> Vec<u32> {
    duration_values(table, MOVIE)
}

/// TV show season counts.
pub fn tv_seasons(table: &Table) -> Vec<u32> {
    duration_values(table, TV_SHOW)
}

/// Bucket `values` into `bins` equal-width bins spanning min..=max.
///
/// Empty input or `bins == 0` gives no bins. When every value is equal a
/// single bin holds them all.
pub fn histogram(values: &[u32], bins: usize) -> Vec<HistogramBin> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![HistogramBin {
            start: f64::from(min),
            end: f64::from(max),
            count: values.len(),
        }];
    }

    let lo = f64::from(min);
    let width = (f64::from(max) - lo) / bins as f64;
    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: lo + width * (i + 1) as f64,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = ((f64::from(v) - lo) / width) as usize;
        out[idx.min(bins - 1)].count += 1;
    }
    out
}

/// Occurrences of each distinct value, ascending by value.
pub fn value_counts(values: &[u32]) -> Vec<(u32, usize)> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_default() += 1;
    }
    counts.into_iter().collect()
}
