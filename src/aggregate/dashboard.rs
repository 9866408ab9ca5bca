use crate::catalog::{Column, Record, Table};
use crate::config::AggregateSettings;

use super::counts::{GenreSplit, genres_by_type, top_n, top_n_multi, type_distribution};
use super::duration::{histogram, movie_minutes, tv_seasons, value_counts};
use super::series::{monthly_by_type, yearly_by_type};
use super::view::{CountView, HistogramBin, MonthCount, YearCount};

/// Movie running-time and TV season distributions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationSummary {
    pub movie_minutes: Vec<u32>,
    pub movie_histogram: Vec<HistogramBin>,
    pub tv_seasons: Vec<u32>,
    pub season_counts: Vec<(u32, usize)>,
}

/// Every view the dashboard shows, computed from one table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub total: usize,
    pub preview: Vec<Record>,
    pub types: CountView,
    pub ratings: CountView,
    pub countries: CountView,
    pub directors: CountView,
    pub genres: GenreSplit,
    pub yearly: Vec<YearCount>,
    pub monthly: Vec<MonthCount>,
    pub durations: DurationSummary,
}

impl Dashboard {
    pub fn compute(table: &Table, settings: &AggregateSettings) -> Self {
        let n = settings.top_n;
        let delim = settings.multi_value_delimiter.as_str();

        let minutes = movie_minutes(table);
        let seasons = tv_seasons(table);

        Self {
            total: table.len(),
            preview: table.iter().take(settings.preview_rows).cloned().collect(),
            types: type_distribution(table),
            ratings: top_n(table, Column::Rating, n),
            countries: top_n_multi(table, Column::Country, delim, n),
            directors: top_n_multi(table, Column::Director, delim, n),
            genres: genres_by_type(table, delim, n),
            yearly: yearly_by_type(table),
            monthly: monthly_by_type(table),
            durations: DurationSummary {
                movie_histogram: histogram(&minutes, settings.histogram_bins),
                season_counts: value_counts(&seasons),
                movie_minutes: minutes,
                tv_seasons: seasons,
            },
        }
    }
}
