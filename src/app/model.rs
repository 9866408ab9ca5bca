//! Application model: `App` and the filter panel it edits.
//!
//! The `App` struct owns the loaded catalog, the user's filter selections
//! and the dashboard computed from them. Every selection change recomputes
//! the filtered table and its views.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::aggregate::Dashboard;
use crate::catalog::{FilterOptions, Table};
use crate::config::{AggregateSettings, FilterSettings};
use crate::filter::{FilterCriteria, apply};

/// Which filter control receives key presses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Types,
    Countries,
    Years,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Types => Focus::Countries,
            Focus::Countries => Focus::Years,
            Focus::Years => Focus::Types,
        }
    }
}

/// Which group of charts is on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Overview,
    Rankings,
    Genres,
    Trends,
    Durations,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Overview,
        Page::Rankings,
        Page::Genres,
        Page::Trends,
        Page::Durations,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::Rankings => "countries & directors",
            Page::Genres => "genres",
            Page::Trends => "added over time",
            Page::Durations => "durations",
        }
    }
}

/// The main application model.
pub struct App {
    pub table: Arc<Table>,
    pub options: FilterOptions,
    pub criteria: FilterCriteria,
    pub filtered: Table,
    pub dashboard: Dashboard,

    pub focus: Focus,
    pub page: Page,
    /// Cursor within the type list.
    pub type_cursor: usize,
    /// Cursor within the country list.
    pub country_cursor: usize,
    pub year_step: i32,
    /// One-line message shown in the status box (export results etc.).
    pub status: Option<String>,
    pub source: Option<String>,

    defaults: FilterSettings,
    aggregates: AggregateSettings,
}

impl App {
    /// Create a new `App` over `table`, applying the configured default filters.
    pub fn new(table: Arc<Table>, defaults: FilterSettings, aggregates: AggregateSettings) -> Self {
        let options = FilterOptions::from_table(&table);
        let criteria = FilterCriteria::from_settings(&options, &defaults);
        let mut app = Self {
            table,
            options,
            criteria,
            filtered: Table::default(),
            dashboard: Dashboard::default(),
            focus: Focus::default(),
            page: Page::default(),
            type_cursor: 0,
            country_cursor: 0,
            year_step: 1,
            status: None,
            source: None,
            defaults,
            aggregates,
        };
        app.refresh();
        app
    }

    /// Re-run filtering and aggregation for the current criteria.
    pub fn refresh(&mut self) {
        self.filtered = apply(&self.table, &self.criteria);
        self.dashboard = Dashboard::compute(&self.filtered, &self.aggregates);
    }

    pub fn set_source(&mut self, source: String) {
        self.source = Some(source);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Move focus to the next filter control.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Show the chart page at `index` (0-based); out-of-range is ignored.
    pub fn select_page(&mut self, index: usize) {
        if let Some(&page) = Page::ALL.get(index) {
            self.page = page;
        }
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Types => self.options.types.len(),
            Focus::Countries => self.options.countries.len(),
            Focus::Years => 0,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            Focus::Types => Some(&mut self.type_cursor),
            Focus::Countries => Some(&mut self.country_cursor),
            Focus::Years => None,
        }
    }

    /// Move the cursor down in the focused list, wrapping at the end.
    pub fn next(&mut self) {
        let len = self.focused_len();
        if let Some(c) = self.cursor_mut() {
            if len > 0 {
                *c = (*c + 1) % len;
            }
        }
    }

    /// Move the cursor up in the focused list, wrapping at the start.
    pub fn prev(&mut self) {
        let len = self.focused_len();
        if let Some(c) = self.cursor_mut() {
            if len > 0 {
                *c = (*c + len - 1) % len;
            }
        }
    }

    /// Select or deselect the entry under the cursor.
    pub fn toggle_selected(&mut self) {
        let (set, value) = match self.focus {
            Focus::Types => (&mut self.criteria.types, self.options.types.get(self.type_cursor)),
            Focus::Countries => (
                &mut self.criteria.countries,
                self.options.countries.get(self.country_cursor),
            ),
            Focus::Years => return,
        };
        let Some(value) = value else {
            return;
        };
        if !set.remove(value) {
            set.insert(value.clone());
        }
        self.refresh();
    }

    /// Shift the lower release-year bound by `steps` times `year_step`.
    pub fn shift_min_year(&mut self, steps: i32) {
        let delta = steps.saturating_mul(self.year_step);
        self.criteria.year_range.0 = self.criteria.year_range.0.saturating_add(delta);
        self.refresh();
    }

    /// Shift the upper release-year bound by `steps` times `year_step`.
    pub fn shift_max_year(&mut self, steps: i32) {
        let delta = steps.saturating_mul(self.year_step);
        self.criteria.year_range.1 = self.criteria.year_range.1.saturating_add(delta);
        self.refresh();
    }

    /// Restore the filters the dashboard opened with.
    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::from_settings(&self.options, &self.defaults);
        self.refresh();
    }

    /// Clear every country selection.
    pub fn clear_countries(&mut self) {
        if !self.criteria.countries.is_empty() {
            self.criteria.countries = BTreeSet::new();
            self.refresh();
        }
    }

    pub fn is_type_selected(&self, kind: &str) -> bool {
        self.criteria.types.contains(kind)
    }

    pub fn is_country_selected(&self, country: &str) -> bool {
        self.criteria.countries.contains(country)
    }
}
