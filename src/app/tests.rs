use super::*;
use crate::catalog::{MOVIE, RawRecord, Record, TV_SHOW, Table};
use crate::config::{AggregateSettings, FilterSettings};
use std::sync::Arc;

fn rec(kind: &str, country: Option<&str>, year: i32) -> Record {
    Record::new(RawRecord {
        kind: kind.into(),
        country: country.map(Into::into),
        release_year: year,
        ..RawRecord::default()
    })
}

fn app() -> App {
    let table: Table = vec![
        rec(MOVIE, Some("United States"), 2015),
        rec(TV_SHOW, Some("India"), 2020),
        rec(MOVIE, Some("India, Japan"), 2010),
        rec(TV_SHOW, None, 2018),
    ]
    .into_iter()
    .collect();
    App::new(
        Arc::new(table),
        FilterSettings::default(),
        AggregateSettings::default(),
    )
}

#[test]
fn new_app_shows_everything() {
    let app = app();
    assert_eq!(app.dashboard.total, 4);
    assert_eq!(app.criteria.year_range, (2010, 2020));
    assert!(app.is_type_selected(MOVIE));
    assert!(app.is_type_selected(TV_SHOW));
    assert!(app.criteria.countries.is_empty());
}

#[test]
fn toggling_a_type_refilters() {
    let mut app = app();
    // cursor starts on the first type (Movie)
    app.toggle_selected();
    assert!(!app.is_type_selected(MOVIE));
    assert_eq!(app.dashboard.total, 2);
    assert_eq!(app.dashboard.types.count_of(MOVIE), 0);

    app.toggle_selected();
    assert_eq!(app.dashboard.total, 4);
}

#[test]
fn selecting_a_country_narrows_by_substring() {
    let mut app = app();
    app.cycle_focus();
    assert_eq!(app.focus, Focus::Countries);
    // countries: United States, India, India, Japan
    app.next();
    app.toggle_selected();
    assert!(app.is_country_selected("India"));
    assert_eq!(app.dashboard.total, 2);

    app.clear_countries();
    assert_eq!(app.dashboard.total, 4);
}

#[test]
fn cursor_wraps_in_both_directions() {
    let mut app = app();
    app.prev();
    assert_eq!(app.type_cursor, 1);
    app.next();
    assert_eq!(app.type_cursor, 0);
}

#[test]
fn year_shifts_can_invert_range_to_empty() {
    let mut app = app();
    app.shift_min_year(5);
    assert_eq!(app.criteria.year_range, (2015, 2020));
    assert_eq!(app.dashboard.total, 3);

    app.shift_max_year(-10);
    assert_eq!(app.criteria.year_range, (2015, 2010));
    assert_eq!(app.dashboard.total, 0);
    assert!(app.dashboard.types.is_empty());

    app.reset_filters();
    assert_eq!(app.dashboard.total, 4);
}

#[test]
fn year_focus_ignores_list_keys() {
    let mut app = app();
    app.cycle_focus();
    app.cycle_focus();
    assert_eq!(app.focus, Focus::Years);
    app.next();
    app.toggle_selected();
    assert_eq!(app.dashboard.total, 4);
    app.cycle_focus();
    assert_eq!(app.focus, Focus::Types);
}

#[test]
fn configured_defaults_apply_and_reset_restores_them() {
    let table: Table = vec![rec(MOVIE, Some("France"), 2001), rec(TV_SHOW, Some("Spain"), 2002)]
        .into_iter()
        .collect();
    let defaults = FilterSettings {
        types: vec![TV_SHOW.to_string()],
        ..FilterSettings::default()
    };
    let mut app = App::new(Arc::new(table), defaults, AggregateSettings::default());
    assert_eq!(app.dashboard.total, 1);

    app.type_cursor = 0;
    app.toggle_selected();
    assert_eq!(app.dashboard.total, 2);

    app.reset_filters();
    assert_eq!(app.dashboard.total, 1);
}

#[test]
fn select_page_ignores_out_of_range() {
    let mut app = app();
    assert_eq!(app.page, Page::Overview);
    app.select_page(3);
    assert_eq!(app.page, Page::Trends);
    app.select_page(9);
    assert_eq!(app.page, Page::Trends);
}
