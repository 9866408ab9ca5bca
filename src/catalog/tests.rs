use super::*;
use crate::error::LoadError;
use std::sync::Arc;

const SAMPLE: &str = "\
show_id,type,title,director,country,date_added,release_year,rating,duration,listed_in,extra
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,x
s2,TV Show,Blood & Water,,South Africa,9/24/2021,2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",y
s3,TV Show,Ganglands,Julien Leclercq,\"France, Belgium\",not a date,2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows\",z
s4,Movie,Untimed,,,,2019,,unknown,,
";

fn sample() -> Table {
    load_reader(SAMPLE.as_bytes(), LoadOptions::default()).unwrap()
}

#[test]
fn load_reader_reads_rows_and_ignores_extra_columns() {
    let t = sample();
    assert_eq!(t.len(), 4);

    let first = &t.records()[0];
    assert_eq!(first.raw.show_id.as_deref(), Some("s1"));
    assert_eq!(first.kind(), MOVIE);
    assert_eq!(first.raw.title.as_deref(), Some("Dick Johnson Is Dead"));
    assert_eq!(first.release_year(), 2020);
    assert_eq!(first.raw.country.as_deref(), Some("United States"));

    let second = &t.records()[1];
    assert_eq!(second.kind(), TV_SHOW);
    assert_eq!(second.raw.director, None);
    assert_eq!(
        second.raw.listed_in.as_deref(),
        Some("International TV Shows, TV Dramas, TV Mysteries")
    );
}

#[test]
fn derived_date_fields_follow_date_added() {
    let t = sample();
    let r = t.records();

    assert_eq!(r[0].year_added(), Some(2021));
    assert_eq!(r[0].month_added(), Some("September"));
    assert_eq!(r[0].month_number(), Some(9));

    assert_eq!(r[1].year_added(), Some(2021));
    assert_eq!(r[1].month_number(), Some(9));

    // Unparseable and empty dates leave every calendar field absent.
    for rec in &r[2..] {
        assert_eq!(rec.date_added(), None);
        assert_eq!(rec.year_added(), None);
        assert_eq!(rec.month_added(), None);
        assert_eq!(rec.month_number(), None);
    }
    assert_eq!(r[2].raw.date_added.as_deref(), Some("not a date"));
}

#[test]
fn derived_duration_value_is_leading_integer_or_absent() {
    let t = sample();
    let values: Vec<Option<u32>> = t.iter().map(|r| r.duration_value()).collect();
    assert_eq!(values, vec![Some(90), Some(2), Some(1), None]);
}

#[test]
fn empty_cells_are_absent() {
    let t = sample();
    let last = &t.records()[3];
    assert_eq!(last.raw.director, None);
    assert_eq!(last.raw.country, None);
    assert_eq!(last.raw.rating, None);
    assert_eq!(last.raw.listed_in, None);
    assert_eq!(last.get(Column::Rating), None);
    assert_eq!(last.get(Column::Kind), Some(MOVIE));
}

#[test]
fn rows_without_type_or_year_are_skipped() {
    let src = "type,release_year\nMovie,2001\n,2002\nMovie,soon\nTV Show,2003\n";
    let t = load_reader(src.as_bytes(), LoadOptions::default()).unwrap();
    let years: Vec<i32> = t.iter().map(|r| r.release_year()).collect();
    assert_eq!(years, vec![2001, 2003]);
}

#[test]
fn only_type_and_release_year_are_required_columns() {
    let src = "type,release_year\nMovie,2001\n";
    let t = load_reader(src.as_bytes(), LoadOptions::default()).unwrap();
    assert_eq!(t.len(), 1);
    assert_eq!(t.records()[0].raw.country, None);

    let err = load_reader("type,title\nMovie,x\n".as_bytes(), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("release_year")));

    let err = load_reader("release_year\n2001\n".as_bytes(), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::MissingColumn("type")));
}

#[test]
fn load_reader_honors_delimiter() {
    let src = "type;release_year;country\nMovie;1999;India, USA\n";
    let t = load_reader(src.as_bytes(), LoadOptions { delimiter: b';' }).unwrap();
    assert_eq!(t.records()[0].raw.country.as_deref(), Some("India, USA"));
}

#[test]
fn load_path_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_path(&dir.path().join("missing.csv"), LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
}

#[test]
fn table_of_kind_selects_rows() {
    let t = sample();
    assert_eq!(t.of_kind(MOVIE).len(), 2);
    assert_eq!(t.of_kind(TV_SHOW).len(), 2);
    assert!(t.of_kind("Short").is_empty());
}

#[test]
fn filter_options_collapse_repeated_values() {
    let t: Table = (0..200)
        .map(|i| {
            Record::new(RawRecord {
                kind: if i % 3 == 0 { TV_SHOW } else { MOVIE }.into(),
                country: Some(format!("Country {}", i % 7)),
                release_year: 1990 + i % 25,
                ..RawRecord::default()
            })
        })
        .collect();
    let opts = FilterOptions::from_table(&t);
    assert_eq!(opts.types, vec![TV_SHOW.to_string(), MOVIE.to_string()]);
    let expected: Vec<String> = (0..7).map(|i| format!("Country {}", i)).collect();
    assert_eq!(opts.countries, expected);
    assert_eq!(opts.year_bounds, Some((1990, 2014)));
}

#[test]
fn filter_options_lists_distinct_values_in_first_seen_order() {
    let opts = FilterOptions::from_table(&sample());
    assert_eq!(opts.types, vec![MOVIE.to_string(), TV_SHOW.to_string()]);
    assert_eq!(
        opts.countries,
        vec![
            "United States".to_string(),
            "South Africa".to_string(),
            "France, Belgium".to_string(),
        ]
    );
    assert_eq!(opts.year_bounds, Some((2019, 2021)));

    assert_eq!(FilterOptions::from_table(&Table::default()).year_bounds, None);
}

#[test]
fn cache_returns_same_table_until_source_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, "type,release_year\nMovie,2001\n").unwrap();

    let mut cache = TableCache::new();
    let a = cache.get_or_load(&path, LoadOptions::default()).unwrap();
    let b = cache.get_or_load(&path, LoadOptions::default()).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 1);

    std::fs::write(&path, "type,release_year\nMovie,2001\nTV Show,2002\n").unwrap();
    let c = cache.get_or_load(&path, LoadOptions::default()).unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(c.len(), 2);
    assert_eq!(cache.len(), 1);

    cache.invalidate(&path);
    assert!(cache.is_empty());
}

#[test]
fn cache_propagates_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut cache = TableCache::new();
    let err = cache
        .get_or_load(&dir.path().join("nope.csv"), LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(cache.is_empty());
}
