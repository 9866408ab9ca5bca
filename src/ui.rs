//! UI rendering helpers for the terminal user interface.
//!
//! This module draws whatever the dashboard computed; it never filters or
//! counts on its own.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, List, ListItem, ListState, Padding, Paragraph,
        Row, Table as Grid, Wrap,
    },
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::aggregate::{CountView, HistogramBin, MonthCount, YearCount};
use crate::app::{App, Focus, Page};
use crate::catalog::{MOVIE, TV_SHOW};
use crate::config::UiSettings;

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("tab".to_string(), "next filter".to_string());
    map.insert("j/k".to_string(), "down/up".to_string());
    map.insert("space".to_string(), "toggle".to_string());
    map.insert("h/l".to_string(), "min year -/+".to_string());
    map.insert("H/L".to_string(), "max year -/+".to_string());
    map.insert("1-5".to_string(), "page".to_string());
    map.insert("c".to_string(), "clear countries".to_string());
    map.insert("r".to_string(), "reset".to_string());
    map.insert("R".to_string(), "reload".to_string());
    map.insert("e".to_string(), "export".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = [
        "tab", "j/k", "space", "h/l", "H/L", "1-5", "c", "r", "R", "e", "q",
    ];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn left_pad() -> Padding {
    Padding {
        left: 1,
        right: 0,
        top: 0,
        bottom: 0,
    }
}

fn focus_title(title: &str, focused: bool) -> String {
    if focused {
        format!(" > {} ", title)
    } else {
        format!(" {} ", title)
    }
}

fn year_text(app: &App) -> String {
    let (lo, hi) = app.criteria.year_range;
    let bounds = match app.options.year_bounds {
        Some((min, max)) => format!("catalog: {}-{}", min, max),
        None => "catalog: empty".to_string(),
    };
    format!("{} - {}\n{}", lo, hi, bounds)
}

fn status_text(app: &App) -> String {
    let mut parts: Vec<String> = Vec::new();
    parts.push(format!(" TITLES: {}", app.dashboard.total));
    parts.push(format!(
        "MOVIES: {} / TV SHOWS: {}",
        app.dashboard.types.count_of(MOVIE),
        app.dashboard.types.count_of(TV_SHOW)
    ));

    let (lo, hi) = app.criteria.year_range;
    parts.push(format!("YEARS: {}-{}", lo, hi));

    if app.criteria.countries.is_empty() {
        parts.push("COUNTRY: any".to_string());
    } else {
        let list: Vec<&str> = app.criteria.countries.iter().map(String::as_str).collect();
        parts.push(format!("COUNTRY: {}", list.join(", ")));
    }

    parts.push(format!("PAGE: {}", app.page.title()));

    if let Some(src) = &app.source {
        parts.push(format!("Source: {}", src));
    }
    if let Some(msg) = &app.status {
        parts.push(msg.clone());
    }
    parts.join(" • ")
}

fn checkbox_item(label: &str, checked: bool) -> ListItem<'_> {
    let mark = if checked { "[x]" } else { "[ ]" };
    ListItem::new(format!("{} {}", mark, label))
}

fn draw_filters(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.options.types.len() as u16 + 2),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    let highlight = Style::default().add_modifier(Modifier::REVERSED);

    let types: Vec<ListItem> = app
        .options
        .types
        .iter()
        .map(|t| checkbox_item(t, app.is_type_selected(t)))
        .collect();
    let mut state = ListState::default();
    if app.focus == Focus::Types && !types.is_empty() {
        state.select(Some(app.type_cursor));
    }
    let list = List::new(types)
        .block(Block::default().borders(Borders::ALL).title(focus_title("type", app.focus == Focus::Types)))
        .highlight_style(highlight);
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let countries: Vec<ListItem> = app
        .options
        .countries
        .iter()
        .map(|c| checkbox_item(c, app.is_country_selected(c)))
        .collect();
    let mut state = ListState::default();
    if !countries.is_empty() {
        state.select(Some(app.country_cursor));
    }
    let list = List::new(countries)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(focus_title("country", app.focus == Focus::Countries)),
        )
        .highlight_style(if app.focus == Focus::Countries {
            highlight
        } else {
            Style::default()
        });
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let years = Paragraph::new(year_text(app)).block(
        Block::bordered()
            .padding(left_pad())
            .title(focus_title("release year", app.focus == Focus::Years)),
    );
    frame.render_widget(years, chunks[2]);
}

/// Horizontal bar chart for a `(label, count)` view.
fn count_chart<'a>(view: &'a CountView, title: &str) -> BarChart<'a> {
    let bars: Vec<Bar> = view
        .entries
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(label.as_str()))
        })
        .collect();
    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(format!(" {} ", title)))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars))
}

/// One bar group per year, one bar per type.
fn yearly_chart(series: &[YearCount]) -> BarChart<'_> {
    let mut chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" titles added per year "))
        .bar_width(3)
        .group_gap(1);
    let mut years: Vec<i32> = series.iter().map(|y| y.year).collect();
    years.dedup();
    for year in years {
        let bars: Vec<Bar> = series
            .iter()
            .filter(|y| y.year == year)
            .map(|y| {
                Bar::default()
                    .value(y.count as u64)
                    .label(Line::from(type_initial(&y.kind)))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(year.to_string()))
                .bars(&bars),
        );
    }
    chart
}

/// One bar group per calendar month, one bar per type.
fn monthly_chart(series: &[MonthCount]) -> BarChart<'_> {
    let mut chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" titles added per month "))
        .bar_width(3)
        .group_gap(1);
    let mut months: Vec<(u32, &str)> = series.iter().map(|m| (m.month_number, m.month)).collect();
    months.dedup();
    for (number, name) in months {
        let bars: Vec<Bar> = series
            .iter()
            .filter(|m| m.month_number == number)
            .map(|m| {
                Bar::default()
                    .value(m.count as u64)
                    .label(Line::from(type_initial(&m.kind)))
            })
            .collect();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(name.chars().take(3).collect::<String>()))
                .bars(&bars),
        );
    }
    chart
}

fn type_initial(kind: &str) -> String {
    kind.chars().next().map(String::from).unwrap_or_default()
}

fn histogram_chart(bins: &[HistogramBin]) -> BarChart<'_> {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|b| {
            Bar::default()
                .value(b.count as u64)
                .label(Line::from(format!("{:.0}", b.start)))
        })
        .collect();
    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" movies (minutes) "))
        .bar_width(4)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
}

fn seasons_chart(counts: &[(u32, usize)]) -> BarChart<'_> {
    let bars: Vec<Bar> = counts
        .iter()
        .map(|(seasons, n)| {
            Bar::default()
                .value(*n as u64)
                .label(Line::from(seasons.to_string()))
        })
        .collect();
    BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" TV shows (seasons) "))
        .bar_width(4)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars))
}

fn preview_grid(app: &App) -> Grid<'_> {
    let opt = |v: Option<&str>| v.unwrap_or("-").to_string();
    let rows: Vec<Row> = app
        .dashboard
        .preview
        .iter()
        .map(|r| {
            Row::new(vec![
                opt(r.raw.title.as_deref()),
                r.kind().to_string(),
                opt(r.raw.country.as_deref()),
                r.release_year().to_string(),
                opt(r.raw.rating.as_deref()),
                opt(r.raw.duration.as_deref()),
            ])
        })
        .collect();
    Grid::new(
        rows,
        [
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["title", "type", "country", "year", "rating", "duration"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(" preview "))
}

fn split_two(area: Rect, direction: Direction) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    [chunks[0], chunks[1]]
}

fn draw_page(frame: &mut Frame, app: &App, area: Rect) {
    let d = &app.dashboard;
    match app.page {
        Page::Overview => {
            let [top, bottom] = split_two(area, Direction::Vertical);
            let [left, right] = split_two(top, Direction::Horizontal);
            frame.render_widget(count_chart(&d.types, "movies vs TV shows"), left);
            frame.render_widget(count_chart(&d.ratings, "top ratings"), right);
            frame.render_widget(preview_grid(app), bottom);
        }
        Page::Rankings => {
            let [left, right] = split_two(area, Direction::Horizontal);
            frame.render_widget(count_chart(&d.countries, "top countries"), left);
            frame.render_widget(count_chart(&d.directors, "top directors"), right);
        }
        Page::Genres => {
            let [left, right] = split_two(area, Direction::Horizontal);
            frame.render_widget(count_chart(&d.genres.movies, "movie genres"), left);
            frame.render_widget(count_chart(&d.genres.tv_shows, "TV show genres"), right);
        }
        Page::Trends => {
            let [top, bottom] = split_two(area, Direction::Vertical);
            frame.render_widget(yearly_chart(&d.yearly), top);
            frame.render_widget(monthly_chart(&d.monthly), bottom);
        }
        Page::Durations => {
            let [left, right] = split_two(area, Direction::Horizontal);
            frame.render_widget(histogram_chart(&d.durations.movie_histogram), left);
            frame.render_widget(seasons_chart(&d.durations.season_counts), right);
        }
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" reelscope ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let status = Paragraph::new(status_text(app))
        .bold()
        .block(Block::bordered().padding(left_pad()).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(1)])
        .split(chunks[2]);
    draw_filters(frame, app, body[0]);
    draw_page(frame, app, body[1]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(left_pad()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}
