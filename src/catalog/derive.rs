use chrono::{Datelike, Month, NaiveDate};

use super::model::RawRecord;

/// Formats accepted for the `date_added` column, tried in order.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%m/%d/%Y", "%Y-%m-%d"];

/// Fields computed once from a raw row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Derived {
    pub date_added: Option<NaiveDate>,
    pub year_added: Option<i32>,
    pub month_added: Option<&'static str>,
    pub month_number: Option<u32>,
    pub duration_value: Option<u32>,
}

impl Derived {
    pub fn from_raw(raw: &RawRecord) -> Self {
        let date_added = raw.date_added.as_deref().and_then(parse_date_added);
        Self {
            date_added,
            year_added: date_added.map(|d| d.year()),
            month_added: date_added.and_then(|d| month_name(d.month())),
            month_number: date_added.map(|d| d.month()),
            duration_value: raw.duration.as_deref().and_then(duration_value),
        }
    }
}

/// Parse a `date_added` cell such as `September 25, 2021` or `9/25/2021`.
///
/// Returns `None` for anything that is not a valid calendar date.
pub fn parse_date_added(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Extract the first run of ASCII digits from a duration like `90 min` or
/// `3 Seasons`.
///
/// Returns `None` only when the text has no digits. Numbers too large for
/// `u32` saturate to `u32::MAX`.
pub fn duration_value(value: &str) -> Option<u32> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let digits = &value[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    Some(digits[..end].parse().unwrap_or(u32::MAX))
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}
