use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/reelscope/config.toml` or `~/.config/reelscope/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `REELSCOPE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub filters: FilterSettings,
    pub aggregates: AggregateSettings,
    pub export: ExportSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Catalog file read at startup. The first command-line argument wins over this.
    pub path: PathBuf,
    /// Field delimiter of the catalog file. Must be a single ASCII character.
    pub delimiter: String,
}

impl DataSettings {
    /// The delimiter as a byte, falling back to `,` for anything unusable.
    pub fn delimiter_byte(&self) -> u8 {
        single_byte(&self.delimiter).unwrap_or(b',')
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("netflix_titles.csv"),
            delimiter: ",".to_string(),
        }
    }
}

/// Filter values applied when the dashboard opens.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Selected types. Empty means every type present in the catalog.
    pub types: Vec<String>,
    /// Selected country substrings. Empty disables country filtering.
    pub countries: Vec<String>,
    /// Lower release year. Defaults to the catalog's earliest year.
    pub min_year: Option<i32>,
    /// Upper release year. Defaults to the catalog's latest year.
    pub max_year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AggregateSettings {
    /// Length of every top-N ranking.
    pub top_n: usize,
    /// Separator of multi-valued cells (`country`, `director`, `listed_in`).
    pub multi_value_delimiter: String,
    /// Number of bins in the movie duration histogram.
    pub histogram_bins: usize,
    /// Rows shown in the preview pane.
    pub preview_rows: usize,
}

impl Default for AggregateSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            multi_value_delimiter: ",".to_string(),
            histogram_bins: 30,
            preview_rows: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Where the filtered table is written.
    pub path: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog_filtered.csv"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Years moved per key press on the release-year range.
    pub year_step: i32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Explore the catalog: filter by type, country and year ".to_string(),
            year_step: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Log file. Without one, logging is disabled so the terminal stays clean.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

pub(crate) fn single_byte(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Some(*b),
        _ => None,
    }
}
