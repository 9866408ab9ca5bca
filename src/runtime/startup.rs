use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::App;
use crate::catalog::{LoadOptions, TableCache};
use crate::config;
use crate::error::LoadError;

/// Pick the catalog path: first command-line argument, else `data.path`.
pub fn resolve_data_path(arg: Option<String>, settings: &config::Settings) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| settings.data.path.clone())
}

/// Load the catalog through `cache` and build the initial `App`.
pub fn build_app(
    cache: &mut TableCache,
    path: &Path,
    settings: &config::Settings,
) -> Result<App, LoadError> {
    let table = cache.get_or_load(path, LoadOptions::from(&settings.data))?;
    info!(rows = table.len(), "catalog ready");

    let mut app = App::new(table, settings.filters.clone(), settings.aggregates.clone());
    app.year_step = settings.ui.year_step;
    app.set_source(path.display().to_string());
    Ok(app)
}
