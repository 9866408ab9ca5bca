use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, warn};

use crate::app::App;
use crate::catalog::TableCache;
use crate::config;
use crate::export;
use crate::ui;

use super::startup::build_app;

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    /// Catalog file the dashboard was opened with; `R` reloads it.
    pub data_path: PathBuf,
}

impl EventLoopState {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }
}

/// Main terminal event loop: handles input and redraws after each change.
/// Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    cache: &mut TableCache,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, cache, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn export_filtered(settings: &config::Settings, app: &mut App) {
    let path = &settings.export.path;
    match export::write_to_path(&app.filtered, path, settings.data.delimiter_byte()) {
        Ok(()) => app.set_status(format!(
            "Exported {} rows to {}",
            app.filtered.len(),
            path.display()
        )),
        Err(e) => {
            warn!("export failed: {e}");
            app.set_status(format!("Export failed: {e}"));
        }
    }
}

/// Re-read the catalog if the file changed; keeps the current app on failure.
fn reload(settings: &config::Settings, app: &mut App, cache: &mut TableCache, state: &EventLoopState) {
    match build_app(cache, &state.data_path, settings) {
        Ok(mut fresh) => {
            fresh.page = app.page;
            fresh.set_status(format!("Reloaded {} titles", fresh.table.len()));
            *app = fresh;
        }
        Err(e) => {
            warn!("reload failed: {e}");
            app.set_status(format!("Reload failed: {e}"));
        }
    }
}

/// Apply one key press. Returns `true` when the user asked to quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    cache: &mut TableCache,
    state: &mut EventLoopState,
) -> bool {
    debug!(code = ?key.code, "key press");
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Char('j') | KeyCode::Down => app.next(),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('h') | KeyCode::Left => app.shift_min_year(-1),
        KeyCode::Char('l') | KeyCode::Right => app.shift_min_year(1),
        KeyCode::Char('H') => app.shift_max_year(-1),
        KeyCode::Char('L') => app.shift_max_year(1),
        KeyCode::Char('c') => app.clear_countries(),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('R') => reload(settings, app, cache, state),
        KeyCode::Char('e') => export_filtered(settings, app),
        KeyCode::Char(c @ '1'..='5') => {
            app.select_page(c as usize - '1' as usize);
        }
        _ => {}
    }

    false
}
