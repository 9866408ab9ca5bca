use std::env;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::catalog::TableCache;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    if let Err(e) = logging::init_logging(&settings.logging) {
        eprintln!("reelscope: failed to initialize logging: {e}");
    }
    info!("starting reelscope v{}", env!("CARGO_PKG_VERSION"));

    let data_path = startup::resolve_data_path(env::args().nth(1), &settings);

    // Load before touching the terminal so a bad path is reported plainly.
    let mut cache = TableCache::new();
    let mut app = startup::build_app(&mut cache, &data_path, &settings)?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        let mut state = event_loop::EventLoopState::new(data_path.clone());
        event_loop::run(&mut terminal, &settings, &mut app, &mut cache, &mut state)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
