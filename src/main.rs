use std::io::stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;

use emojipick::app::App;
use emojipick::catalog::Catalog;
use emojipick::config::{CliArgs, Config};
use emojipick::events::EventHandler;
use emojipick::log;
use emojipick::tui;

/// Load the configured catalog, or the bundled one.
fn load_catalog(config: &Config) -> Result<Catalog> {
    match config.catalog_path() {
        Some(path) => Catalog::load(&path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::builtin().context("loading bundled catalog"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    // Config with precedence: CLI > env var > file > defaults
    let args: Vec<String> = std::env::args().collect();
    let config = Config::load().with_overrides(CliArgs::parse(&args));

    // Fail before touching the terminal so the error stays readable
    let catalog = Arc::new(load_catalog(&config)?);
    log::log(&format!("Catalog: {} categories", catalog.len()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, &config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::log(&format!("Exited with error: {:#}", e));
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    while !app.should_quit {
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        match event_stream.next().await {
            Some(Ok(event)) => {
                let action = EventHandler::handle_event(app, &event);
                app.apply(action);
            }
            Some(Err(e)) => return Err(e).context("reading terminal events"),
            None => break,
        }
    }

    Ok(())
}
