use std::{env, path::Path, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod config;
mod library;
mod ui;

use app::{App, PromptKind};
use config::Settings;
use library::Library;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; the env filter defaults to warnings only so
    // absorbed tag-read failures stay visible after the session.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "musette=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::load()?;
    settings
        .validate()
        .map_err(|e| format!("invalid configuration: {e}"))?;

    let mut library = Library::new();
    // Optional starting directory: preload the master list from it.
    if let Some(dir) = env::args().nth(1) {
        library.add_tracks(library::import_paths(Path::new(&dir), &settings.library));
    }
    let mut app = App::new(library);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), Box<dyn std::error::Error>> = (|| {
        loop {
            terminal.draw(|f| ui::draw(f, &app, &settings.ui))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    if app.prompt.is_some() {
                        match key.code {
                            KeyCode::Esc => app.cancel_prompt(),
                            KeyCode::Backspace => app.pop_prompt_char(),
                            KeyCode::Enter => app.submit_prompt(&settings),
                            KeyCode::Char(c) => {
                                if !c.is_control() {
                                    app.push_prompt_char(c);
                                }
                            }
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char('q') => break,
                            KeyCode::Char('j') | KeyCode::Down => app.next(),
                            KeyCode::Char('k') | KeyCode::Up => app.prev(),
                            KeyCode::Char('a') => app.begin_prompt(PromptKind::AddTracks),
                            KeyCode::Char('n') => app.begin_prompt(PromptKind::CreatePlaylist),
                            KeyCode::Char('p') => app.begin_prompt(PromptKind::PlaylistName),
                            KeyCode::Char('x') => app.begin_prompt(PromptKind::DeletePlaylist),
                            KeyCode::Char('e') => app.begin_prompt(PromptKind::ExportCsv),
                            KeyCode::Char('d') => app.remove_selected(),
                            KeyCode::Char('C') => app.clear_library(),
                            _ => {}
                        }
                    }
                }
            }
        }
        Ok(())
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
