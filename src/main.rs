mod app;
mod clipboard;
mod config;
mod error;
mod events;
mod gallery;
mod locale;
mod log;
mod prefs;
mod scroll;
mod toast;
mod tui;
mod typing;

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use app::App;
use config::Config;
use error::FolioError;
use events::EventHandler;
use locale::Language;
use prefs::{FileStore, MemoryStore, PreferenceStore};

const USAGE: &str = "\
Usage: folio [OPTIONS]

Options:
  --lang <en|ko|zh>   Language for this run
  --light             Light theme for this run
  --dark              Dark theme for this run
  --config <path>     Read configuration from <path>
  -h, --help          Show this message";

/// Choices made on the command line. They win over everything else but are
/// never written back to the preference store.
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    language: Option<Language>,
    dark_mode: Option<bool>,
    config_path: Option<PathBuf>,
    show_help: bool,
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--lang" | "-l" => {
                match args.get(i + 1).map(|code| (code, Language::from_code(code))) {
                    Some((_, Some(language))) => cli.language = Some(language),
                    Some((code, None)) => {
                        eprintln!("Warning: unknown language '{}', expected en, ko or zh", code)
                    }
                    None => eprintln!("Warning: --lang requires a language code"),
                }
                i += 2;
                continue;
            }
            "--light" => cli.dark_mode = Some(false),
            "--dark" => cli.dark_mode = Some(true),
            "--config" | "-c" => {
                if let Some(path) = args.get(i + 1) {
                    cli.config_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Warning: --config requires a path argument");
                }
                i += 2;
                continue;
            }
            "--help" | "-h" => cli.show_help = true,
            arg => eprintln!("Warning: ignoring unknown argument '{}'", arg),
        }
        i += 1;
    }
    cli
}

fn open_store() -> Box<dyn PreferenceStore> {
    let path = FileStore::default_path();
    match FileStore::open(&path) {
        Ok(store) => {
            log::log(&format!("Preferences: {}", store.path().display()));
            Box::new(store)
        }
        Err(e) => {
            // Keep running with in-memory preferences for this session.
            log::log(&format!("Preferences unavailable: {}", e));
            Box::new(MemoryStore::default())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
        log::install_panic_hook();
    }

    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);
    if cli.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = match &cli.config_path {
        Some(path) => Config::load_from(path).map_err(FolioError::from)?,
        None => Config::load(),
    };

    let (_, rows) =
        crossterm::terminal::size().map_err(|e| FolioError::Terminal(e.to_string()))?;

    let mut app = App::new(config, open_store(), rows);
    app.apply_overrides(cli.language, cli.dark_mode);
    log::log(&format!(
        "Start: language {}, dark mode {}, viewport {}px",
        app.language.code(),
        app.dark_mode,
        app.controller.ranges().viewport_height
    ));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::log(&format!("Exited with error: {:#}", e));
    }
    log::log("=== folio stopped ===");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut frames = tokio::time::interval(Duration::from_millis(app.config.frame_ms));
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut dirty = true;
    loop {
        if dirty {
            terminal.draw(|frame| tui::ui::render(frame, app))?;
            dirty = false;
        }

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        let action = EventHandler::handle_event(app, &event);
                        app.dispatch(action, Instant::now());
                        // Wheel input waits for the frame tick; everything else redraws now.
                        dirty = !app.coalescer.is_pending();
                    }
                    Some(Err(e)) => {
                        log::log(&format!("Event stream error: {}", e));
                    }
                    None => break,
                }
            }
            _ = frames.tick() => {
                if app.on_frame(Instant::now()) {
                    dirty = true;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("folio")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_args() {
        let cli = parse_args(&args(&["--lang", "ko", "--light", "--config", "/tmp/f.toml"]));
        assert_eq!(cli.language, Some(Language::Ko));
        assert_eq!(cli.dark_mode, Some(false));
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/f.toml")));
        assert!(!cli.show_help);
    }

    #[test]
    fn test_parse_args_ignores_bad_values() {
        let cli = parse_args(&args(&["--lang", "fr", "--bogus"]));
        assert_eq!(cli, CliArgs::default());
    }

    #[test]
    fn test_parse_args_missing_value() {
        let cli = parse_args(&args(&["--dark", "--lang"]));
        assert_eq!(cli.dark_mode, Some(true));
        assert_eq!(cli.language, None);
    }
}
