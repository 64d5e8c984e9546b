use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use keyglow::app::{App, Mode};
use keyglow::config::Config;
use keyglow::event::{AppEvent, EventHandler, TICK_RATE};
use keyglow::generator::corpus::{Corpus, Difficulty};
use keyglow::generator::selector::ChallengeSelector;
use keyglow::input;
use keyglow::logging;
use keyglow::ui::{self, theme::Theme};

#[derive(Parser)]
#[command(
    name = "keyglow",
    version,
    about = "Terminal keyboard visualizer with a typing challenge mode"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, value_enum, help = "Practice text difficulty")]
    difficulty: Option<Difficulty>,

    #[arg(short, long, value_enum, help = "Mode to start in")]
    mode: Option<Mode>,

    #[arg(long, help = "Skip the startup banner")]
    no_banner: bool,
}

fn main() {
    let _log_guard = logging::init_logging();

    if let Err(err) = run() {
        error!("{err:#}");
        println!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if let Some(mode) = cli.mode {
        config.start_mode = mode;
    }
    if cli.no_banner {
        config.show_banner = false;
    }

    let theme = Theme::load(&config.theme).unwrap_or_default();
    let selector = ChallengeSelector::new(Corpus::builtin()?);
    let mut app = App::new(selector, config.difficulty, config.start_mode);

    if config.show_banner {
        print_banner()?;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    info!(theme = %theme.name, mode = app.mode().as_str(), "terminal session started");

    let result = Terminal::new(CrosstermBackend::new(stdout))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| {
            let events = EventHandler::new(TICK_RATE);
            let result = run_app(&mut terminal, &mut app, &theme, events);
            terminal.show_cursor()?;
            result
        });

    let outcome = session_outcome(result, restore_terminal());
    info!("terminal session ended");
    outcome
}

/// Attempts both restore steps even if the first one fails.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    raw?;
    screen?;
    Ok(())
}

/// An error from the event loop takes precedence; a restore failure on top
/// of it is only logged.
fn session_outcome(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Err(err), Err(restore_err)) => {
            error!("restoring terminal: {restore_err:#}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restore) => restore.context("restoring terminal"),
    }
}

fn print_banner() -> Result<()> {
    println!("Starting keyglow...");
    println!("Features:");
    println!("- F1: Switch to Visual Mode (keyboard visualization only)");
    println!("- F2: Switch to Practice Mode (typing challenge)");
    println!("- F3: Get a new typing challenge text");
    println!("- ESC/Ctrl+C: Exit");
    println!("\nPress Enter to continue...");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: &Theme,
    mut events: EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app, theme, Instant::now()))?;

        match events.next()? {
            AppEvent::Key(key) => {
                if let Some(command) = input::translate(key, &app.layout) {
                    app.handle_command(command, Instant::now());
                }
            }
            AppEvent::Tick => app.on_tick(Instant::now()),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
