mod animation;
mod app;
mod cli;
mod clock;
mod config;
mod error;
mod logging;
mod models;
mod spark;
mod theme;
mod ui;
mod utils;
mod watcher;

use std::io::{self, stdout};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::app::App;
use crate::cli::{CliArgs, VERSION};
use crate::clock::SystemClock;
use crate::error::Result;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hud-tui: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    let args = CliArgs::parse();
    let config = args.resolve()?;
    logging::init_tracing(&config.log_file)?;
    tracing::info!(version = VERSION, config = ?config.config_path, "starting hud-tui");

    // Only the stub chat replies run here
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let mut app = App::new(
        config.hud,
        config.config_path.clone(),
        Box::new(SystemClock::new()),
        runtime.handle().clone(),
    );
    app.overrides = config.overrides;

    // Keep the watcher alive for the whole session
    let _watcher = match (&config.config_path, config.watch) {
        (Some(path), true) => {
            watcher::setup_config_watcher(path.clone(), app.config_needs_reload.clone())
        }
        _ => None,
    };

    enable_raw_mode()?;
    install_panic_hook();

    // Everything after raw mode goes through restore_terminal, even on error
    let result = run_in_terminal(&mut app);
    let restored = restore_terminal();

    match &result {
        Ok(()) => tracing::info!(run_time = %app.run_time(), "hud-tui exiting"),
        Err(e) => tracing::error!(error = %e, "hud-tui stopped with an error"),
    }
    if let Err(e) = &restored {
        tracing::warn!(error = %e, "failed to restore terminal");
    }
    result?;
    restored?;
    Ok(())
}

fn run_in_terminal(app: &mut App) -> Result<()> {
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    run(&mut terminal, app)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(app.frame_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Undo every terminal mode, attempting each step and reporting the first failure
fn restore_terminal() -> io::Result<()> {
    let mouse = stdout().execute(DisableMouseCapture).map(|_| ());
    let raw = disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    let cursor = stdout().execute(Show).map(|_| ());
    mouse.and(raw).and(screen).and(cursor)
}

/// Leave the alternate screen before the panic message is printed
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}
