//! Ui command implementation
//!
//! Runs the interactive analyzer in the alternate screen until the user quits.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tracing::info;

use netcost::{analyzer::AnalysisApp, config::Config};

/// Execute the ui command
///
/// The terminal is restored whether or not setup and the main loop succeed.
pub fn execute(cfg: &Config) -> Result<()> {
    info!("Starting interactive analyzer");

    enable_raw_mode()?;
    let run_result = execute!(io::stdout(), EnterAlternateScreen)
        .map_err(anyhow::Error::from)
        .and_then(|_| run(cfg));
    let restore_result = restore_terminal();

    info!("Analyzer closed");
    first_error(run_result, restore_result)
}

fn run(cfg: &Config) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = AnalysisApp::new(cfg);

    // Main loop
    loop {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    raw?;
    Ok(())
}

/// Report the main loop's error ahead of any error from restoring the terminal
fn first_error(run: Result<()>, restore: Result<()>) -> Result<()> {
    run?;
    restore
}
