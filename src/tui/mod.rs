//! Terminal UI for Strictly Teams

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

pub use app::{ScreenTransition, StatusTone, TeamApp};
pub use input::{AppCommand, command_for};
pub use ui::draw;

use crate::config::TeamsConfig;

/// Runs the interactive TUI until the user quits.
///
/// Logs go to `log_file` so they do not interfere with the terminal.
pub fn run_tui(config: TeamsConfig, log_file: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,strictly_teams=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Teams TUI");

    let mut guard = TerminalGuard::enable()?;
    let mut stdout = io::stdout();
    guard.enter_alternate_screen(&mut stdout)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TeamApp::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed.
    guard.restore()?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    } else {
        info!("TUI exited");
    }
    result
}

/// Undoes raw mode and the alternate screen on drop.
///
/// Created right after raw mode is enabled, so a failure anywhere later in
/// setup still hands the shell back in a usable state.
#[derive(Debug)]
struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self {
            raw_mode: true,
            alternate_screen: false,
        })
    }

    fn enter_alternate_screen(&mut self, out: &mut impl Write) -> io::Result<()> {
        execute!(out, EnterAlternateScreen)?;
        self.alternate_screen = true;
        Ok(())
    }

    /// Restores whatever is still active. Calling it again is a no-op.
    fn restore(&mut self) -> io::Result<()> {
        if std::mem::take(&mut self.alternate_screen) {
            debug!("Leaving alternate screen");
            execute!(io::stdout(), LeaveAlternateScreen)?;
        }
        if std::mem::take(&mut self.raw_mode) {
            debug!("Disabling raw mode");
            disable_raw_mode()?;
        }
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.raw_mode || self.alternate_screen
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.is_active() {
            return;
        }
        info!("Restoring terminal");
        if let Err(e) = self.restore() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Drives the draw / input loop.
#[instrument(skip(terminal, app))]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut TeamApp) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app))?;

        // Poll with a short timeout to keep the loop responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }

            if app.handle_key(key) == ScreenTransition::Quit {
                return Ok(());
            }
        }
    }
}
