use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::Snapshot;
use crate::grid::GridSize;
use crate::renderer;

/// Raw-mode alternate screen that the game draws into.
///
/// The screen is handed back to the shell when this value drops.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let terminal = execute!(io::stdout(), EnterAlternateScreen, Hide)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
            .inspect_err(|_| leave_screen())?;

        Ok(Self { terminal })
    }

    /// Draws one frame of `snapshot`.
    pub fn draw(&mut self, snapshot: &Snapshot, bounds: GridSize) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, snapshot, bounds))
            .map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        leave_screen();
    }
}

/// Leaves the alternate screen before a panic message is printed.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_screen();
        previous(info);
    }));
}

// Errors are dropped: this runs on the way out, often mid-panic.
fn leave_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
}
