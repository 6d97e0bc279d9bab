/// Terminal session guard: raw mode, alternate screen and mouse capture
use anyhow::{Context as _, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::io::stdout;

pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Takes over the terminal. Everything is undone when the session drops.
    pub fn enter() -> Result<Self> {
        let terminal = ratatui::try_init().context("failed to initialise terminal")?;
        if let Err(e) = execute!(stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(e).context("failed to enable mouse capture");
        }
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
    }
}
