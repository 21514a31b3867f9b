//! Terminal session for the dashboard
//!
//! Raw mode, alternate screen and mouse capture are switched on in `enter`
//! and restored in `exit`, which also runs on drop.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::{
    io::{self, Stdout},
    time::Duration,
};
use tracing::debug;

/// Owns the crossterm terminal for the lifetime of the dashboard
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// How long `next_event` waits before reporting a tick
    tick_rate: Duration,
    /// Whether raw mode and the alternate screen are currently on
    active: bool,
}

impl Tui {
    pub fn new(tick_rate: Duration) -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to open terminal")?;
        Ok(Self {
            terminal,
            tick_rate,
            active: false,
        })
    }

    /// Take over the terminal
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        crossterm::execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        self.active = true;
        self.terminal.clear()?;
        debug!(tick_ms = self.tick_rate.as_millis() as u64, "terminal entered");
        Ok(())
    }

    /// Give the terminal back; calling it twice is a no-op
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        terminal::disable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )?;
        debug!("terminal restored");
        Ok(())
    }

    /// Wait up to one tick for input
    ///
    /// `None` means the tick elapsed. Key release and repeat events are
    /// dropped so each press maps to one action on every platform.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Press => Ok(None),
            event => Ok(Some(event)),
        }
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
