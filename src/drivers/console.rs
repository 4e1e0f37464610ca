//! Crossterm-backed drivers for running the shell on a real terminal.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;
use ratatui::{Frame, Terminal};

use super::keyboard_normalizer::KeyboardNormalizer;
use super::{InputDriver, OutputDriver};

/// Reads terminal events, dropping the ones the shell never acts on.
#[derive(Debug, Default)]
pub struct ConsoleInputDriver {
    normalizer: KeyboardNormalizer,
    mouse_captured: bool,
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        loop {
            if let Some(event) = self.normalizer.normalize(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if self.mouse_captured == enabled {
            return Ok(());
        }
        let mut out = io::stdout();
        if enabled {
            // focus reports let the host end a drag whose release it never sees
            execute!(out, EnableMouseCapture, EnableFocusChange)?;
        } else {
            execute!(out, DisableFocusChange, DisableMouseCapture)?;
        }
        self.mouse_captured = enabled;
        tracing::debug!(enabled, "pointer capture");
        Ok(())
    }
}

impl Drop for ConsoleInputDriver {
    fn drop(&mut self) {
        let _ = self.set_mouse_capture(false);
    }
}

/// The desktop surface: the alternate screen in raw mode.
///
/// Dropping the driver leaves the alternate screen, so a run that bails out
/// early still hands the terminal back intact.
pub struct ConsoleOutputDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl ConsoleOutputDriver {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
            active: false,
        })
    }
}

impl OutputDriver for ConsoleOutputDriver {
    fn enter(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        let backend = self.terminal.backend_mut();
        queue!(backend, EnterAlternateScreen, cursor::Hide)?;
        backend.flush()?;
        self.terminal.clear()?;
        self.active = true;
        tracing::info!("desktop surface entered");
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let backend = self.terminal.backend_mut();
        queue!(backend, LeaveAlternateScreen, cursor::Show)?;
        backend.flush()?;
        terminal::disable_raw_mode()?;
        tracing::info!("desktop surface left");
        Ok(())
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for ConsoleOutputDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
