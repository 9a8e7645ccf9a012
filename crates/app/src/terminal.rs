//! Raw terminal plumbing for the interactive host.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

use crate::app_loop::KeySource;

/// Holds the terminal in raw mode on the alternate screen until dropped.
pub struct RawTerminal {
    stdout: Stdout,
}

impl RawTerminal {
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("failed to switch to the alternate screen")?;
        Ok(Self { stdout })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        // Restoring the terminal is best effort; there is nowhere to report to.
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Keystrokes from the real terminal. Ctrl-C maps to quit since raw mode
/// swallows the signal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Option<char>> {
        loop {
            let Event::Key(key) = event::read().context("failed to read terminal input")? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(Some('q'));
                }
                KeyCode::Char(c) => return Ok(Some(c)),
                _ => continue,
            }
        }
    }
}
