//! Host loop: draw, read one key, apply it, repeat until the run ends.
//!
//! The loop only talks to a [`KeySource`] and an [`io::Write`], so tests can
//! drive it with scripted keys and capture the frames in memory.

use std::io::{self, Write};
use std::vec;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use delve_core::{Action, Game, InputJournal, LogEvent, RunState};

pub trait KeySource {
    /// Blocks for the next character key. `None` means input is closed.
    fn next_key(&mut self) -> Result<Option<char>>;
}

/// Replays a fixed key sequence; runs out by reporting closed input.
pub struct ScriptedKeys {
    keys: vec::IntoIter<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &str) -> Self {
        Self { keys: keys.chars().collect::<Vec<_>>().into_iter() }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Option<char>> {
        Ok(self.keys.next())
    }
}

#[derive(Debug)]
pub struct SessionSummary {
    pub final_state: RunState,
    /// `false` when the key source closed before the run ended.
    pub finished: bool,
    pub journal: InputJournal,
}

pub fn run_session(
    game: &mut Game,
    keys: &mut impl KeySource,
    out: &mut impl Write,
) -> Result<SessionSummary> {
    let mut journal = InputJournal::new(game.seed(), game.config().clone());
    let mut messages: Vec<String> = Vec::new();

    loop {
        let state = game.begin_cycle();
        if state == RunState::Dead
            && let Some(message) = LogEvent::PlayerDied.message()
        {
            messages.push(message);
        }
        draw(game, &messages, out)?;
        messages.clear();

        if state.is_terminal() {
            // Hold the death screen until the player acknowledges it.
            if state == RunState::Dead {
                keys.next_key()?;
            }
            return Ok(SessionSummary { final_state: state, finished: true, journal });
        }

        let Some(action) = read_action(keys)? else {
            return Ok(SessionSummary { final_state: state, finished: false, journal });
        };
        let report = game.apply(action).context("engine rejected a key during play")?;
        journal.append_action(action);
        messages.extend(report.events.iter().filter_map(LogEvent::message));

        if report.pause {
            draw(game, &messages, out)?;
            messages.clear();
            if keys.next_key()?.is_none() {
                return Ok(SessionSummary { final_state: game.run_state(), finished: false, journal });
            }
        }
    }
}

/// Skips keys that map to no action.
fn read_action(keys: &mut impl KeySource) -> Result<Option<Action>> {
    while let Some(key) = keys.next_key()? {
        if let Some(action) = Action::from_key(key) {
            return Ok(Some(action));
        }
        log::trace!("ignoring key {key:?}");
    }
    Ok(None)
}

/// Full-screen redraw. Raw mode disables newline translation, so every line
/// ends in `\r\n`.
fn draw(game: &mut Game, messages: &[String], out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in game.render_frame().lines() {
        write!(out, "{line}\r\n")?;
    }
    for message in messages {
        write!(out, "{message}\r\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use delve_core::Direction;

    use super::*;

    #[test]
    fn scripted_keys_run_out() {
        let mut keys = ScriptedKeys::new("hj");
        assert_eq!(keys.next_key().expect("scripted"), Some('h'));
        assert_eq!(keys.next_key().expect("scripted"), Some('j'));
        assert_eq!(keys.next_key().expect("scripted"), None);
    }

    #[test]
    fn unknown_keys_are_skipped() {
        let mut keys = ScriptedKeys::new("xz?l");
        let action = read_action(&mut keys).expect("scripted");
        assert_eq!(action, Some(Action::Move(Direction::Right)));
    }
}
