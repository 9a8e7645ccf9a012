//! Turn resolution for a single run.
//!
//! `Game` owns every generated level, the player, and the engine RNG. The host
//! drives it one keystroke at a time: `begin_cycle` settles the run state,
//! then `apply` resolves the action and hands back what happened.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::mapgen::generate_level;
use crate::render;
use crate::state::{GameState, Level, PlayerState};
use crate::types::*;

mod floor_transition;
mod hash;
mod monsters;
mod turn;

#[cfg(test)]
mod test_support;

pub struct Game {
    seed: u64,
    turn: u64,
    config: GameConfig,
    rng: ChaCha8Rng,
    state: GameState,
    log: Vec<LogEvent>,
}

impl Game {
    /// Generates the first level and places the player on its up staircase.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        let first = generate_level(&config, seed, 0)?;
        let player = PlayerState {
            pos: first.stairs_up,
            depth: 0,
            hp: config.player_max_hp,
            max_hp: config.player_max_hp,
        };
        log::debug!("run {seed}: starting at {:?} with {} hp", player.pos, player.hp);
        let first = Level::from(first);
        floor_transition::log_unconnected_rooms(seed, 0, &first);

        Ok(Self {
            seed,
            turn: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: GameState {
                levels: vec![first],
                player,
                run_state: RunState::Playing,
            },
            config,
            log: Vec::new(),
        })
    }

    /// Settles the run state before the next input is read. A player at or
    /// below zero hp dies here, not in the turn that dealt the damage.
    pub fn begin_cycle(&mut self) -> RunState {
        if self.state.run_state == RunState::Playing && self.state.player.hp <= 0 {
            self.state.run_state = RunState::Dead;
            self.log.push(LogEvent::PlayerDied);
            log::debug!("run {}: player died on turn {}", self.seed, self.turn);
        }
        self.state.run_state
    }

    pub fn apply(&mut self, action: Action) -> Result<TurnReport, GameError> {
        if self.state.run_state.is_terminal() {
            return Err(GameError::RunFinished);
        }

        let mut events = Vec::new();
        if action == Action::Quit {
            self.state.run_state = RunState::Quit;
        } else {
            self.resolve_turn(action, &mut events)?;
        }
        self.turn += 1;

        self.log.extend(events.iter().cloned());
        let pause = events.iter().any(LogEvent::is_pausing);
        Ok(TurnReport { events, pause })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn current_level(&self) -> &Level {
        self.state.current_level()
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Draws the level the player is on followed by the health line.
    pub fn render_frame(&mut self) -> String {
        let player = self.state.player;
        render::render_frame(self.state.current_level_mut(), &player)
    }
}
