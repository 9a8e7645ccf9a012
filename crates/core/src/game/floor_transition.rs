//! Stairs travel and lazy level creation.
//! This module exists to keep level installation apart from turn resolution.
//! It does not own the decision of whether a stairs action is usable.

use super::*;

impl Game {
    /// Moves the player one level down, generating it on first arrival.
    pub(super) fn descend(&mut self, events: &mut Vec<LogEvent>) -> Result<(), GameError> {
        let depth = self.state.player.depth + 1;
        if depth == self.state.levels.len() {
            let generated = generate_level(&self.config, self.seed, depth)?;
            log::debug!(
                "run {}: generated depth {depth} with {} rooms",
                self.seed,
                generated.rooms.len()
            );
            self.state.levels.push(Level::from(generated));
        }
        self.enter_level(depth, |level| level.stairs_up, events);
        Ok(())
    }

    pub(super) fn ascend(&mut self, events: &mut Vec<LogEvent>) {
        let depth = self.state.player.depth - 1;
        self.enter_level(depth, |level| level.stairs_down, events);
    }

    fn enter_level(
        &mut self,
        depth: usize,
        arrival: impl Fn(&Level) -> Pos,
        events: &mut Vec<LogEvent>,
    ) {
        let level = &self.state.levels[depth];
        let pos = arrival(level);
        log_unconnected_rooms(self.seed, depth, level);
        self.state.player.depth = depth;
        self.state.player.pos = pos;
        events.push(LogEvent::ChangedLevel { depth });
    }
}

/// Reports corridors that could not be dug, so a stranded staircase can be
/// told apart from an engine bug.
pub(super) fn log_unconnected_rooms(seed: u64, depth: usize, level: &Level) {
    for warning in &level.warnings {
        match warning {
            GenerationWarning::UnreachableConnection { from_room, to_room } => {
                log::info!("run {seed}: depth {depth} has no corridor between rooms {from_room} and {to_room}");
            }
        }
    }
}
