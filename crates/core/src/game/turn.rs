//! Player action resolution and the end-of-turn sequence.
//! This module decides what the player's action does to the current level.
//! It does not own monster decisions or level installation.

use rand::Rng;

use super::*;

impl Game {
    pub(super) fn resolve_turn(
        &mut self,
        action: Action,
        events: &mut Vec<LogEvent>,
    ) -> Result<(), GameError> {
        let player = self.state.player;
        let target = match action {
            Action::Move(direction) => player.pos.step(direction),
            Action::Wait | Action::Ascend | Action::Descend | Action::Quit => player.pos,
        };

        // Stairs travel ends the turn outright. A stairs key pressed anywhere
        // else falls through and resolves like waiting.
        let level = self.state.current_level();
        match action {
            Action::Descend if player.pos == level.stairs_down => {
                return self.descend(events);
            }
            Action::Ascend if player.pos == level.stairs_up && player.depth > 0 => {
                self.ascend(events);
                return Ok(());
            }
            _ => {}
        }

        self.resolve_target(target, events);
        self.regenerate(events);
        self.run_monsters(events);
        Ok(())
    }

    fn resolve_target(&mut self, target: Pos, events: &mut Vec<LogEvent>) {
        let trap_damage = self.config.trap_damage;
        let player_damage = self.config.player_damage;
        let GameState { levels, player, .. } = &mut self.state;
        let level = &mut levels[player.depth];

        let Some(tile) = level.grid.get_checked(target) else {
            return;
        };

        if tile.is_trap() {
            level.grid.set(target, Tile::Trap { revealed: true });
            player.hp -= trap_damage;
            player.pos = target;
            events.push(LogEvent::TrapTriggered { pos: target, damage: trap_damage });
        } else if let Some(id) = level.monster_at(target) {
            let monster = &mut level.monsters[id];
            monster.hp -= player_damage;
            events.push(LogEvent::PlayerHit { monster: monster.name.clone(), damage: player_damage });
        } else if tile.is_walkable() {
            player.pos = target;
        }
    }

    fn regenerate(&mut self, events: &mut Vec<LogEvent>) {
        // The roll happens every turn so the engine RNG stream does not depend
        // on the player's health.
        let rolled = self.rng.gen_bool(self.config.regen_probability);
        let player = &mut self.state.player;
        if rolled && player.hp > 0 && player.hp < player.max_hp {
            player.hp += 1;
            events.push(LogEvent::Regenerated { hp: player.hp });
        }
    }
}
