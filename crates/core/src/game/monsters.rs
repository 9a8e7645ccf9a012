//! Monster pass: reaping, chasing, and attacking.

use super::*;
use crate::grid::Grid;

impl Game {
    /// Resolves every monster on the current level in roster order. Monsters
    /// that died this turn are removed only after the whole pass.
    pub(super) fn run_monsters(&mut self, events: &mut Vec<LogEvent>) {
        let aggro_sq = i64::from(self.config.aggro_radius).pow(2);
        let GameState { levels, player, .. } = &mut self.state;
        let Level { grid, monsters, .. } = &mut levels[player.depth];

        let roster: Vec<MonsterId> = monsters.keys().collect();
        let mut dead = Vec::new();

        for id in roster {
            let monster = &mut monsters[id];
            if monster.is_dead() {
                dead.push(id);
                continue;
            }
            if monster.pos.distance_sq(player.pos) >= aggro_sq {
                continue;
            }

            let Some(next) = choose_step(grid, monster.pos, player.pos) else {
                continue;
            };
            if next == player.pos {
                player.hp -= monster.damage;
                events.push(LogEvent::MonsterAttacked {
                    monster: monster.name.clone(),
                    damage: monster.damage,
                });
            } else if next.distance_sq(player.pos) < monster.pos.distance_sq(player.pos) {
                monster.move_to(grid, next);
            }
        }

        for id in dead {
            if let Some(monster) = monsters.remove(id) {
                monster.remove_from(grid);
                events.push(LogEvent::MonsterKilled { monster: monster.name });
            }
        }
    }
}

/// Best neighbor of `from` for closing in on `player`: the player's own cell
/// or a walkable one, nearest first, ties broken left, right, up, down.
fn choose_step(grid: &Grid, from: Pos, player: Pos) -> Option<Pos> {
    from.neighbors()
        .into_iter()
        .filter(|&next| next == player || grid.get_checked(next).is_some_and(Tile::is_walkable))
        .min_by_key(|next| next.distance_sq(player))
}
