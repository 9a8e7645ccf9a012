//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn resolution.
//! It does not own replay execution or journal persistence.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::mapgen::tile_code;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u128(self.rng.get_word_pos());
        hasher.write_u8(match self.state.run_state {
            RunState::Playing => 0,
            RunState::Dead => 1,
            RunState::Quit => 2,
        });

        let player = &self.state.player;
        hasher.write_usize(player.depth);
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.hp);
        hasher.write_i32(player.max_hp);

        hasher.write_usize(self.state.levels.len());
        for level in &self.state.levels {
            for &tile in level.grid.tiles() {
                hasher.write_u8(tile_code(tile));
            }
            for monster in level.monsters.values() {
                hasher.write_i32(monster.pos.x);
                hasher.write_i32(monster.pos.y);
                hasher.write_i32(monster.hp);
                hasher.write_u8(tile_code(monster.covered));
            }
        }
        hasher.finish()
    }
}
