//! Output of floor generation.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::grid::Grid;
use crate::state::Monster;
use crate::types::{GenerationWarning, Pos, Tile};

use super::rooms::Room;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub grid: Grid,
    pub monsters: Vec<Monster>,
    /// Placement order; consecutive rooms are the ones a corridor was attempted between.
    pub rooms: Vec<Room>,
    pub stairs_up: Pos,
    pub stairs_down: Pos,
    pub warnings: Vec<GenerationWarning>,
}

impl GeneratedLevel {
    pub fn is_fully_connected(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_i32(self.grid.width());
        hasher.write_i32(self.grid.height());
        for &tile in self.grid.tiles() {
            hasher.write_u8(tile_code(tile));
        }
        for monster in &self.monsters {
            hasher.write_i32(monster.pos.x);
            hasher.write_i32(monster.pos.y);
            hasher.write(monster.name.as_bytes());
        }
        hasher.finish()
    }
}

pub(crate) fn tile_code(tile: Tile) -> u8 {
    match tile {
        Tile::Empty => 0,
        Tile::Floor => 1,
        Tile::WallHorizontal => 2,
        Tile::WallVertical => 3,
        Tile::Door => 4,
        Tile::Corridor => 5,
        Tile::Trap { revealed: false } => 6,
        Tile::Trap { revealed: true } => 7,
        Tile::StairsUp => 8,
        Tile::StairsDown => 9,
        Tile::MonsterOccupied => 10,
        Tile::PlayerOccupied => 11,
        Tile::Reserved => 12,
    }
}
