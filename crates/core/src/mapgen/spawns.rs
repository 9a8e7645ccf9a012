//! Trap, monster, and staircase placement inside already stamped rooms.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GameConfig;
use crate::content::MONSTERS;
use crate::grid::Grid;
use crate::state::Monster;
use crate::types::{Pos, Tile};

use super::rooms::Room;

/// Writes `tile` onto a uniformly chosen interior cell of `room` that is still
/// plain floor. Returns `None` when no such cell is left.
pub(super) fn add_to_room(
    grid: &mut Grid,
    room: Room,
    tile: Tile,
    rng: &mut impl Rng,
) -> Option<Pos> {
    let open: Vec<Pos> = room.interior().filter(|&pos| grid.get(pos) == Tile::Floor).collect();
    let pos = *open.choose(rng)?;
    grid.set(pos, tile);
    Some(pos)
}

pub(super) fn populate_room(
    config: &GameConfig,
    grid: &mut Grid,
    room: Room,
    monsters: &mut Vec<Monster>,
    rng: &mut impl Rng,
) {
    if rng.gen_bool(config.trap_probability) {
        add_to_room(grid, room, Tile::Trap { revealed: false }, rng);
    }

    if rng.gen_bool(config.monster_probability)
        && let Some(pos) = add_to_room(grid, room, Tile::MonsterOccupied, rng)
        && let Some(template) = MONSTERS.choose(rng)
    {
        // Monsters only ever spawn on floor.
        monsters.push(Monster::spawn(template, pos, Tile::Floor));
    }
}

/// Puts one up and one down staircase in two distinct rooms and returns their
/// positions as `(up, down)`.
pub(super) fn place_stairs(
    grid: &mut Grid,
    rooms: &[Room],
    rng: &mut impl Rng,
) -> Option<(Pos, Pos)> {
    let picked: Vec<&Room> = rooms.choose_multiple(rng, 2).collect();
    let [up_room, down_room] = picked.as_slice() else {
        return None;
    };
    let up = add_to_room(grid, **up_room, Tile::StairsUp, rng)?;
    let down = add_to_room(grid, **down_room, Tile::StairsDown, rng)?;
    Some((up, down))
}
