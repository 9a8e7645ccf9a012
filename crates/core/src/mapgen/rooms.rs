//! Room rectangles, collision-checked stamping, and the randomized placement loop.

use rand::Rng;
use thiserror::Error;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::state::Monster;
use crate::types::{GenerationError, Pos, Tile};

use super::spawns::populate_room;

/// Rectangle anchored at its top-left corner. `width` and `height` count
/// cells including the walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn right(self) -> i32 {
        self.x + self.width - 1
    }

    pub fn bottom(self) -> i32 {
        self.y + self.height - 1
    }

    pub fn expanded(self, margin: i32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2 * margin,
            height: self.height + 2 * margin,
        }
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.bottom()
            && self.bottom() >= other.y
    }

    pub fn contains(self, pos: Pos) -> bool {
        pos.x >= self.x && pos.x <= self.right() && pos.y >= self.y && pos.y <= self.bottom()
    }

    pub fn is_within(self, grid: &Grid) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() < grid.width() && self.bottom() < grid.height()
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.y..=self.bottom()).flat_map(move |y| (self.x..=self.right()).map(move |x| Pos { y, x }))
    }

    pub fn interior(self) -> impl Iterator<Item = Pos> {
        (self.y + 1..self.bottom())
            .flat_map(move |y| (self.x + 1..self.right()).map(move |x| Pos { y, x }))
    }

    fn wall_for(self, pos: Pos) -> Option<Tile> {
        if pos.y == self.y || pos.y == self.bottom() {
            Some(Tile::WallHorizontal)
        } else if pos.x == self.x || pos.x == self.right() {
            Some(Tile::WallVertical)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("room {0:?} collides with existing tiles or leaves the grid")]
pub struct Collision(pub Room);

/// Stamps `room` onto `grid` if the room and a `min_sep` buffer around it are
/// inside the grid and completely `Empty`. On collision nothing is written.
pub fn place_room(grid: &mut Grid, room: Room, min_sep: i32) -> Result<(), Collision> {
    let bordered = room.expanded(min_sep);
    if room.width <= 0 || room.height <= 0 || !bordered.is_within(grid) {
        return Err(Collision(room));
    }
    if bordered.cells().any(|pos| grid.get(pos) != Tile::Empty) {
        return Err(Collision(room));
    }

    for pos in room.cells() {
        grid.set(pos, room.wall_for(pos).unwrap_or(Tile::Floor));
    }
    Ok(())
}

/// Picks a door cell on a random side of `room`, never on a corner.
pub(super) fn random_door(room: Room, rng: &mut impl Rng) -> Pos {
    match rng.gen_range(0..4) {
        0 => Pos { y: rng.gen_range(room.y + 1..room.bottom()), x: room.x },
        1 => Pos { y: room.bottom(), x: rng.gen_range(room.x + 1..room.right()) },
        2 => Pos { y: rng.gen_range(room.y + 1..room.bottom()), x: room.right() },
        _ => Pos { y: room.y, x: rng.gen_range(room.x + 1..room.right()) },
    }
}

pub(super) struct RoomLayout {
    pub(super) grid: Grid,
    pub(super) rooms: Vec<Room>,
    pub(super) monsters: Vec<Monster>,
}

pub(super) fn build_room_layout(
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Result<RoomLayout, GenerationError> {
    let target = rng.gen_range(config.room_count_range()) as usize;
    let min_rooms = config.min_rooms as usize;
    let mut best = 0;

    for layout_attempt in 1..=config.layout_attempts {
        let mut layout = RoomLayout {
            grid: Grid::new(config.width, config.height),
            rooms: Vec::with_capacity(target),
            monsters: Vec::new(),
        };

        while layout.rooms.len() < target {
            let Some(room) = place_random_room(config, &mut layout, rng) else {
                break;
            };
            layout.rooms.push(room);
            populate_room(config, &mut layout.grid, room, &mut layout.monsters, rng);
        }

        if layout.rooms.len() >= min_rooms {
            if layout.rooms.len() < target {
                log::debug!(
                    "settled for {} of {target} rooms after exhausting placement attempts",
                    layout.rooms.len()
                );
            }
            return Ok(layout);
        }

        best = best.max(layout.rooms.len());
        log::debug!(
            "layout attempt {layout_attempt} stalled at {} rooms; restarting",
            layout.rooms.len()
        );
    }

    Err(GenerationError::PlacementExhausted {
        requested: min_rooms,
        placed: best,
        layouts: config.layout_attempts,
    })
}

fn place_random_room(
    config: &GameConfig,
    layout: &mut RoomLayout,
    rng: &mut impl Rng,
) -> Option<Room> {
    let sep = config.min_separation;
    for _ in 0..config.placement_attempts {
        let room = Room {
            x: rng.gen_range(sep..=config.width),
            y: rng.gen_range(sep..=config.height),
            width: rng.gen_range(config.room_width_range()),
            height: rng.gen_range(config.room_height_range()),
        };

        let bordered = room.expanded(sep);
        if !bordered.is_within(&layout.grid) {
            continue;
        }
        if layout.rooms.iter().any(|existing| existing.expanded(sep).intersects(&bordered)) {
            continue;
        }
        if place_room(&mut layout.grid, room, sep).is_ok() {
            return Some(room);
        }
    }
    None
}
