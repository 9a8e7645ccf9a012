//! Floor orchestration: rooms, corridors between consecutive rooms, stairs.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::types::{GenerationError, GenerationWarning, Pos, Tile};

use super::carve::carve;
use super::model::GeneratedLevel;
use super::rooms::{Room, build_room_layout, random_door};
use super::seed::derive_floor_seed;
use super::spawns::place_stairs;

pub struct LevelGenerator<'a> {
    config: &'a GameConfig,
    run_seed: u64,
}

impl<'a> LevelGenerator<'a> {
    pub fn new(config: &'a GameConfig, run_seed: u64) -> Self {
        Self { config, run_seed }
    }

    pub fn generate(&self, depth: usize) -> Result<GeneratedLevel, GenerationError> {
        self.config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(derive_floor_seed(self.run_seed, depth));

        let mut layout = build_room_layout(self.config, &mut rng)?;
        let warnings = connect_rooms(&mut layout.grid, &layout.rooms, depth, &mut rng);

        let (stairs_up, stairs_down) = place_both_stairs(&mut layout.grid, &layout.rooms, &mut rng)?;

        log::debug!(
            "generated depth {depth}: {} rooms, {} monsters, {} warnings",
            layout.rooms.len(),
            layout.monsters.len(),
            warnings.len()
        );

        Ok(GeneratedLevel {
            grid: layout.grid,
            monsters: layout.monsters,
            rooms: layout.rooms,
            stairs_up,
            stairs_down,
            warnings,
        })
    }
}

/// Every room keeps a free interior cell for a staircase: interiors are at
/// least 2x2 and hold at most a trap and a monster at this point. Fewer than
/// two rooms is the only way to get here empty handed.
fn place_both_stairs(
    grid: &mut Grid,
    rooms: &[Room],
    rng: &mut impl Rng,
) -> Result<(Pos, Pos), GenerationError> {
    place_stairs(grid, rooms, rng).ok_or(GenerationError::StairsUnplaceable { rooms: rooms.len() })
}

/// Joins each room to the next one in placement order through a random door
/// on each. Failed carves leave the pair unconnected and are reported back.
fn connect_rooms(
    grid: &mut Grid,
    rooms: &[Room],
    depth: usize,
    rng: &mut impl Rng,
) -> Vec<GenerationWarning> {
    let mut warnings = Vec::new();
    for (index, pair) in rooms.windows(2).enumerate() {
        let start = random_door(pair[0], rng);
        let goal = random_door(pair[1], rng);
        grid.set(start, Tile::Door);
        grid.set(goal, Tile::Door);

        if let Err(error) = carve(grid, start, goal) {
            log::warn!("depth {depth}: rooms {index} and {} left unconnected: {error}", index + 1);
            warnings.push(GenerationWarning::UnreachableConnection {
                from_room: index,
                to_room: index + 1,
            });
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::mapgen::rooms::place_room;

    fn generate(seed: u64, depth: usize) -> GeneratedLevel {
        LevelGenerator::new(&GameConfig::default(), seed).generate(depth).expect("default config")
    }

    fn reachable(grid: &Grid, start: Pos) -> BTreeSet<Pos> {
        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in pos.neighbors() {
                let Some(tile) = grid.get_checked(next) else {
                    continue;
                };
                let passable = tile.is_walkable() || tile.is_trap() || tile == Tile::MonsterOccupied;
                if passable && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn same_seed_and_depth_produce_identical_levels() {
        assert_eq!(generate(123_456, 2).fingerprint(), generate(123_456, 2).fingerprint());
    }

    #[test]
    fn changing_depth_changes_the_level() {
        assert_ne!(generate(123_456, 0).fingerprint(), generate(123_456, 1).fingerprint());
    }

    #[test]
    fn exactly_one_staircase_each_way_in_distinct_rooms() {
        for seed in 0..25 {
            let level = generate(seed, 0);
            assert_eq!(level.grid.count(Tile::StairsUp), 1, "seed {seed}");
            assert_eq!(level.grid.count(Tile::StairsDown), 1, "seed {seed}");
            assert_eq!(level.grid.find(Tile::StairsUp), Some(level.stairs_up));
            assert_eq!(level.grid.find(Tile::StairsDown), Some(level.stairs_down));

            let up_room = level.rooms.iter().position(|room| room.contains(level.stairs_up));
            let down_room = level.rooms.iter().position(|room| room.contains(level.stairs_down));
            assert!(up_room.is_some(), "seed {seed}: up stairs outside every room");
            assert_ne!(up_room, down_room, "seed {seed}: both stairs in one room");
        }
    }

    #[test]
    fn monsters_sit_on_their_marked_cells() {
        for seed in 0..25 {
            let level = generate(seed, 3);
            assert_eq!(level.grid.count(Tile::MonsterOccupied), level.monsters.len());
            for monster in &level.monsters {
                assert_eq!(level.grid.get(monster.pos), Tile::MonsterOccupied);
                assert_eq!(monster.covered, Tile::Floor);
            }
        }
    }

    #[test]
    fn no_carve_sentinel_survives_generation() {
        for seed in 0..25 {
            assert_eq!(generate(seed, 0).grid.count(Tile::Reserved), 0);
        }
    }

    #[test]
    fn connected_levels_link_both_staircases() {
        let mut connected = 0;
        for seed in 0..40 {
            let level = generate(seed, 1);
            if !level.is_fully_connected() {
                continue;
            }
            connected += 1;
            assert!(
                reachable(&level.grid, level.stairs_up).contains(&level.stairs_down),
                "seed {seed}: stairs disconnected without a warning"
            );
        }
        assert!(connected > 30, "only {connected} of 40 levels were fully connected");
    }

    #[test]
    fn unreachable_connection_is_reported_as_warning() {
        let rooms = [Room { x: 2, y: 2, width: 6, height: 6 }, Room { x: 14, y: 2, width: 6, height: 6 }];
        let mut grid = Grid::new(30, 12);
        for &room in &rooms {
            place_room(&mut grid, room, 2).expect("fixture rooms fit");
        }
        // Seal the second room inside a ring of wall.
        let sealed = rooms[1];
        for pos in sealed.expanded(1).cells().filter(|&pos| !sealed.contains(pos)) {
            grid.set(pos, Tile::WallVertical);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let warnings = connect_rooms(&mut grid, &rooms, 0, &mut rng);

        assert_eq!(warnings, vec![GenerationWarning::UnreachableConnection { from_room: 0, to_room: 1 }]);
        assert_eq!(grid.count(Tile::Corridor), 0);
        assert_eq!(grid.count(Tile::Reserved), 0);
    }

    #[test]
    fn open_rooms_get_connected_without_warnings() {
        let rooms = [Room { x: 2, y: 2, width: 6, height: 6 }, Room { x: 14, y: 2, width: 6, height: 6 }];
        let mut grid = Grid::new(30, 12);
        for &room in &rooms {
            place_room(&mut grid, room, 2).expect("fixture rooms fit");
        }

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(connect_rooms(&mut grid, &rooms, 0, &mut rng).is_empty());
        assert_eq!(grid.count(Tile::Door), 2);
        assert!(grid.count(Tile::Corridor) > 0);
    }

    #[test]
    fn a_lone_room_cannot_hold_both_staircases() {
        let room = Room { x: 2, y: 2, width: 6, height: 6 };
        let mut grid = Grid::new(30, 12);
        place_room(&mut grid, room, 2).expect("fixture room fits");

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let error = place_both_stairs(&mut grid, &[room], &mut rng).expect_err("one room");

        assert_eq!(error, GenerationError::StairsUnplaceable { rooms: 1 });
        assert!(error.to_string().contains("staircases"));
        assert_eq!(grid.count(Tile::StairsUp) + grid.count(Tile::StairsDown), 0);
    }

    #[test]
    fn invalid_config_fails_before_generation() {
        let config = GameConfig { room_width: (90, 90), ..GameConfig::default() };
        assert!(matches!(
            LevelGenerator::new(&config, 1).generate(0),
            Err(GenerationError::Config(_))
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn rooms_stay_in_bounds_and_apart(seed in any::<u64>(), depth in 0_usize..6) {
            let config = GameConfig::default();
            let level = LevelGenerator::new(&config, seed).generate(depth).expect("default config");
            let sep = config.min_separation;
            prop_assert!(level.rooms.len() >= config.min_rooms as usize);
            prop_assert!(level.rooms.len() <= config.max_rooms as usize);
            for (index, room) in level.rooms.iter().enumerate() {
                prop_assert!(room.expanded(sep).is_within(&level.grid));
                for other in &level.rooms[index + 1..] {
                    prop_assert!(!room.expanded(sep).intersects(&other.expanded(sep)));
                }
            }
        }
    }
}
