//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating level and monster setup across tests.
//! It does not own production gameplay logic.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slotmap::SlotMap;

use super::*;
use crate::content::monster_template;
use crate::grid::Grid;
use crate::state::Monster;

/// One walled room filling the whole grid, up stairs in the top-left interior
/// corner and down stairs in the bottom-right one.
pub(super) fn open_level(width: i32, height: i32) -> Level {
    let mut grid = Grid::new(width, height);
    for pos in grid.positions() {
        let tile = if pos.y == 0 || pos.y == height - 1 {
            Tile::WallHorizontal
        } else if pos.x == 0 || pos.x == width - 1 {
            Tile::WallVertical
        } else {
            Tile::Floor
        };
        grid.set(pos, tile);
    }
    let stairs_up = Pos { y: 1, x: 1 };
    let stairs_down = Pos { y: height - 2, x: width - 2 };
    grid.set(stairs_up, Tile::StairsUp);
    grid.set(stairs_down, Tile::StairsDown);

    Level { grid, monsters: SlotMap::with_key(), stairs_up, stairs_down, warnings: Vec::new() }
}

/// A run on `level` with regeneration switched off so turn outcomes are exact.
pub(super) fn fixture_game(level: Level, player_pos: Pos) -> Game {
    let config = GameConfig { regen_probability: 0.0, ..GameConfig::default() };
    let max_hp = config.player_max_hp;
    Game {
        seed: 7,
        turn: 0,
        config,
        rng: ChaCha8Rng::seed_from_u64(7),
        state: GameState {
            levels: vec![level],
            player: PlayerState { pos: player_pos, depth: 0, hp: max_hp, max_hp },
            run_state: RunState::Playing,
        },
        log: Vec::new(),
    }
}

pub(super) fn add_monster(game: &mut Game, name: &str, pos: Pos) -> MonsterId {
    let template = monster_template(name).expect("known monster template");
    let level = game.state.current_level_mut();
    let covered = level.grid.swap(pos, Tile::MonsterOccupied);
    level.monsters.insert(Monster::spawn(template, pos, covered))
}

pub(super) fn hide_trap(game: &mut Game, pos: Pos) {
    game.state.current_level_mut().grid.set(pos, Tile::Trap { revealed: false });
}
