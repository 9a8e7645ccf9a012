//! Text frame for the terminal host.

use std::collections::HashMap;

use crate::state::{Level, PlayerState};
use crate::types::{Pos, Tile};

/// Draws `level` row by row with the player swapped in at its position, then
/// the health line. The grid is left exactly as it was found.
pub fn render_frame(level: &mut Level, player: &PlayerState) -> String {
    let covered = level.grid.swap(player.pos, Tile::PlayerOccupied);
    let frame = draw(level, player);
    level.grid.set(player.pos, covered);
    frame
}

fn draw(level: &Level, player: &PlayerState) -> String {
    let glyphs: HashMap<Pos, char> =
        level.monsters.values().map(|monster| (monster.pos, monster.glyph)).collect();
    let grid = &level.grid;

    let mut frame = String::with_capacity(((grid.width() + 1) * (grid.height() + 1)) as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos { y, x };
            let glyph = match grid.get(pos) {
                Tile::MonsterOccupied => glyphs.get(&pos).copied().unwrap_or('m'),
                tile => tile.glyph(),
            };
            frame.push(glyph);
        }
        frame.push('\n');
    }
    frame.push_str(&format!("Health: {}/{}", player.hp, player.max_hp));
    frame
}

#[cfg(test)]
mod tests {
    use slotmap::SlotMap;

    use super::*;
    use crate::content::monster_template;
    use crate::grid::Grid;
    use crate::state::Monster;

    fn tiny_level() -> Level {
        let mut grid = Grid::new(5, 3);
        for x in 0..5 {
            grid.set(Pos { y: 0, x }, Tile::WallHorizontal);
            grid.set(Pos { y: 2, x }, Tile::WallHorizontal);
        }
        grid.set(Pos { y: 1, x: 0 }, Tile::WallVertical);
        grid.set(Pos { y: 1, x: 1 }, Tile::StairsUp);
        grid.set(Pos { y: 1, x: 2 }, Tile::Trap { revealed: false });
        grid.set(Pos { y: 1, x: 3 }, Tile::Floor);
        grid.set(Pos { y: 1, x: 4 }, Tile::Door);

        let mut monsters = SlotMap::with_key();
        let goblin = monster_template("goblin").expect("goblin template");
        let covered = grid.swap(Pos { y: 1, x: 3 }, Tile::MonsterOccupied);
        monsters.insert(Monster::spawn(goblin, Pos { y: 1, x: 3 }, covered));

        Level {
            grid,
            monsters,
            stairs_up: Pos { y: 1, x: 1 },
            stairs_down: Pos { y: 1, x: 4 },
            warnings: Vec::new(),
        }
    }

    fn player_at(pos: Pos) -> PlayerState {
        PlayerState { pos, depth: 0, hp: 7, max_hp: 10 }
    }

    #[test]
    fn frame_shows_glyphs_player_and_health() {
        let mut level = tiny_level();
        let frame = render_frame(&mut level, &player_at(Pos { y: 1, x: 1 }));

        assert_eq!(frame, "-----\n|@.g+\n-----\nHealth: 7/10");
    }

    #[test]
    fn rendering_twice_without_changes_is_identical() {
        let mut level = tiny_level();
        let player = player_at(Pos { y: 1, x: 1 });
        let before = level.grid.clone();

        let first = render_frame(&mut level, &player);
        let second = render_frame(&mut level, &player);

        assert_eq!(first, second);
        assert_eq!(level.grid, before, "the player overlay must be swapped back out");
    }

    #[test]
    fn revealed_traps_stand_out() {
        let mut level = tiny_level();
        level.grid.set(Pos { y: 1, x: 2 }, Tile::Trap { revealed: true });

        let frame = render_frame(&mut level, &player_at(Pos { y: 1, x: 1 }));

        assert!(frame.starts_with("-----\n|@^g+\n"));
    }
}
