use slotmap::SlotMap;

use crate::content::MonsterTemplate;
use crate::grid::Grid;
use crate::mapgen::GeneratedLevel;
use crate::types::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Monster {
    pub pos: Pos,
    pub name: String,
    pub glyph: char,
    pub hp: i32,
    pub damage: i32,
    /// Tile underneath the monster, put back when it moves or dies.
    pub covered: Tile,
}

impl Monster {
    pub fn spawn(template: &MonsterTemplate, pos: Pos, covered: Tile) -> Self {
        Self {
            pos,
            name: template.name.to_string(),
            glyph: template.glyph,
            hp: template.hp,
            damage: template.damage,
            covered,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Steps onto `to`, restoring the cell it leaves and remembering the one
    /// it now covers.
    pub fn move_to(&mut self, grid: &mut Grid, to: Pos) {
        grid.set(self.pos, self.covered);
        self.covered = grid.swap(to, Tile::MonsterOccupied);
        self.pos = to;
    }

    pub fn remove_from(&self, grid: &mut Grid) {
        grid.set(self.pos, self.covered);
    }
}

#[derive(Clone, Debug)]
pub struct Level {
    pub grid: Grid,
    pub monsters: SlotMap<MonsterId, Monster>,
    pub stairs_up: Pos,
    pub stairs_down: Pos,
    pub warnings: Vec<GenerationWarning>,
}

impl Level {
    pub fn monster_at(&self, pos: Pos) -> Option<MonsterId> {
        self.monsters.iter().find(|(_, monster)| monster.pos == pos).map(|(id, _)| id)
    }
}

impl From<GeneratedLevel> for Level {
    fn from(generated: GeneratedLevel) -> Self {
        let mut monsters = SlotMap::with_key();
        for monster in generated.monsters {
            monsters.insert(monster);
        }
        Self {
            grid: generated.grid,
            monsters,
            stairs_up: generated.stairs_up,
            stairs_down: generated.stairs_down,
            warnings: generated.warnings,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    pub pos: Pos,
    pub depth: usize,
    pub hp: i32,
    pub max_hp: i32,
}

pub struct GameState {
    pub levels: Vec<Level>,
    pub player: PlayerState,
    pub run_state: RunState,
}

impl GameState {
    pub fn current_level(&self) -> &Level {
        &self.levels[self.player.depth]
    }

    pub fn current_level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.player.depth]
    }
}
