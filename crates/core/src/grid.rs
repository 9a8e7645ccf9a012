//! Fixed-size tile storage. Holds no rules beyond bounds checking.

use std::mem;

use crate::types::{Pos, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive: {width}x{height}");
        Self { width, height, tiles: vec![Tile::Empty; (width * height) as usize] }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    /// Panics when `pos` is outside the grid; callers scanning neighbors
    /// should use [`Grid::get_checked`].
    pub fn get(&self, pos: Pos) -> Tile {
        self.tiles[self.index(pos)]
    }

    pub fn get_checked(&self, pos: Pos) -> Option<Tile> {
        self.in_bounds(pos).then(|| self.tiles[self.index(pos)])
    }

    pub fn set(&mut self, pos: Pos, tile: Tile) {
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Writes `tile` and hands back the value it replaced.
    pub fn swap(&mut self, pos: Pos, tile: Tile) -> Tile {
        let idx = self.index(pos);
        mem::replace(&mut self.tiles[idx], tile)
    }

    /// Row-major scan for the first cell holding `tile`.
    pub fn find(&self, tile: Tile) -> Option<Pos> {
        self.positions().find(|&pos| self.get(pos) == tile)
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Pos { y, x }))
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.in_bounds(pos),
            "position {pos:?} outside {}x{} grid",
            self.width,
            self.height
        );
        (pos.y * self.width + pos.x) as usize
    }
}
