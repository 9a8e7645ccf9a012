//! Greedy depth-first corridor search with backtracking.
//!
//! The search walks an explicit stack instead of recursing: every frame owns
//! the cell it stands on, the tile that cell held before it was reserved, and
//! its remaining candidates. Popping an exhausted frame restores that tile, so
//! a failed search leaves the grid exactly as it found it.

use std::collections::HashSet;

use thiserror::Error;

use crate::grid::Grid;
use crate::types::{Pos, Tile};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarvedPath {
    /// Cells turned into corridor, from the start side to the goal side.
    pub cells: Vec<Pos>,
    pub backtracks: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CarveError {
    #[error("no corridor connects {start:?} to {goal:?} ({backtracks} backtracks)")]
    Unreachable { start: Pos, goal: Pos, backtracks: u32 },
}

struct Frame {
    pos: Pos,
    /// Tile the cell held before it was reserved; `None` for the start cell,
    /// which the search never overwrites.
    covered: Option<Tile>,
    candidates: Vec<Pos>,
    next: usize,
}

/// Connects `start` to `goal` with corridor tiles. Succeeds once a cell next
/// to `goal` is reached; neither endpoint is rewritten.
pub fn carve(grid: &mut Grid, start: Pos, goal: Pos) -> Result<CarvedPath, CarveError> {
    if start == goal || start.is_adjacent(goal) {
        return Ok(CarvedPath::default());
    }

    let mut visited = HashSet::from([start]);
    let mut stack = vec![Frame {
        pos: start,
        covered: None,
        candidates: ranked_candidates(grid, start, goal, &visited),
        next: 0,
    }];
    let mut backtracks = 0_u32;

    while let Some(frame) = stack.last_mut() {
        let Some(&candidate) = frame.candidates.get(frame.next) else {
            if let Some(frame) = stack.pop()
                && let Some(covered) = frame.covered
            {
                grid.set(frame.pos, covered);
                backtracks += 1;
            }
            continue;
        };
        frame.next += 1;

        // A deeper branch may have claimed this cell since the frame was built.
        if !visited.insert(candidate) || !grid.get(candidate).is_carvable() {
            continue;
        }

        let covered = grid.swap(candidate, Tile::Reserved);
        if candidate.is_adjacent(goal) {
            let mut cells: Vec<Pos> = stack.iter().skip(1).map(|frame| frame.pos).collect();
            cells.push(candidate);
            for &pos in &cells {
                grid.set(pos, Tile::Corridor);
            }
            return Ok(CarvedPath { cells, backtracks });
        }

        stack.push(Frame {
            pos: candidate,
            covered: Some(covered),
            candidates: ranked_candidates(grid, candidate, goal, &visited),
            next: 0,
        });
    }

    Err(CarveError::Unreachable { start, goal, backtracks })
}

/// Unvisited carvable neighbors of `pos`, nearest to `goal` first. The sort is
/// stable, so equal distances keep the left, right, up, down order.
fn ranked_candidates(grid: &Grid, pos: Pos, goal: Pos, visited: &HashSet<Pos>) -> Vec<Pos> {
    let mut candidates: Vec<Pos> = pos
        .neighbors()
        .into_iter()
        .filter(|next| !visited.contains(next))
        .filter(|&next| grid.get_checked(next).is_some_and(Tile::is_carvable))
        .collect();
    candidates.sort_by_key(|next| next.distance_sq(goal));
    candidates
}
