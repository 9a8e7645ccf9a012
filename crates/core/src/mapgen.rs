//! Procedural level generation split into coherent submodules.

pub mod carve;
pub mod rooms;

mod generator;
mod model;
mod seed;
mod spawns;

pub use carve::{CarveError, CarvedPath, carve};
pub use generator::LevelGenerator;
pub use model::GeneratedLevel;
pub use rooms::{Collision, Room, place_room};

pub(crate) use model::tile_code;

use crate::config::GameConfig;
use crate::types::GenerationError;

pub fn generate_level(
    config: &GameConfig,
    run_seed: u64,
    depth: usize,
) -> Result<GeneratedLevel, GenerationError> {
    LevelGenerator::new(config, run_seed).generate(depth)
}
