pub mod config;
pub mod content;
pub mod game;
pub mod grid;
pub mod journal;
pub mod mapgen;
pub mod render;
pub mod replay;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use game::Game;
pub use journal::{InputJournal, InputRecord};
pub use replay::*;
pub use state::{GameState, Level, Monster, PlayerState};
pub use types::*;
