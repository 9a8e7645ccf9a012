use thiserror::Error;

use crate::game::Game;
use crate::journal::InputJournal;
use crate::types::{GameError, RunState};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplayError {
    #[error("journal record {found} is out of order, expected {expected}")]
    OutOfOrder { expected: u64, found: u64 },
    #[error("journal record {seq} was rejected: {source}")]
    Rejected { seq: u64, source: GameError },
    #[error(transparent)]
    Game(#[from] GameError),
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_state: RunState,
    pub final_snapshot_hash: u64,
    pub final_turn: u64,
}

/// Rebuilds a run from its journal and reports where it ended up.
pub fn replay_to_end(journal: &InputJournal) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.config.clone(), journal.seed)?;

    for (expected, record) in (0_u64..).zip(&journal.inputs) {
        if record.seq != expected {
            return Err(ReplayError::OutOfOrder { expected, found: record.seq });
        }
        game.begin_cycle();
        game.apply(record.action)
            .map_err(|source| ReplayError::Rejected { seq: record.seq, source })?;
    }

    let final_state = game.begin_cycle();
    Ok(ReplayResult {
        final_state,
        final_snapshot_hash: game.snapshot_hash(),
        final_turn: game.current_turn(),
    })
}
