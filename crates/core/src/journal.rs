use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::types::Action;

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Every action the engine accepted during a run, in order. Together with the
/// seed and config this is enough to rebuild the run exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub seed: u64,
    pub config: GameConfig,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    pub action: Action,
}

impl InputJournal {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self { format_version: JOURNAL_FORMAT_VERSION, seed, config, inputs: Vec::new() }
    }

    /// Records `action` with the next sequence number.
    pub fn append_action(&mut self, action: Action) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, action });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn journal_survives_a_json_round_trip() {
        let mut journal = InputJournal::new(42, GameConfig::default());
        journal.append_action(Action::Move(Direction::Left));
        journal.append_action(Action::Descend);
        journal.append_action(Action::Quit);

        let json = serde_json::to_string(&journal).expect("serialize journal");
        let restored: InputJournal = serde_json::from_str(&json).expect("parse journal");

        assert_eq!(restored, journal);
        assert_eq!(restored.inputs[1], InputRecord { seq: 1, action: Action::Descend });
    }
}
