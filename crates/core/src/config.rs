//! Immutable tuning values shared by the level generator and the turn engine.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

/// Smallest room side that still leaves a 2x2 interior for a trap, a monster,
/// and a staircase.
pub const MIN_ROOM_SIDE: i32 = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub min_rooms: i32,
    pub max_rooms: i32,
    /// Room width in cells, walls included.
    pub room_width: (i32, i32),
    /// Room height in cells, walls included.
    pub room_height: (i32, i32),
    pub min_separation: i32,
    pub trap_probability: f64,
    pub monster_probability: f64,
    pub regen_probability: f64,
    pub aggro_radius: i32,
    pub trap_damage: i32,
    pub player_damage: i32,
    pub player_max_hp: i32,
    pub placement_attempts: u32,
    pub layout_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 20,
            min_rooms: 3,
            max_rooms: 5,
            room_width: (6, 21),
            room_height: (6, 9),
            min_separation: 2,
            trap_probability: 0.5,
            monster_probability: 0.9,
            regen_probability: 0.05,
            aggro_radius: 15,
            trap_damage: 1,
            player_damage: 2,
            player_max_hp: 10,
            placement_attempts: 2_000,
            layout_attempts: 32,
        }
    }
}

impl GameConfig {
    pub fn room_count_range(&self) -> RangeInclusive<i32> {
        self.min_rooms..=self.max_rooms
    }

    pub fn room_width_range(&self) -> RangeInclusive<i32> {
        self.room_width.0..=self.room_width.1
    }

    pub fn room_height_range(&self) -> RangeInclusive<i32> {
        self.room_height.0..=self.room_height.1
    }

    /// Rejects configurations the generator could never satisfy, so a bad
    /// constant fails at startup instead of spinning in the placement loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_grid = MIN_ROOM_SIDE + 2 * self.min_separation.max(0);
        if self.width < min_grid || self.height < min_grid {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                min: min_grid,
            });
        }

        for (name, (min, max)) in [
            ("rooms", (self.min_rooms, self.max_rooms)),
            ("room_width", self.room_width),
            ("room_height", self.room_height),
        ] {
            if min > max {
                return Err(ConfigError::EmptyRange { name, min, max });
            }
        }

        if self.room_width.0 < MIN_ROOM_SIDE || self.room_height.0 < MIN_ROOM_SIDE {
            return Err(ConfigError::RoomTooSmall { min: MIN_ROOM_SIDE });
        }
        if self.min_rooms < 2 {
            return Err(ConfigError::TooFewRooms { min_rooms: self.min_rooms });
        }

        for (name, value) in [
            ("min_separation", i64::from(self.min_separation)),
            ("aggro_radius", i64::from(self.aggro_radius)),
            ("player_max_hp", i64::from(self.player_max_hp)),
            ("placement_attempts", i64::from(self.placement_attempts)),
            ("layout_attempts", i64::from(self.layout_attempts)),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("trap_probability", self.trap_probability),
            ("monster_probability", self.monster_probability),
            ("regen_probability", self.regen_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }

        // Bordered rooms may not share border cells, so the cheapest packing
        // is a single row or column of minimum-size rooms.
        let sep = self.min_separation;
        let footprint_w = self.room_width.0 + 2 * sep;
        let footprint_h = self.room_height.0 + 2 * sep;
        let per_row = self.width / footprint_w;
        let per_column = self.height / footprint_h;
        if per_row * per_column < self.min_rooms {
            return Err(ConfigError::RoomsDoNotFit {
                min_rooms: self.min_rooms,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rooms_wider_than_the_grid_are_a_configuration_error() {
        let config = GameConfig { room_width: (90, 100), ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::RoomsDoNotFit { .. })));
    }

    #[test]
    fn single_room_levels_cannot_hold_both_staircases() {
        let config = GameConfig { min_rooms: 1, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::TooFewRooms { min_rooms: 1 }));
    }

    #[test]
    fn probabilities_outside_unit_interval_are_rejected() {
        let config = GameConfig { regen_probability: 1.5, ..GameConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidProbability { name: "regen_probability", .. })
        ));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let config = GameConfig { room_height: (9, 6), ..GameConfig::default() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyRange { name: "room_height", min: 9, max: 6 })
        );
    }
}
