//! Grid engine of a sliding-tile merge puzzle where equal tiles combine along the golden-ratio
//! sequence 1, 2, 3, 5, 8, ... instead of doubling.
//!
//! The engine is a pure state machine: a UI feeds it [`Command`]s and renders the
//! [`GameSnapshot`] it returns.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use command::*;
pub use detector::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use resolver::*;
pub use sequence::*;
pub use snapshot::*;
pub use spawner::*;
pub use tile::*;
pub use types::*;

pub mod palette;

mod command;
mod detector;
mod direction;
mod engine;
mod error;
mod grid;
mod resolver;
mod sequence;
mod snapshot;
mod spawner;
mod tile;
mod types;

/// What tiles spawn after the player chose to keep going past a win.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateSpawnPolicy {
    /// Keep spawning the initial value.
    Fixed,
    /// Spawn the initial value or its successor with equal odds.
    Varied,
}

impl Default for LateSpawnPolicy {
    fn default() -> Self {
        Self::Varied
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells along one side of the square grid.
    pub size: Coord,
    /// Merging into this value pauses the game as a win.
    pub winning_value: TileValue,
    /// Value of spawned tiles.
    pub initial_value: TileValue,
    /// Tiles seeded on a new game.
    pub initial_tiles: CellCount,
    /// Tiles spawned after each committed move.
    pub tiles_per_round: CellCount,
    pub late_spawn: LateSpawnPolicy,
}

impl GameConfig {
    pub const MAX_SIZE: Coord = 16;

    pub const fn new_unchecked(size: Coord, winning_value: TileValue) -> Self {
        Self {
            size,
            winning_value,
            initial_value: 1,
            initial_tiles: 2,
            tiles_per_round: 1,
            late_spawn: LateSpawnPolicy::Varied,
        }
    }

    pub fn new(size: Coord, winning_value: TileValue) -> Self {
        Self::new_unchecked(size, winning_value).clamped()
    }

    pub const fn with_late_spawn(mut self, late_spawn: LateSpawnPolicy) -> Self {
        self.late_spawn = late_spawn;
        self
    }

    /// Brings every field into a playable range, used for configs coming from outside.
    pub fn clamped(self) -> Self {
        let size = self.size.clamp(1, Self::MAX_SIZE);
        let total = mult(size, size);
        let initial_value = self.initial_value.max(1);
        let winning_value = self.winning_value.max(next_value(initial_value));
        if !is_sequence_value(winning_value, initial_value) {
            log::warn!(
                "Winning value {} is not reachable from {}, the game can never be won",
                winning_value,
                initial_value
            );
        }

        let clamped = Self {
            size,
            winning_value,
            initial_value,
            initial_tiles: self.initial_tiles.clamp(1, total),
            tiles_per_round: self.tiles_per_round.clamp(1, total),
            late_spawn: self.late_spawn,
        };
        if clamped != self {
            log::warn!("Config clamped from {:?} to {:?}", self, clamped);
        }
        clamped
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Spawn values for tiles inserted while in `phase`.
    pub fn spawn_values(&self, phase: Phase) -> SpawnValues {
        match (phase, self.late_spawn) {
            (Phase::WonContinuing, LateSpawnPolicy::Varied) => {
                SpawnValues::Either(self.initial_value, next_value(self.initial_value))
            }
            _ => SpawnValues::Fixed(self.initial_value),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(4, 144)
    }
}

/// Outcome of a direction input
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing moved, or moves are not accepted right now
    NoChange,
    Moved,
    /// Moved and reached the winning tile
    Won,
    /// Moved and no further move is possible
    Lost,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_classic_game() {
        let config = GameConfig::default();

        assert_eq!(config.size, 4);
        assert_eq!(config.winning_value, 144);
        assert_eq!(config.initial_value, 1);
        assert_eq!(config.initial_tiles, 2);
        assert_eq!(config.tiles_per_round, 1);
        assert_eq!(config.clamped(), config);
    }

    #[test]
    fn new_clamps_out_of_range_values() {
        let config = GameConfig::new(0, 1);

        assert_eq!(config.size, 1);
        assert_eq!(config.winning_value, 2);
        assert_eq!(config.initial_tiles, 1);
        assert_eq!(GameConfig::new(200, 144).size, GameConfig::MAX_SIZE);
    }

    #[test]
    fn late_spawns_vary_only_after_continuing() {
        let config = GameConfig::default();

        assert_eq!(config.spawn_values(Phase::Playing), SpawnValues::Fixed(1));
        assert_eq!(
            config.spawn_values(Phase::WonContinuing),
            SpawnValues::Either(1, 2)
        );
        assert_eq!(
            config
                .with_late_spawn(LateSpawnPolicy::Fixed)
                .spawn_values(Phase::WonContinuing),
            SpawnValues::Fixed(1)
        );
    }

    #[test]
    fn outcome_updates() {
        assert!(!MoveOutcome::NoChange.has_update());
        assert!(MoveOutcome::Moved.has_update());
        assert!(MoveOutcome::Lost.has_update());
    }
}
