use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - Won -> WonContinuing
/// - WonContinuing -> Lost
///
/// Any phase goes back to Playing through a new game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    /// The winning tile was reached, play is paused until the player decides.
    Won,
    /// The player kept going after winning.
    WonContinuing,
    /// No move can change the grid anymore.
    Lost,
}

impl Phase {
    /// Whether direction input is resolved in this phase.
    pub const fn accepts_moves(self) -> bool {
        matches!(self, Self::Playing | Self::WonContinuing)
    }

    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost)
    }

    /// Phases the presentation layer covers with an overlay.
    pub const fn shows_overlay(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Playing
    }
}

/// Whether two orthogonally adjacent tiles share a value.
///
/// Moves only ever bring tiles next to each other, so adjacency is the only match that matters.
pub fn matches_available(grid: &Grid) -> bool {
    grid.adjacent_pairs()
        .any(|(a, b)| !a.is_empty() && a.value() == b.value())
}

/// Whether at least one direction would change the grid.
pub fn moves_available(grid: &Grid) -> bool {
    grid.has_empty() || matches_available(grid)
}

/// Directions whose resolution would be committed.
pub fn legal_directions(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| !resolve(grid, direction).grid.same_values(grid))
        .collect()
}

/// Phase after a committed move.
///
/// `resolution` is the merge result before spawning, `grid` the grid after spawning. A dead grid
/// takes priority over a win reached on the same move.
pub fn next_phase(
    phase: Phase,
    resolution: &Resolution,
    grid: &Grid,
    winning_value: TileValue,
) -> Phase {
    if !phase.accepts_moves() {
        return phase;
    }

    if !moves_available(grid) {
        Phase::Lost
    } else if phase == Phase::Playing && resolution.produced(winning_value) {
        Phase::Won
    } else {
        phase
    }
}
