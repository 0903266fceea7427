use serde::{Deserialize, Serialize};

use crate::{GameError, TileValue};

/// Per-move annotation for the presentation layer, it has no meaning for game logic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    /// Spawned after the last committed move.
    New,
    /// Produced by a merge during the last committed move.
    Merged,
    /// Carried over unchanged (possibly slid).
    Static,
}

impl Default for CellState {
    fn default() -> Self {
        Self::Empty
    }
}

/// Canonical content of a grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    value: TileValue,
    state: CellState,
}

#[derive(Deserialize)]
struct RawCell {
    value: TileValue,
    state: CellState,
}

impl TryFrom<RawCell> for Cell {
    type Error = GameError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        let cell = Self {
            value: raw.value,
            state: raw.state,
        };
        if cell.is_consistent() {
            Ok(cell)
        } else {
            Err(GameError::InvalidCell)
        }
    }
}

impl Cell {
    pub const EMPTY: Self = Self {
        value: 0,
        state: CellState::Empty,
    };

    /// A tile carried over by a move, zero yields an empty cell.
    pub const fn fixed(value: TileValue) -> Self {
        Self::with_state(value, CellState::Static)
    }

    pub const fn merged(value: TileValue) -> Self {
        Self::with_state(value, CellState::Merged)
    }

    pub const fn spawned(value: TileValue) -> Self {
        Self::with_state(value, CellState::New)
    }

    const fn with_state(value: TileValue, state: CellState) -> Self {
        if value == 0 {
            Self::EMPTY
        } else {
            Self { value, state }
        }
    }

    pub const fn value(self) -> TileValue {
        self.value
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    pub const fn is_empty(self) -> bool {
        self.value == 0
    }

    /// Exactly the cells without a value are in the `Empty` state.
    pub const fn is_consistent(self) -> bool {
        self.is_empty() == matches!(self.state, CellState::Empty)
    }
}
