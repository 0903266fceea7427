use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid must be square and match the configured size")]
    InvalidGridShape,
    #[error("Cannot spawn {requested} tiles, only {available} empty cells")]
    SpawnCapacityExceeded {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Cell state does not match its value")]
    InvalidCell,
    #[error("Phase does not match the grid")]
    InvalidPhase,
    #[error("Game is not paused on a win")]
    NotPaused,
}

pub type Result<T> = core::result::Result<T, GameError>;
