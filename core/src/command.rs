use serde::{Deserialize, Serialize};

use crate::Direction;

/// Input a UI sends to the engine, see [`crate::PlayEngine::dispatch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    /// Reset to a freshly seeded grid.
    NewGame,
    /// Resume play from the win pause.
    ContinuePastWin,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Self::Move(direction)
    }
}
