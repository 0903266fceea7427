use serde::{Deserialize, Serialize};

/// Axis and sense of a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Vertical moves are resolved on the transposed grid.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Whether tiles travel toward the higher index of their line.
    pub const fn toward_end(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    pub const fn name(self) -> &'static str {
        use Direction::*;
        match self {
            Left => "Left",
            Right => "Right",
            Up => "Up",
            Down => "Down",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
