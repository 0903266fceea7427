/// Single coordinate axis used for grid size and positions.
pub type Coord = u8;

/// Count type used for empty-cell and spawn counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Value carried by a tile, `0` means the cell is empty.
pub type TileValue = u32;

/// Accumulated score of a game.
pub type Score = u64;

/// Grids are stored row-major, so `(x, y)` maps to the `[y, x]` ndarray index.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}
