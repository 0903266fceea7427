use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::*;

/// Square, fully populated matrix of cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    cells: Array2<Cell>,
}

#[derive(Deserialize)]
struct RawGrid {
    cells: Array2<Cell>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    fn try_from(raw: RawGrid) -> Result<Self> {
        let (rows, cols) = raw.cells.dim();
        if rows == 0 || rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidGridShape);
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Grid {
    /// All-empty grid of `size` by `size` cells.
    pub fn new(size: Coord) -> Self {
        let size = usize::from(size.max(1));
        Self {
            cells: Array2::from_elem([size, size], Cell::EMPTY),
        }
    }

    /// Builds a grid from rows of raw values, top row first.
    ///
    /// Non-zero values become static tiles, zeros become empty cells.
    pub fn from_rows<R: AsRef<[TileValue]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        if size == 0 || size > usize::from(Coord::MAX) {
            return Err(GameError::InvalidGridShape);
        }

        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::InvalidGridShape);
            }
            cells.extend(row.iter().map(|&value| Cell::fixed(value)));
        }

        let cells =
            Array2::from_shape_vec([size, size], cells).map_err(|_| GameError::InvalidGridShape)?;
        Ok(Self { cells })
    }

    /// Fixed-size variant of [`Grid::from_rows`].
    pub fn from_array<const N: usize>(rows: [[TileValue; N]; N]) -> Result<Self> {
        Self::from_rows(&rows)
    }

    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        debug_assert_eq!(cells.nrows(), cells.ncols(), "grid must be square");
        Self { cells }
    }

    /// Number of cells along one side.
    pub fn size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Cell at `coords`, which must be in bounds.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[coords.to_nd_index()]
    }

    /// Checked variant of [`Grid::cell_at`].
    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cell_at(coords))
    }

    pub fn value_at(&self, coords: Coord2) -> TileValue {
        self.cell_at(coords).value()
    }

    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Rows from top to bottom, each from left to right.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.axis_iter(Axis(0))
    }

    /// All cells with their `(x, y)` coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    /// Raw values, `0` for empty cells.
    pub fn values(&self) -> Array2<TileValue> {
        self.cells.map(|cell| cell.value())
    }

    /// Cell-by-cell value comparison, display states are ignored.
    pub fn same_values(&self, other: &Grid) -> bool {
        self.cells.dim() == other.cells.dim()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| a.value() == b.value())
    }

    pub fn empty_cells(&self) -> Vec<Coord2> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coords, _)| coords)
            .collect()
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_empty())
    }

    pub fn max_value(&self) -> TileValue {
        self.cells.iter().map(|cell| cell.value()).max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn total_value(&self) -> u64 {
        self.cells.iter().map(|cell| u64::from(cell.value())).sum()
    }

    /// Mirrors the grid over its main diagonal, columns become rows.
    pub fn transposed(&self) -> Grid {
        Self {
            cells: self.cells.t().as_standard_layout().into_owned(),
        }
    }

    /// Copy of the grid with `cell` placed at `coords`.
    pub(crate) fn with_cell(&self, coords: Coord2, cell: Cell) -> Grid {
        let mut cells = self.cells.clone();
        cells[coords.to_nd_index()] = cell;
        Self { cells }
    }

    /// Orthogonally adjacent cell pairs, along every row and then down every column.
    pub(crate) fn adjacent_pairs(&self) -> impl Iterator<Item = (&Cell, &Cell)> + '_ {
        self.cells
            .axis_iter(Axis(0))
            .chain(self.cells.axis_iter(Axis(1)))
            .flat_map(|line| line.into_iter().zip(line.into_iter().skip(1)))
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
