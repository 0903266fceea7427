use ndarray::{Array2, ArrayView1, Axis};
use smallvec::SmallVec;

use crate::*;

/// Line buffer, grids up to 8 wide never touch the heap.
type Line = SmallVec<[Cell; 8]>;

/// Grid produced by a move together with the points it earned.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolution {
    pub grid: Grid,
    pub gained: Score,
}

impl Resolution {
    /// Whether any merge in this move produced exactly `value`.
    pub fn produced(&self, value: TileValue) -> bool {
        self.grid
            .iter()
            .any(|(_, cell)| cell.state() == CellState::Merged && cell.value() == value)
    }
}

/// Slides and merges every line of `grid` toward `direction`.
///
/// The input is left untouched, surviving tiles are marked [`CellState::Static`] and merge results
/// [`CellState::Merged`]. Vertical moves are resolved as horizontal ones on the transposed grid.
pub fn resolve(grid: &Grid, direction: Direction) -> Resolution {
    if direction.is_vertical() {
        let (rows, gained) = resolve_rows(&grid.transposed(), direction.toward_end());
        Resolution {
            grid: rows.transposed(),
            gained,
        }
    } else {
        let (grid, gained) = resolve_rows(grid, direction.toward_end());
        Resolution { grid, gained }
    }
}

fn resolve_rows(grid: &Grid, toward_end: bool) -> (Grid, Score) {
    let mut cells = Array2::from_elem(grid.cells().dim(), Cell::EMPTY);
    let mut gained = 0;

    for (row, mut target) in grid.rows().zip(cells.axis_iter_mut(Axis(0))) {
        let (line, line_gained) = merge_line(row, toward_end);
        for (dst, src) in target.iter_mut().zip(line) {
            *dst = src;
        }
        gained += line_gained;
    }

    (Grid::from_cells(cells), gained)
}

/// Row-merge primitive.
///
/// Scans in the direction of travel; each tile looks past empty cells for its next tile and merges
/// with it when the values match. The partner is consumed by the jump of the scan index, so a tile
/// takes part in at most one merge per move.
fn merge_line(source: ArrayView1<'_, Cell>, toward_end: bool) -> (Line, Score) {
    let len = source.len();
    // position `i` in travel order maps to index `at(i)` in the line
    let at = |i: usize| if toward_end { len - 1 - i } else { i };

    let mut line: Line = SmallVec::from_elem(Cell::EMPTY, len);
    let mut gained = 0;
    let mut cursor = 0;
    let mut i = 0;

    while i < len {
        let value = source[at(i)].value();
        if value == 0 {
            i += 1;
            continue;
        }

        let mut j = 1;
        while i + j < len && source[at(i + j)].is_empty() {
            j += 1;
        }

        if i + j < len && source[at(i + j)].value() == value {
            let merged = next_value(value);
            line[at(cursor)] = Cell::merged(merged);
            gained += Score::from(merged);
            i += j;
        } else {
            line[at(cursor)] = Cell::fixed(value);
        }

        cursor += 1;
        i += 1;
    }

    (line, gained)
}
