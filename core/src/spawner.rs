use alloc::collections::BTreeSet;
use rand::prelude::*;

use crate::*;

/// Values a spawned tile may take.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpawnValues {
    /// Every new tile gets this value.
    Fixed(TileValue),
    /// Each new tile is one of the two values with equal odds.
    Either(TileValue, TileValue),
}

impl SpawnValues {
    fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> TileValue {
        match self {
            Self::Fixed(value) => value,
            Self::Either(a, b) => {
                if rng.random_bool(0.5) {
                    b
                } else {
                    a
                }
            }
        }
    }
}

/// Inserts new tiles into empty cells of a grid.
pub trait TileSpawner {
    /// Returns a copy of `grid` with `count` new tiles in distinct empty cells, each marked
    /// [`CellState::New`].
    ///
    /// Fails with [`GameError::SpawnCapacityExceeded`] when the grid has fewer than `count` empty
    /// cells, in which case nothing is spawned.
    fn spawn(&mut self, grid: &Grid, count: CellCount, values: SpawnValues) -> Result<Grid>;
}

/// Spawner choosing positions uniformly at random from a seeded generator, so a game can be
/// replayed from its seed.
#[derive(Clone, Debug)]
pub struct RandomTileSpawner {
    rng: SmallRng,
}

impl RandomTileSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomTileSpawner {
    fn spawn(&mut self, grid: &Grid, count: CellCount, values: SpawnValues) -> Result<Grid> {
        let empty_cells = grid.empty_cells();
        check_capacity(count, &empty_cells)?;

        let positions: BTreeSet<usize> = if count == 1 {
            BTreeSet::from([self.rng.random_range(0..empty_cells.len())])
        } else {
            // rejection sampling, redraw until enough distinct cells are taken
            let mut taken = BTreeSet::new();
            while taken.len() < usize::from(count) {
                let proposed = self.rng.random_range(0..empty_cells.len());
                if !taken.insert(proposed) {
                    log::trace!("Spawn position {:?} already taken", empty_cells[proposed]);
                }
            }
            taken
        };

        let mut grid = grid.clone();
        for index in positions {
            let coords = empty_cells[index];
            let value = values.pick(&mut self.rng);
            log::trace!("Spawn tile {} at {:?}", value, coords);
            grid = grid.with_cell(coords, Cell::spawned(value));
        }
        Ok(grid)
    }
}

/// Shared precondition of every spawner.
pub fn check_capacity(count: CellCount, empty_cells: &[Coord2]) -> Result<()> {
    let available = empty_cells.len().try_into().unwrap_or(CellCount::MAX);
    if count > available {
        log::warn!(
            "Cannot spawn {} tiles, only {} empty cells left",
            count,
            available
        );
        return Err(GameError::SpawnCapacityExceeded {
            requested: count,
            available,
        });
    }
    Ok(())
}
