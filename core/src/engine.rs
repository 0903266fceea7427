use crate::*;

/// Owns the grid and drives one game: resolve, commit, spawn, then evaluate the phase.
///
/// Every input runs to completion before returning, callers only need to serialize their calls.
#[derive(Clone, Debug)]
pub struct PlayEngine<S = RandomTileSpawner> {
    config: GameConfig,
    grid: Grid,
    score: Score,
    phase: Phase,
    last_direction: Option<Direction>,
    spawner: S,
}

impl PlayEngine<RandomTileSpawner> {
    /// New game using the random spawner seeded with `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomTileSpawner::new(seed))
    }
}

impl<S: TileSpawner> PlayEngine<S> {
    pub fn new(config: GameConfig, spawner: S) -> Result<Self> {
        let config = config.clamped();
        let mut engine = Self {
            config,
            grid: Grid::new(config.size),
            score: 0,
            phase: Phase::Playing,
            last_direction: None,
            spawner,
        };
        engine.new_game()?;
        Ok(engine)
    }

    /// Continues from an existing grid with a zero score.
    pub fn from_grid(config: GameConfig, grid: Grid, spawner: S) -> Result<Self> {
        let phase = if moves_available(&grid) {
            Phase::Playing
        } else {
            Phase::Lost
        };
        Self::resume(
            config,
            GameSnapshot {
                grid,
                last_direction: None,
                score: 0,
                phase,
            },
            spawner,
        )
    }

    /// Restores a game from a snapshot taken earlier.
    pub fn resume(config: GameConfig, snapshot: GameSnapshot, spawner: S) -> Result<Self> {
        let config = config.clamped();
        snapshot.validate(&config)?;
        log::debug!(
            "Resume game at score {} in phase {:?}",
            snapshot.score,
            snapshot.phase
        );
        Ok(Self {
            config,
            grid: snapshot.grid,
            score: snapshot.score,
            phase: snapshot.phase,
            last_direction: snapshot.last_direction,
            spawner,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Largest tile on the grid.
    pub fn max_tile(&self) -> TileValue {
        self.grid.max_value()
    }

    pub fn empty_count(&self) -> CellCount {
        self.grid.empty_count()
    }

    /// Directions that would currently be committed, empty unless moves are accepted.
    pub fn legal_directions(&self) -> alloc::vec::Vec<Direction> {
        if self.phase.accepts_moves() {
            legal_directions(&self.grid)
        } else {
            alloc::vec::Vec::new()
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }

    /// Single synchronous entry point for a UI, returns the state to render.
    pub fn dispatch(&mut self, command: Command) -> Result<GameSnapshot> {
        match command {
            Command::Move(direction) => {
                self.handle_direction(direction)?;
            }
            Command::NewGame => self.new_game()?,
            Command::ContinuePastWin => self.continue_past_win()?,
        }
        Ok(self.snapshot())
    }

    /// Throws away the current game and seeds a fresh grid.
    pub fn new_game(&mut self) -> Result<()> {
        let grid = self.spawner.spawn(
            &Grid::new(self.config.size),
            self.config.initial_tiles,
            SpawnValues::Fixed(self.config.initial_value),
        )?;

        self.phase = if moves_available(&grid) {
            Phase::Playing
        } else {
            Phase::Lost
        };
        self.grid = grid;
        self.score = 0;
        self.last_direction = None;
        log::debug!("New game on a {0}x{0} grid", self.config.size);
        Ok(())
    }

    /// Leaves the win pause, later spawns follow the late spawn policy.
    pub fn continue_past_win(&mut self) -> Result<()> {
        if !self.phase.is_paused() {
            return Err(GameError::NotPaused);
        }
        self.set_phase(Phase::WonContinuing);
        Ok(())
    }

    /// Resolves one move.
    ///
    /// Moves that leave every value in place are ignored, nothing spawns and the phase stays. At most
    /// as many tiles spawn as the move left empty cells, a crowded grid then ends up `Lost`. On a
    /// spawn failure the engine keeps its previous state.
    pub fn handle_direction(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if !self.phase.accepts_moves() {
            log::trace!("Ignore {} while {:?}", direction, self.phase);
            return Ok(MoveOutcome::NoChange);
        }

        let resolution = resolve(&self.grid, direction);
        if resolution.grid.same_values(&self.grid) {
            log::trace!("Move {} changes nothing", direction);
            return Ok(MoveOutcome::NoChange);
        }

        // a committed move leaves at least one empty cell
        let count = self
            .config
            .tiles_per_round
            .min(resolution.grid.empty_count());
        let grid = self.spawner.spawn(
            &resolution.grid,
            count,
            self.config.spawn_values(self.phase),
        )?;
        let phase = next_phase(
            self.phase,
            &resolution,
            &grid,
            self.config.winning_value,
        );

        self.grid = grid;
        self.score = self.score.saturating_add(resolution.gained);
        self.last_direction = Some(direction);
        log::debug!(
            "Move {} gained {}, score {}",
            direction,
            resolution.gained,
            self.score
        );
        self.set_phase(phase);

        Ok(match phase {
            Phase::Won => MoveOutcome::Won,
            Phase::Lost => MoveOutcome::Lost,
            Phase::Playing | Phase::WonContinuing => MoveOutcome::Moved,
        })
    }

    fn set_phase(&mut self, phase: Phase) {
        if phase != self.phase {
            log::debug!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
