use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable view of a game handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub last_direction: Option<Direction>,
    pub score: Score,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn from_engine<S: TileSpawner>(engine: &PlayEngine<S>) -> Self {
        Self {
            grid: engine.grid().clone(),
            last_direction: engine.last_direction(),
            score: engine.score(),
            phase: engine.phase(),
        }
    }

    /// Checks the snapshot can be played with `config`.
    ///
    /// The grid must have the configured size and consistent cells, and the phase must be `Lost`
    /// exactly when no move is left.
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        let (rows, cols) = self.grid.cells().dim();
        let expected = usize::from(config.size);
        if rows != expected || cols != expected {
            return Err(GameError::InvalidGridShape);
        }
        if !self.grid.iter().all(|(_, cell)| cell.is_consistent()) {
            return Err(GameError::InvalidCell);
        }
        if (self.phase == Phase::Lost) == moves_available(&self.grid) {
            return Err(GameError::InvalidPhase);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_copies_state() {
        let mut engine = PlayEngine::with_seed(GameConfig::default(), 9).unwrap();
        let direction = engine.legal_directions()[0];
        engine.handle_direction(direction).unwrap();

        let snapshot = GameSnapshot::from_engine(&engine);

        assert_eq!(&snapshot.grid, engine.grid());
        assert_eq!(snapshot.last_direction, Some(direction));
        assert_eq!(snapshot.phase, Phase::Playing);
    }

    #[test]
    fn validate_rejects_size_mismatch() {
        let snapshot = GameSnapshot {
            grid: Grid::new(3),
            last_direction: None,
            score: 0,
            phase: Phase::Playing,
        };

        assert_eq!(
            snapshot.validate(&GameConfig::default()),
            Err(GameError::InvalidGridShape)
        );
        assert_eq!(snapshot.validate(&GameConfig::new(3, 144)), Ok(()));
    }

    #[test]
    fn validate_rejects_phase_contradicting_grid() {
        let mut snapshot = GameSnapshot {
            grid: Grid::from_array([[1, 1], [2, 3]]).unwrap(),
            last_direction: None,
            score: 0,
            phase: Phase::Lost,
        };
        let config = GameConfig::new(2, 144);

        assert_eq!(snapshot.validate(&config), Err(GameError::InvalidPhase));

        snapshot.grid = Grid::from_array([[1, 2], [2, 1]]).unwrap();
        assert_eq!(snapshot.validate(&config), Ok(()));
        snapshot.phase = Phase::Won;
        assert_eq!(snapshot.validate(&config), Err(GameError::InvalidPhase));
    }

    #[test]
    fn resume_rejects_tampered_json() {
        let snapshot = GameSnapshot {
            grid: Grid::from_array([[1, 0], [0, 0]]).unwrap(),
            last_direction: None,
            score: 0,
            phase: Phase::Playing,
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        let config = GameConfig::new(2, 144);

        let mut lost = json.clone();
        lost["phase"] = "Lost".into();
        let lost: GameSnapshot = serde_json::from_value(lost).unwrap();
        assert_eq!(
            PlayEngine::resume(config, lost, RandomTileSpawner::new(0)).err(),
            Some(GameError::InvalidPhase)
        );

        let mut valued_empty = json.clone();
        valued_empty["grid"]["cells"]["data"][1]["value"] = 5.into();
        assert!(serde_json::from_value::<GameSnapshot>(valued_empty).is_err());

        let mut empty_new = json;
        empty_new["grid"]["cells"]["data"][0] = serde_json::json!({"value": 0, "state": "New"});
        assert!(serde_json::from_value::<GameSnapshot>(empty_new).is_err());
    }

    #[test]
    fn serializes_to_json() {
        let engine = PlayEngine::with_seed(GameConfig::default(), 3).unwrap();
        let snapshot = engine.snapshot();

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, snapshot);
        assert!(json.contains("\"phase\":\"Playing\""));
    }
}
