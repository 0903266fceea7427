use fibtile_core::*;
use proptest::prelude::*;

fn arb_value() -> impl Strategy<Value = TileValue> {
    prop_oneof![
        3 => Just(0),
        1 => Just(1),
        1 => Just(2),
        1 => Just(3),
        1 => Just(5),
        1 => Just(8),
    ]
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(prop::array::uniform4(arb_value()))
        .prop_map(|rows| Grid::from_array(rows).expect("4x4 grid is square"))
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

/// Mirror of a horizontal direction onto the vertical axis.
fn vertical_counterpart(direction: Direction) -> Direction {
    match direction {
        Direction::Left => Direction::Up,
        Direction::Right => Direction::Down,
        other => other,
    }
}

proptest! {
    #[test]
    fn vertical_moves_equal_transposed_horizontal_moves(
        grid in arb_grid(),
        horizontal in prop::sample::select(vec![Direction::Left, Direction::Right])
    ) {
        let vertical = resolve(&grid, vertical_counterpart(horizontal));
        let transposed = resolve(&grid.transposed(), horizontal);

        prop_assert_eq!(&vertical.grid, &transposed.grid.transposed());
        prop_assert_eq!(vertical.gained, transposed.gained);
    }

    #[test]
    fn merges_account_for_every_value_change(grid in arb_grid(), direction in arb_direction()) {
        let resolution = resolve(&grid, direction);

        prop_assert!(resolution.grid.max_value() >= grid.max_value());
        prop_assert_eq!(
            resolution.grid.total_value() + merged_inputs(&resolution.grid),
            grid.total_value() + resolution.gained
        );
    }

    #[test]
    fn resolving_is_stable_once_fixed(grid in arb_grid(), direction in arb_direction()) {
        let first = resolve(&grid, direction);
        let second = resolve(&first.grid, direction);

        if first.grid.same_values(&grid) {
            prop_assert!(second.grid.same_values(&grid));
            prop_assert_eq!(first.gained, 0);
        }
        if second.gained == 0 {
            prop_assert!(second.grid.same_values(&first.grid));
        }
    }

    #[test]
    fn resolving_keeps_tiles_packed(grid in arb_grid(), direction in arb_direction()) {
        let resolution = resolve(&grid, direction);

        prop_assert!(resolution.grid.empty_count() >= grid.empty_count());
        prop_assert_eq!(
            resolution.grid.empty_count() - grid.empty_count(),
            merges(&resolution.grid)
        );
    }

    #[test]
    fn dead_grids_have_no_legal_directions(grid in arb_grid()) {
        if !moves_available(&grid) {
            prop_assert!(legal_directions(&grid).is_empty());
        } else if !grid.has_empty() {
            prop_assert!(!legal_directions(&grid).is_empty());
        }
    }

    #[test]
    fn no_op_moves_leave_engine_untouched(seed in any::<u64>(), direction in arb_direction()) {
        let mut engine = PlayEngine::with_seed(GameConfig::default(), seed).unwrap();
        let before = engine.snapshot();
        let legal = engine.legal_directions().contains(&direction);

        let outcome = engine.handle_direction(direction).unwrap();

        if legal {
            prop_assert!(outcome.has_update());
            prop_assert_eq!(
                engine.grid().empty_count() + 1,
                before.grid.empty_count() + merges(engine.grid())
            );
        } else {
            prop_assert_eq!(outcome, MoveOutcome::NoChange);
            prop_assert_eq!(engine.snapshot(), before);
        }
    }
}

/// Sum of the two source tiles behind every merged tile.
fn merged_inputs(grid: &Grid) -> u64 {
    grid.iter()
        .filter(|(_, cell)| cell.state() == CellState::Merged)
        .map(|(_, cell)| {
            let source = values_from(1)
                .take_while(|&value| next_value(value) <= cell.value())
                .find(|&value| next_value(value) == cell.value())
                .expect("merged values are sequence values");
            2 * u64::from(source)
        })
        .sum()
}

fn merges(grid: &Grid) -> u16 {
    grid.iter()
        .filter(|(_, cell)| cell.state() == CellState::Merged)
        .count() as u16
}

#[test]
fn new_game_has_two_unit_tiles() {
    for seed in 0..32 {
        let engine = PlayEngine::with_seed(GameConfig::default(), seed).unwrap();

        let ones = engine.grid().iter().filter(|(_, cell)| cell.value() == 1).count();
        assert_eq!(ones, 2, "seed {seed}");
        assert_eq!(engine.empty_count(), 14, "seed {seed}");
        assert!(
            engine
                .grid()
                .iter()
                .all(|(_, cell)| matches!(cell.state(), CellState::New | CellState::Empty))
        );
    }
}

#[test]
fn lost_phase_tracks_dead_grid_during_play() {
    let mut engine = PlayEngine::with_seed(GameConfig::default(), 2024).unwrap();
    let mut previous_score = 0;

    for _ in 0..10_000 {
        let Some(&direction) = engine.legal_directions().first() else {
            break;
        };
        engine.handle_direction(direction).unwrap();

        assert!(engine.score() >= previous_score);
        assert_eq!(engine.phase() == Phase::Lost, !moves_available(engine.grid()));
        previous_score = engine.score();
        if engine.phase() == Phase::Won {
            engine.continue_past_win().unwrap();
        }
    }
}
