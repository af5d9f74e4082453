// Public API tests: invariants over long seeded games, slide and merge
// results on small boards, end-of-game status and input validation.

use std::collections::HashSet;

use model::{Board, BoardError, Direction, GameConfig, GameStatus, Origin, Position};
use ndarray::Array2;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn from_values(rows: usize, columns: usize, values: Vec<u32>) -> Board<StepRng> {
    let array = Array2::from_shape_vec((rows, columns), values).unwrap();
    Board::from_array(array, GameConfig::default(), StepRng::new(0, 0)).unwrap()
}

fn assert_invariants<R>(board: &Board<R>) {
    let mut seen = HashSet::new();
    for (_, tile) in board.tiles() {
        let position = tile.position();
        assert!(position.x < board.columns() && position.y < board.rows(), "{:?}", position);
        assert!(seen.insert(position), "two tiles at {:?}", position);
        assert!(tile.value() >= 2 && tile.value().is_power_of_two());
        assert!(!tile.merged_this_turn());
    }
    let snapshot = board.snapshot();
    assert_eq!(snapshot.dim(), (board.rows(), board.columns()));
    for (index, cell) in snapshot.indexed_iter() {
        let position = Position::new(index.1, index.0);
        match cell {
            Some(view) => {
                assert_eq!(view.position, position);
                assert_eq!(board.tile(view.id).map(|t| t.value()), Some(view.value));
            }
            None => assert!(!seen.contains(&position)),
        }
    }
    assert_eq!(snapshot.iter().filter(|cell| cell.is_some()).count(), board.tile_count());
}

#[test]
fn random_games_keep_invariants() {
    init_logger();
    for seed in 0..20 {
        let config = GameConfig::new(3 + (seed as usize % 3), 4);
        let mut board = Board::with_config(config, StdRng::seed_from_u64(seed)).unwrap();
        let mut moves = StdRng::seed_from_u64(seed + 1000);
        assert_invariants(&board);
        for _ in 0..400 {
            if board.is_game_over() {
                break;
            }
            let direction = Direction::ALL[moves.gen_range(0..4)];
            let before = board.to_array();
            let count = board.tile_count();
            let outcome = board.swipe(direction);
            assert_invariants(&board);
            if outcome.changed {
                let spawned = outcome.spawned.unwrap();
                let tile = board.tile_at(spawned).unwrap();
                assert_eq!(tile.origin(), Origin::Appear);
                assert!(tile.value() == 2 || tile.value() == 4);
                assert_eq!(
                    board.tiles().filter(|(_, t)| t.origin() == Origin::Appear).count(),
                    1
                );
                assert_eq!(board.tile_count(), count - outcome.merges + 1);
            } else {
                assert_eq!(outcome.merges, 0);
                assert_eq!(outcome.spawned, None);
                assert_eq!(board.to_array(), before);
            }
        }
    }
}

#[test]
fn sum_of_values_grows_by_spawn() {
    let mut board = Board::with_config(GameConfig::default(), StdRng::seed_from_u64(31)).unwrap();
    for direction in Direction::ALL.iter().cycle().take(200) {
        let before: u32 = board.to_array().sum();
        let outcome = board.swipe(*direction);
        let after: u32 = board.to_array().sum();
        match outcome.spawned {
            Some(position) => {
                let spawned = board.tile_at(position).unwrap().value();
                assert_eq!(after, before + spawned);
            }
            None => assert_eq!(after, before),
        }
    }
}

#[test]
fn single_tile_reaches_edge_once() {
    let mut board = from_values(3, 3, vec![0, 0, 0, 0, 2, 0, 0, 0, 0]);
    assert!(board.can_swipe(Direction::Down));
    let outcome = board.swipe(Direction::Down);
    assert!(outcome.changed);
    assert_eq!(board.tile_at(Position::new(1, 2)).unwrap().value(), 2);
    assert!(board.tile_at(Position::new(1, 1)).is_none());

    let mut board = from_values(1, 2, vec![2, 4]);
    assert!(!board.can_swipe(Direction::Left));
    assert!(!board.swipe(Direction::Left).changed);
    assert_eq!(board.tile_count(), 2);
}

#[test]
fn pair_merges_and_blocks_third() {
    let mut board = from_values(1, 4, vec![2, 2, 4, 0]);
    let outcome = board.swipe(Direction::Left);
    assert!(outcome.changed);
    assert_eq!(outcome.merges, 1);
    assert_eq!(outcome.spawned, Some(Position::new(2, 0)));
    let values: Vec<u32> = board.to_array().iter().copied().collect();
    assert_eq!(values, vec![4, 4, 2, 0]);

    let mut board = from_values(4, 1, vec![0, 4, 4, 8]);
    let outcome = board.swipe(Direction::Down);
    assert_eq!(outcome.merges, 1);
    let values: Vec<u32> = board.to_array().iter().copied().collect();
    assert_eq!(values, vec![2, 0, 8, 8]);
}

#[test]
fn spawn_may_use_a_cell_vacated_this_turn() {
    let mut board = from_values(1, 2, vec![0, 2]);
    let outcome = board.swipe(Direction::Left);
    assert_eq!(outcome.spawned, Some(Position::new(1, 0)));
    let spawned = board.tile_at(Position::new(1, 0)).unwrap();
    assert_eq!(spawned.origin(), Origin::Appear);
    assert_eq!(
        board.tile_at(Position::new(0, 0)).unwrap().origin(),
        Origin::Moved {
            from: Position::new(1, 0)
        }
    );
}

#[test]
fn largest_values_are_accepted_but_never_overflow() {
    let top = 1u32 << 31;
    let mut board = from_values(1, 3, vec![top, top, 0]);
    assert!(!board.swipe(Direction::Left).changed);
    assert!(board.swipe(Direction::Right).changed);
    assert!(board.tiles().all(|(_, tile)| tile.value().is_power_of_two()));
    assert_eq!(board.max_value(), Some(top));
}

#[test]
fn game_over_on_locked_board() {
    let mut board = from_values(2, 2, vec![2, 4, 4, 2]);
    assert!(board.is_game_over());
    assert!(!board.has_winning_tile());
    assert_eq!(board.status(), GameStatus::Lost);
    assert!(!board.swipe(Direction::Up).changed);
    assert_eq!(board.tile_count(), 4);
}

#[test]
fn winning_tile_regardless_of_fullness() {
    let mut board = from_values(2, 3, vec![1024, 1024, 0, 0, 0, 0]);
    assert!(!board.has_winning_tile());
    board.swipe(Direction::Left);
    assert!(board.has_winning_tile());
    assert_eq!(board.status(), GameStatus::Won);
    assert!(!board.is_full());

    let board = from_values(1, 2, vec![2048, 4]);
    assert!(board.is_full());
    assert!(board.has_winning_tile());
}

#[test]
fn custom_win_value() {
    let array = Array2::from_shape_vec((1, 3), vec![32, 32, 0]).unwrap();
    let config = GameConfig::default().with_win_value(64);
    let mut board = Board::from_array(array, config, StepRng::new(0, 0)).unwrap();
    assert_eq!(board.status(), GameStatus::Playing);
    board.swipe(Direction::Right);
    assert_eq!(board.status(), GameStatus::Won);
}

#[test]
fn invalid_direction_changes_nothing() {
    let mut board = from_values(2, 2, vec![2, 0, 0, 2]);
    let before = board.snapshot();
    assert_eq!(board.swipe_index(9), Err(BoardError::InvalidDirection(9)));
    assert_eq!(board.snapshot(), before);
    assert!(!board.moved_this_turn());
}

#[test]
fn construction_errors() {
    assert!(matches!(Board::new(0, 4), Err(BoardError::InvalidConfig(_))));
    assert!(matches!(
        Board::from_config(GameConfig::new(1, 1)),
        Err(BoardError::InvalidConfig(_))
    ));
    assert!(matches!(
        Board::new(usize::MAX, 2),
        Err(BoardError::InvalidConfig(_))
    ));
    let board = Board::new(4, 4).unwrap();
    assert_eq!(board.tile_count(), 2);
    assert_eq!(board.empty_cells().len(), 14);
    let error = BoardError::OutOfBounds {
        x: 5,
        y: 1,
        columns: 4,
        rows: 4,
    };
    assert_eq!(error.to_string(), "position (5, 1) is outside the 4x4 board");
}

#[cfg(feature = "serde")]
#[test]
fn config_from_json() {
    let config: GameConfig = serde_json::from_str(r#"{"rows": 5, "columns": 6}"#).unwrap();
    assert_eq!(config, GameConfig::new(5, 6));
    let json = serde_json::to_string(&GameStatus::Won).unwrap();
    assert_eq!(json, r#""Won""#);
}
