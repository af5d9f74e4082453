use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt;

use log::{debug, trace, warn};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::BoardError;
use crate::game::GameStatus;
use crate::tile::{is_tile_value, Origin, Position, Tile};

/// Identity of a tile, unique for the lifetime of a board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(u64);

/// Read-only copy of a tile for renderers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileView {
    pub id: TileId,
    pub value: u32,
    pub position: Position,
    pub origin: Origin,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MoveOutcome {
    /// At least one tile slid or merged.
    pub changed: bool,
    pub merges: usize,
    /// Cell that received the new tile, if one was spawned.
    pub spawned: Option<Position>,
}

/// Game board. `tiles` is the source of truth, `grid` is rebuilt from it
/// after every mutation and never edited on its own.
#[derive(Clone, Debug)]
pub struct Board<R = StdRng> {
    config: GameConfig,
    tiles: BTreeMap<TileId, Tile>,
    grid: Array2<Option<TileId>>,
    next_id: u64,
    moved_this_turn: bool,
    rng: R,
}

impl Board<StdRng> {
    /// Default-configured `rows` x `columns` board with the start tiles placed.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        Self::from_config(GameConfig::new(rows, columns))
    }

    pub fn from_config(config: GameConfig) -> Result<Self, BoardError> {
        Board::with_config(config, StdRng::from_entropy())
    }
}

impl<R: Rng> Board<R> {
    pub fn with_config(config: GameConfig, rng: R) -> Result<Self, BoardError> {
        let mut board = Self::empty(config, rng)?;
        board.spawn_start_tiles();
        debug!(
            "new {}x{} board, start tiles at {:?}",
            board.columns(),
            board.rows(),
            board.tiles.values().map(Tile::position).collect::<Vec<_>>()
        );
        Ok(board)
    }

    /// Builds a board from tile values laid out as `(rows, columns)`, 0 meaning
    /// an empty cell. No start tiles are spawned; the shape of `array` overrides
    /// the dimensions in `config`.
    pub fn from_array(array: Array2<u32>, config: GameConfig, rng: R) -> Result<Self, BoardError> {
        let (rows, columns) = array.dim();
        let config = GameConfig {
            rows,
            columns,
            start_tiles: config.start_tiles.min(rows * columns),
            ..config
        };
        let mut board = Self::empty(config, rng)?;
        for (index, &value) in array.indexed_iter() {
            match value {
                0 => {}
                v if is_tile_value(v) => {
                    let mut tile = Tile::new(Position::from_index(index), v);
                    tile.hold();
                    board.insert(tile);
                }
                v => return Err(BoardError::InvalidValue(v)),
            }
        }
        Ok(board)
    }

    fn empty(config: GameConfig, rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let grid = Array2::default((config.rows, config.columns));
        Ok(Self {
            config,
            tiles: BTreeMap::new(),
            grid,
            next_id: 0,
            moved_this_turn: false,
            rng,
        })
    }

    /// Slides every tile toward `direction`, merging equal pairs at most once per
    /// tile, then spawns one tile if anything changed.
    pub fn swipe(&mut self, direction: Direction) -> MoveOutcome {
        if self.is_game_over() {
            warn!("swipe {:?} ignored, game is over", direction);
            self.moved_this_turn = false;
            return MoveOutcome::default();
        }
        for tile in self.tiles.values_mut() {
            tile.hold();
        }

        let merges = self.shift(direction);
        let spawned = if self.moved_this_turn {
            self.spawn()
        } else {
            None
        };
        for tile in self.tiles.values_mut() {
            tile.reset_turn_state();
        }
        self.debug_check();

        debug!(
            "swipe {:?}: changed {}, {} merges, spawned {:?}",
            direction, self.moved_this_turn, merges, spawned
        );
        if self.moved_this_turn {
            match self.status() {
                GameStatus::Playing => {}
                status => debug!("board reached {:?}", status),
            }
        }
        MoveOutcome {
            changed: self.moved_this_turn,
            merges,
            spawned,
        }
    }

    /// Like [`Board::swipe`] for a raw direction index (0 up, 1 right, 2 down,
    /// 3 left). An unknown index leaves the board untouched.
    pub fn swipe_index(&mut self, direction: u8) -> Result<MoveOutcome, BoardError> {
        let direction = Direction::try_from(direction)?;
        Ok(self.swipe(direction))
    }

    /// Puts a tile with `value` on an empty cell.
    pub fn place_tile(&mut self, position: Position, value: u32) -> Result<TileId, BoardError> {
        self.check_bounds(position)?;
        if !is_tile_value(value) {
            return Err(BoardError::InvalidValue(value));
        }
        if self.grid[position.index()].is_some() {
            return Err(BoardError::Occupied {
                x: position.x,
                y: position.y,
            });
        }
        Ok(self.insert(Tile::new(position, value)))
    }

    /// Removes every tile and places fresh start tiles.
    pub fn reset(&mut self) {
        self.tiles.clear();
        self.rebuild_grid();
        self.moved_this_turn = false;
        self.spawn_start_tiles();
        debug!("board reset");
    }

    fn spawn_start_tiles(&mut self) {
        for _ in 0..self.config.start_tiles {
            self.spawn();
        }
    }

    /// Spawns a random tile on a uniformly chosen empty cell. Does nothing on a
    /// full board.
    fn spawn(&mut self) -> Option<Position> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let position = empty[self.rng.gen_range(0..empty.len())];
        let value = self.random_value();
        self.insert(Tile::new(position, value));
        trace!("spawned {} at {:?}", value, position);
        Some(position)
    }

    fn random_value(&mut self) -> u32 {
        let total = self.config.two_weight + self.config.four_weight;
        if self.rng.gen_range(0..total) < self.config.two_weight {
            2
        } else {
            4
        }
    }
}

impl<R> Board<R> {
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn columns(&self) -> usize {
        self.config.columns
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.tiles.iter().map(|(id, tile)| (*id, tile))
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    pub fn tile_at(&self, position: Position) -> Option<&Tile> {
        self.grid
            .get(position.index())
            .copied()
            .flatten()
            .and_then(|id| self.tiles.get(&id))
    }

    /// Whether the last swipe slid or merged anything.
    pub fn moved_this_turn(&self) -> bool {
        self.moved_this_turn
    }

    pub fn max_value(&self) -> Option<u32> {
        self.tiles.values().map(Tile::value).max()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        self.grid
            .indexed_iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Position::from_index(index))
            .collect()
    }

    pub fn snapshot(&self) -> Array2<Option<TileView>> {
        self.grid.map(|&cell| cell.and_then(|id| self.view(id)))
    }

    pub fn to_array(&self) -> Array2<u32> {
        self.grid
            .map(|&cell| cell.and_then(|id| self.tiles.get(&id)).map_or(0, Tile::value))
    }

    pub fn has_winning_tile(&self) -> bool {
        self.tiles
            .values()
            .any(|tile| tile.value() == self.config.win_value)
    }

    pub fn is_full(&self) -> bool {
        self.tiles.len() == self.config.cells()
    }

    /// Some tile has an orthogonal neighbour of equal value.
    pub fn has_available_merge(&self) -> bool {
        self.tiles.values().any(|tile| {
            Direction::ALL.iter().any(|direction| {
                self.neighbour(tile.position(), *direction)
                    .and_then(|position| self.tile_at(position))
                    .map_or(false, |other| tile.can_merge_with(other))
            })
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.is_full() && !self.has_available_merge()
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::of(self)
    }

    /// Whether a swipe toward `direction` would change the board.
    pub fn can_swipe(&self, direction: Direction) -> bool {
        self.tiles.values().any(|tile| {
            match self.neighbour(tile.position(), direction) {
                None => false,
                Some(position) => self
                    .tile_at(position)
                    .map_or(true, |other| tile.can_merge_with(other)),
            }
        })
    }

    pub fn available_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .filter(|direction| self.can_swipe(*direction))
            .collect()
    }

    /// Slide and merge pass of a swipe, without spawning or ending the turn.
    /// Returns the number of merges.
    fn shift(&mut self, direction: Direction) -> usize {
        self.moved_this_turn = false;
        let mut merges = 0;
        for line in self.lines(direction) {
            for id in line {
                if self.slide(id, direction) {
                    self.moved_this_turn = true;
                }
                if self.try_merge(id, direction) {
                    self.moved_this_turn = true;
                    merges += 1;
                }
            }
        }
        merges
    }

    /// Tiles grouped by line, each line ordered from the edge tiles move toward.
    fn lines(&self, direction: Direction) -> Vec<Vec<TileId>> {
        let (outer, inner) = if direction.is_vertical() {
            (self.columns(), self.rows())
        } else {
            (self.rows(), self.columns())
        };
        (0..outer)
            .map(|i| {
                let mut line: Vec<TileId> = (0..inner)
                    .filter_map(|j| {
                        let position = if direction.is_vertical() {
                            Position::new(i, j)
                        } else {
                            Position::new(j, i)
                        };
                        self.grid[position.index()]
                    })
                    .collect();
                if direction.is_reversed() {
                    line.reverse();
                }
                line
            })
            .collect()
    }

    fn slide(&mut self, id: TileId, direction: Direction) -> bool {
        let (dx, dy) = direction.vector();
        let mut moved = false;
        while let Some(target) = self
            .tiles
            .get(&id)
            .and_then(|tile| self.neighbour(tile.position(), direction))
        {
            if self.grid[target.index()].is_some() {
                break;
            }
            if let Some(tile) = self.tiles.get_mut(&id) {
                tile.apply_offset(dx, dy);
            }
            self.rebuild_grid();
            moved = true;
        }
        if moved {
            trace!("{:?} slid to {:?}", id, self.tiles.get(&id).map(Tile::position));
        }
        moved
    }

    /// Merges tile `id` into the tile right after it in `direction` when both
    /// hold the same mergeable value and the target has not merged this turn.
    fn try_merge(&mut self, id: TileId, direction: Direction) -> bool {
        let (moving, absorbed, position) = match self.tiles.get(&id) {
            Some(tile) => (tile.clone(), tile.turn_start(), tile.position()),
            None => return false,
        };
        let target = match self
            .neighbour(position, direction)
            .and_then(|position| self.grid[position.index()])
        {
            Some(target) => target,
            None => return false,
        };
        match self.tiles.get_mut(&target) {
            Some(other) if other.can_merge_with(&moving) && !other.merged_this_turn() => {
                other.merge(absorbed);
                trace!("{:?} merged into {:?}, now {}", id, target, other.value());
            }
            _ => return false,
        }
        self.tiles.remove(&id);
        self.rebuild_grid();
        true
    }

    fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        position.offset(direction.vector(), self.columns(), self.rows())
    }

    fn check_bounds(&self, position: Position) -> Result<(), BoardError> {
        if position.x < self.columns() && position.y < self.rows() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                x: position.x,
                y: position.y,
                columns: self.columns(),
                rows: self.rows(),
            })
        }
    }

    fn insert(&mut self, tile: Tile) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tiles.insert(id, tile);
        self.rebuild_grid();
        id
    }

    fn rebuild_grid(&mut self) {
        self.grid.fill(None);
        for (id, tile) in &self.tiles {
            let cell = self.grid.get_mut(tile.position().index());
            debug_assert!(cell.is_some(), "tile outside the grid at {:?}", tile.position());
            if let Some(cell) = cell {
                debug_assert!(cell.is_none(), "two tiles at {:?}", tile.position());
                *cell = Some(*id);
            }
        }
    }

    fn view(&self, id: TileId) -> Option<TileView> {
        self.tiles.get(&id).map(|tile| TileView {
            id,
            value: tile.value(),
            position: tile.position(),
            origin: tile.origin(),
        })
    }

    fn debug_check(&self) {
        for (id, tile) in &self.tiles {
            debug_assert!(self.check_bounds(tile.position()).is_ok());
            debug_assert!(!tile.merged_this_turn());
            debug_assert_eq!(self.grid.get(tile.position().index()), Some(&Some(*id)));
        }
        debug_assert_eq!(
            self.grid.iter().filter(|cell| cell.is_some()).count(),
            self.tiles.len()
        );
    }
}

impl<R> fmt::Display for Board<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_array().rows() {
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                match *value {
                    0 => write!(f, "{:>5}", ".")?,
                    v => write!(f, "{:>5}", v)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::config::GameConfig;
    use ndarray::Array2;
    use rand::rngs::mock::StepRng;

    /// Board over `values` whose random source always picks the first empty
    /// cell and a 2.
    pub fn board(rows: usize, columns: usize, values: Vec<u32>) -> Board<StepRng> {
        let array = Array2::from_shape_vec((rows, columns), values).unwrap();
        Board::from_array(array, GameConfig::default(), StepRng::new(0, 0)).unwrap()
    }

    pub fn array(rows: usize, columns: usize, values: Vec<u32>) -> Array2<u32> {
        Array2::from_shape_vec((rows, columns), values).unwrap()
    }
}

#[test]
fn board_from_array() {
    use crate::board::tests::board;
    #[rustfmt::skip]
    let board = board(4, 3, vec![
        8, 4, 2,
        4, 2, 0,
        2, 0, 0,
        0, 0, 16,
    ]);
    assert_eq!(board.rows(), 4);
    assert_eq!(board.columns(), 3);
    assert_eq!(board.tile_count(), 7);
    assert_eq!(board.tile_at(Position::new(2, 0)).unwrap().value(), 2);
    assert_eq!(board.tile_at(Position::new(0, 2)).unwrap().value(), 2);
    assert_eq!(board.tile_at(Position::new(2, 3)).unwrap().value(), 16);
    assert!(board.tile_at(Position::new(1, 3)).is_none());
    assert!(board.tile_at(Position::new(3, 0)).is_none());
    assert_eq!(board.tile_at(Position::new(0, 0)).unwrap().origin(), Origin::Hold);
    assert_eq!(board.max_value(), Some(16));
}

#[test]
fn board_from_array_rejects_values() {
    use rand::rngs::mock::StepRng;
    let array = Array2::from_shape_vec((1, 3), vec![2, 3, 0]).unwrap();
    let result = Board::from_array(array, GameConfig::default(), StepRng::new(0, 0));
    assert_eq!(result.err(), Some(BoardError::InvalidValue(3)));
    let array = Array2::from_shape_vec((1, 2), vec![1, 0]).unwrap();
    let result = Board::from_array(array, GameConfig::default(), StepRng::new(0, 0));
    assert_eq!(result.err(), Some(BoardError::InvalidValue(1)));
}

#[test]
fn board_to_array() {
    use crate::board::tests::{array, board};
    #[rustfmt::skip]
    let values = vec![
        8, 4, 2,
        4, 2, 0,
        2, 0, 0,
        0, 0, 16,
    ];
    let board = board(4, 3, values.clone());
    assert_eq!(board.to_array(), array(4, 3, values));
}

#[test]
fn shift_up() {
    use crate::board::tests::{array, board};
    #[rustfmt::skip]
    let mut board = board(4, 4, vec![
        0, 2, 4, 4,
        0, 2, 2, 4,
        0, 0, 2, 2,
        0, 0, 0, 2,
    ]);
    #[rustfmt::skip]
    let expected = array(4, 4, vec![
        0, 4, 4, 8,
        0, 0, 4, 4,
        0, 0, 0, 0,
        0, 0, 0, 0,
    ]);
    assert_eq!(board.shift(Direction::Up), 4);
    assert!(board.moved_this_turn());
    assert_eq!(board.to_array(), expected);
}

#[test]
fn shift_down() {
    use crate::board::tests::{array, board};
    #[rustfmt::skip]
    let mut board = board(4, 4, vec![
        0, 2, 4, 4,
        0, 2, 2, 4,
        0, 0, 2, 2,
        0, 0, 0, 2,
    ]);
    #[rustfmt::skip]
    let expected = array(4, 4, vec![
        0, 0, 0, 0,
        0, 0, 0, 0,
        0, 0, 4, 8,
        0, 4, 4, 4,
    ]);
    board.shift(Direction::Down);
    assert_eq!(board.to_array(), expected);
}

#[test]
fn shift_left() {
    use crate::board::tests::{array, board};
    #[rustfmt::skip]
    let mut board = board(4, 4, vec![
        0, 2, 4, 4,
        0, 2, 2, 4,
        0, 0, 2, 2,
        0, 0, 0, 2,
    ]);
    #[rustfmt::skip]
    let expected = array(4, 4, vec![
        2, 8, 0, 0,
        4, 4, 0, 0,
        4, 0, 0, 0,
        2, 0, 0, 0,
    ]);
    board.shift(Direction::Left);
    assert_eq!(board.to_array(), expected);
}

#[test]
fn shift_right() {
    use crate::board::tests::{array, board};
    #[rustfmt::skip]
    let mut board = board(4, 4, vec![
        0, 2, 4, 4,
        0, 2, 2, 4,
        0, 0, 2, 2,
        0, 0, 0, 2,
    ]);
    #[rustfmt::skip]
    let expected = array(4, 4, vec![
        0, 0, 2, 8,
        0, 0, 4, 4,
        0, 0, 0, 4,
        0, 0, 0, 2,
    ]);
    board.shift(Direction::Right);
    assert_eq!(board.to_array(), expected);
}

#[test]
fn shift_resolves_leading_pair_first() {
    use crate::board::tests::{array, board};
    let mut board = board(1, 3, vec![2, 2, 2]);
    assert_eq!(board.shift(Direction::Left), 1);
    assert_eq!(board.to_array(), array(1, 3, vec![4, 2, 0]));

    let mut board = crate::board::tests::board(1, 3, vec![2, 2, 2]);
    board.shift(Direction::Right);
    assert_eq!(board.to_array(), array(1, 3, vec![0, 2, 4]));
}

#[test]
fn shift_merges_once_per_turn() {
    use crate::board::tests::{array, board};
    let mut board = board(1, 4, vec![2, 2, 4, 0]);
    assert_eq!(board.shift(Direction::Left), 1);
    assert!(board.moved_this_turn());
    assert_eq!(board.to_array(), array(1, 4, vec![4, 4, 0, 0]));
    let merged = board.tile_at(Position::new(0, 0)).unwrap();
    assert!(merged.merged_this_turn());
    assert_eq!(
        merged.origin(),
        Origin::Merged {
            from: Position::new(0, 0),
            absorbed: Position::new(1, 0)
        }
    );
    let slid = board.tile_at(Position::new(1, 0)).unwrap();
    assert!(!slid.merged_this_turn());
    assert_eq!(
        slid.origin(),
        Origin::Moved {
            from: Position::new(2, 0)
        }
    );

    let mut board = crate::board::tests::board(1, 4, vec![2, 2, 2, 2]);
    assert_eq!(board.shift(Direction::Left), 2);
    assert_eq!(board.to_array(), array(1, 4, vec![4, 4, 0, 0]));
}

#[test]
fn shift_without_room_is_noop() {
    use crate::board::tests::{array, board};
    let mut board = board(1, 4, vec![0, 0, 2, 0]);
    assert_eq!(board.shift(Direction::Left), 0);
    assert!(board.moved_this_turn());
    assert_eq!(board.to_array(), array(1, 4, vec![2, 0, 0, 0]));
    board.shift(Direction::Left);
    assert!(!board.moved_this_turn());
    assert_eq!(board.to_array(), array(1, 4, vec![2, 0, 0, 0]));
}

#[test]
fn swipe_spawns_one_tile() {
    use crate::board::tests::{array, board};
    let mut board = board(2, 2, vec![0, 0, 2, 2]);
    let outcome = board.swipe(Direction::Right);
    assert_eq!(
        outcome,
        MoveOutcome {
            changed: true,
            merges: 1,
            spawned: Some(Position::new(0, 0)),
        }
    );
    assert_eq!(board.to_array(), array(2, 2, vec![2, 0, 0, 4]));
    assert_eq!(board.tile_at(Position::new(0, 0)).unwrap().origin(), Origin::Appear);
    assert!(board.tiles().all(|(_, tile)| !tile.merged_this_turn()));
}

#[test]
fn swipe_without_change_does_not_spawn() {
    use crate::board::tests::{array, board};
    let mut board = board(2, 2, vec![2, 0, 4, 0]);
    let outcome = board.swipe(Direction::Left);
    assert_eq!(outcome, MoveOutcome::default());
    assert!(!board.moved_this_turn());
    assert_eq!(board.to_array(), array(2, 2, vec![2, 0, 4, 0]));
}

#[test]
fn swipe_on_game_over_board() {
    use crate::board::tests::{array, board};
    let mut board = board(2, 2, vec![2, 4, 4, 2]);
    assert!(board.is_game_over());
    for direction in Direction::ALL.iter() {
        assert_eq!(board.swipe(*direction), MoveOutcome::default());
    }
    assert_eq!(board.to_array(), array(2, 2, vec![2, 4, 4, 2]));
}

#[test]
fn swipe_index_rejects_unknown_direction() {
    use crate::board::tests::{array, board};
    let mut board = board(1, 2, vec![0, 2]);
    assert_eq!(board.swipe_index(4), Err(BoardError::InvalidDirection(4)));
    assert_eq!(board.to_array(), array(1, 2, vec![0, 2]));
    assert_eq!(board.tile_at(Position::new(1, 0)).unwrap().origin(), Origin::Hold);
    assert!(board.swipe_index(3).unwrap().changed);
}

#[test]
fn spawn_uses_empty_cells() {
    use rand::rngs::mock::StepRng;
    let config = GameConfig::new(3, 3).with_start_tiles(0);
    let mut board = Board::with_config(config, StepRng::new(0, 0)).unwrap();
    for n in 0..9 {
        let before = board.empty_cells();
        let spawned = board.spawn().unwrap();
        assert_eq!(spawned, before[0]);
        assert_eq!(board.tile_count(), n + 1);
        assert_eq!(board.tile_at(spawned).unwrap().value(), 2);
    }
    assert!(board.is_full());
    assert_eq!(board.spawn(), None);
    assert_eq!(board.tile_count(), 9);
}

#[test]
fn spawn_value_distribution() {
    let config = GameConfig::new(4, 4).with_start_tiles(0);
    let mut board = Board::with_config(config, StdRng::seed_from_u64(2048)).unwrap();
    let fours = (0..10_000).filter(|_| board.random_value() == 4).count();
    assert!((700..1300).contains(&fours), "{} fours", fours);

    let config = GameConfig::new(4, 4).with_weights(0, 1);
    let board = Board::with_config(config, StdRng::seed_from_u64(1)).unwrap();
    assert!(board.tiles().all(|(_, tile)| tile.value() == 4));
}

#[test]
fn start_tiles_on_distinct_cells() {
    for seed in 0..32 {
        let board = Board::with_config(GameConfig::new(2, 1), StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(board.tile_count(), 2);
        assert!(board.is_full());
    }
}

#[test]
fn place_tile_checks() {
    use crate::board::tests::board;
    let mut board = board(2, 3, vec![0, 0, 0, 0, 2, 0]);
    assert_eq!(
        board.place_tile(Position::new(3, 0), 2),
        Err(BoardError::OutOfBounds {
            x: 3,
            y: 0,
            columns: 3,
            rows: 2
        })
    );
    assert_eq!(
        board.place_tile(Position::new(1, 1), 2),
        Err(BoardError::Occupied { x: 1, y: 1 })
    );
    assert_eq!(
        board.place_tile(Position::new(0, 0), 12),
        Err(BoardError::InvalidValue(12))
    );
    let id = board.place_tile(Position::new(0, 0), 8).unwrap();
    assert_eq!(board.tile(id).unwrap().value(), 8);
    assert_eq!(board.tile_count(), 2);
}

#[test]
fn terminal_checks() {
    use crate::board::tests::board;
    let board = board(2, 2, vec![2, 4, 4, 2]);
    assert!(board.is_full());
    assert!(!board.has_available_merge());
    assert!(board.is_game_over());
    assert!(board.available_moves().is_empty());

    let board = crate::board::tests::board(2, 2, vec![2, 2, 4, 8]);
    assert!(board.is_full());
    assert!(board.has_available_merge());
    assert!(!board.is_game_over());
    assert_eq!(board.available_moves(), vec![Direction::Right, Direction::Left]);

    let board = crate::board::tests::board(2, 2, vec![2, 0, 0, 2]);
    assert!(!board.has_available_merge());
    assert!(!board.is_game_over());

    let board = crate::board::tests::board(2, 2, vec![2, 4, 8, 2048]);
    assert!(board.has_winning_tile());
    assert!(board.is_game_over());
}

#[test]
fn can_swipe_matches_shift() {
    use crate::board::tests::board;
    #[rustfmt::skip]
    let values = vec![
        2, 4, 8,
        0, 4, 2,
        0, 0, 2,
    ];
    for direction in Direction::ALL.iter() {
        let mut board = board(3, 3, values.clone());
        let predicted = board.can_swipe(*direction);
        board.shift(*direction);
        assert_eq!(predicted, board.moved_this_turn(), "{:?}", direction);
    }
}

#[test]
fn snapshot_follows_tiles() {
    use crate::board::tests::board;
    let mut board = board(1, 3, vec![0, 4, 4]);
    board.swipe(Direction::Left);
    let snapshot = board.snapshot();
    let merged = snapshot[(0, 0)].unwrap();
    assert_eq!(merged.value, 8);
    assert_eq!(merged.position, Position::new(0, 0));
    assert_eq!(
        merged.origin,
        Origin::Merged {
            from: Position::new(1, 0),
            absorbed: Position::new(2, 0)
        }
    );
    let spawned = snapshot[(0, 1)].unwrap();
    assert_eq!(spawned.value, 2);
    assert_eq!(spawned.origin, Origin::Appear);
    assert_ne!(spawned.id, merged.id);
    assert!(snapshot[(0, 2)].is_none());
}

#[test]
fn reset_keeps_config() {
    let config = GameConfig::new(3, 5).with_start_tiles(3);
    let mut board = Board::with_config(config.clone(), StdRng::seed_from_u64(9)).unwrap();
    board.swipe(Direction::Down);
    board.reset();
    assert_eq!(board.config(), &config);
    assert_eq!(board.tile_count(), 3);
    assert!(!board.moved_this_turn());
}

#[test]
fn largest_tiles_do_not_merge() {
    use crate::board::tests::{array, board};
    use crate::tile::MAX_TILE_VALUE;
    let top = MAX_TILE_VALUE;
    let mut board = board(1, 3, vec![top, top, 0]);
    assert!(!board.can_swipe(Direction::Left));
    assert!(!board.has_available_merge());
    assert_eq!(board.swipe(Direction::Left), MoveOutcome::default());
    assert_eq!(board.to_array(), array(1, 3, vec![top, top, 0]));

    let half = MAX_TILE_VALUE / 2;
    let mut board = crate::board::tests::board(1, 4, vec![half, half, half, half]);
    assert_eq!(board.shift(Direction::Left), 2);
    assert_eq!(board.to_array(), array(1, 4, vec![top, top, 0, 0]));
    assert_eq!(board.shift(Direction::Left), 0);
    assert!(!board.moved_this_turn());
    assert!(!board.has_available_merge());
}

#[test]
fn board_display() {
    use crate::board::tests::board;
    let board = board(2, 2, vec![2, 0, 128, 2048]);
    assert_eq!(board.to_string(), "    2     .\n  128  2048\n");
}
