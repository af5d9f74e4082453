//! Board model of a 2048-style sliding tile puzzle.
//!
//! A [`Board`] owns its tiles and a random source. Every [`Board::swipe`]
//! slides all tiles toward one edge, merges equal neighbours once per turn and
//! spawns a new tile when anything changed. Rendering and input handling live
//! outside this crate; they only need [`Board::swipe`] and [`Board::snapshot`].
//!
//! ```
//! use model::{Board, Direction, GameConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut board = Board::with_config(GameConfig::new(4, 4), StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(board.tile_count(), 2);
//! let outcome = board.swipe(Direction::Left);
//! if outcome.changed {
//!     assert!(outcome.spawned.is_some());
//! }
//! ```

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod tile;

pub use board::{Board, MoveOutcome, TileId, TileView};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::BoardError;
pub use game::GameStatus;
pub use tile::{Origin, Position, Tile, MAX_TILE_VALUE};
