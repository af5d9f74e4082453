use crate::error::BoardError;
use crate::tile::is_tile_value;

pub const DEFAULT_SIZE: usize = 4;
pub const DEFAULT_START_TILES: usize = 2;
pub const DEFAULT_WIN_VALUE: u32 = 2048;

/// Board shape and tile generation parameters.
///
/// A spawned tile is a 2 with probability `two_weight / (two_weight + four_weight)`
/// and a 4 otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub start_tiles: usize,
    pub win_value: u32,
    pub two_weight: u32,
    pub four_weight: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SIZE,
            columns: DEFAULT_SIZE,
            start_tiles: DEFAULT_START_TILES,
            win_value: DEFAULT_WIN_VALUE,
            two_weight: 9,
            four_weight: 1,
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_start_tiles(mut self, start_tiles: usize) -> Self {
        self.start_tiles = start_tiles;
        self
    }

    pub fn with_win_value(mut self, win_value: u32) -> Self {
        self.win_value = win_value;
        self
    }

    pub fn with_weights(mut self, two_weight: u32, four_weight: u32) -> Self {
        self.two_weight = two_weight;
        self.four_weight = four_weight;
        self
    }

    /// Cell count of a validated config.
    pub fn cells(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(BoardError::InvalidConfig(format!(
                "board must have at least one cell, got {}x{}",
                self.columns, self.rows
            )));
        }
        let cells = self.rows.checked_mul(self.columns).ok_or_else(|| {
            BoardError::InvalidConfig(format!(
                "{}x{} board has too many cells",
                self.columns, self.rows
            ))
        })?;
        if self.start_tiles > cells {
            return Err(BoardError::InvalidConfig(format!(
                "{} start tiles do not fit on {} cells",
                self.start_tiles, cells
            )));
        }
        if !is_tile_value(self.win_value) || self.win_value < 4 {
            return Err(BoardError::InvalidConfig(format!(
                "win value {} is not a power of two >= 4",
                self.win_value
            )));
        }
        if self.two_weight.checked_add(self.four_weight).unwrap_or(0) == 0 {
            return Err(BoardError::InvalidConfig(
                "tile weights must sum to a positive value".to_string(),
            ));
        }
        Ok(())
    }
}

#[test]
fn config_defaults() {
    let config = GameConfig::default();
    assert_eq!((config.rows, config.columns), (4, 4));
    assert_eq!(config.start_tiles, 2);
    assert_eq!(config.win_value, 2048);
    assert_eq!((config.two_weight, config.four_weight), (9, 1));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn config_rejects_bad_values() {
    assert!(GameConfig::new(0, 4).validate().is_err());
    assert!(GameConfig::new(1, 1).validate().is_err());
    assert!(GameConfig::new(1, 1).with_start_tiles(1).validate().is_ok());
    assert!(GameConfig::default().with_win_value(1000).validate().is_err());
    assert!(GameConfig::default().with_win_value(2).validate().is_err());
    assert!(GameConfig::default().with_weights(0, 0).validate().is_err());
    assert!(GameConfig::default().with_weights(u32::MAX, 1).validate().is_err());
    assert!(GameConfig::default().with_weights(0, 1).validate().is_ok());
    assert!(matches!(
        GameConfig::new(usize::MAX, 2).validate(),
        Err(BoardError::InvalidConfig(_))
    ));
}
