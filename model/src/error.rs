#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid direction index {0}, expected 0..=3")]
    InvalidDirection(u8),
    #[error("position ({x}, {y}) is outside the {columns}x{rows} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    },
    #[error("cell ({x}, {y}) is already occupied")]
    Occupied { x: usize, y: usize },
    #[error("tile value {0} is not a power of two >= 2")]
    InvalidValue(u32),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
