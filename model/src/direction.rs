use std::convert::TryFrom;

use crate::error::BoardError;

/// Swipe direction. The discriminants are the raw indices accepted by
/// [`Direction::try_from`], in the order the input layer reports them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector `(dx, dy)` with `y` growing downwards.
    pub fn vector(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Lines run along columns for vertical swipes and along rows otherwise.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether cells of a line are visited from the high index end first.
    /// Tiles nearest the edge being moved toward always go first.
    pub fn is_reversed(self) -> bool {
        let (dx, dy) = self.vector();
        dx + dy > 0
    }
}

impl TryFrom<u8> for Direction {
    type Error = BoardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or(BoardError::InvalidDirection(value))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> u8 {
        direction as u8
    }
}

#[test]
fn direction_vectors() {
    assert_eq!(Direction::Up.vector(), (0, -1));
    assert_eq!(Direction::Right.vector(), (1, 0));
    assert_eq!(Direction::Down.vector(), (0, 1));
    assert_eq!(Direction::Left.vector(), (-1, 0));
}

#[test]
fn direction_traversal_order() {
    assert!(!Direction::Up.is_reversed());
    assert!(!Direction::Left.is_reversed());
    assert!(Direction::Down.is_reversed());
    assert!(Direction::Right.is_reversed());
    assert!(Direction::Up.is_vertical());
    assert!(!Direction::Left.is_vertical());
}

#[test]
fn direction_from_index() {
    for (index, direction) in Direction::ALL.iter().enumerate() {
        assert_eq!(Direction::try_from(index as u8), Ok(*direction));
        assert_eq!(u8::from(*direction), index as u8);
    }
    assert_eq!(
        Direction::try_from(4),
        Err(BoardError::InvalidDirection(4))
    );
    assert_eq!(
        Direction::try_from(255),
        Err(BoardError::InvalidDirection(255))
    );
}
