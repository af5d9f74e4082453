use rand::Rng;

/// Cell coordinates, `x` is the column and `y` the row counted from the top.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// ndarray index `(row, column)` of this cell.
    pub fn index(self) -> (usize, usize) {
        (self.y, self.x)
    }

    pub fn from_index(index: (usize, usize)) -> Self {
        Self::new(index.1, index.0)
    }

    /// Neighbour cell in the `(dx, dy)` direction, `None` when it would leave
    /// a `columns` x `rows` board.
    pub fn offset(self, (dx, dy): (isize, isize), columns: usize, rows: usize) -> Option<Self> {
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;
        if x < 0 || y < 0 || x as usize >= columns || y as usize >= rows {
            None
        } else {
            Some(Self::new(x as usize, y as usize))
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

/// How a tile reached its cell during the last turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Origin {
    Appear,
    Hold,
    Moved { from: Position },
    Merged { from: Position, absorbed: Position },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tile {
    value: u32,
    position: Position,
    merged_this_turn: bool,
    origin: Origin,
}

impl Tile {
    pub fn new(position: Position, value: u32) -> Self {
        debug_assert!(is_tile_value(value), "bad tile value {}", value);
        Self {
            value,
            position,
            merged_this_turn: false,
            origin: Origin::Appear,
        }
    }

    /// Tile with a value drawn uniformly from {2, 4}.
    pub fn random<R: Rng + ?Sized>(position: Position, rng: &mut R) -> Self {
        let value = if rng.gen::<bool>() { 4 } else { 2 };
        Self::new(position, value)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn merged_this_turn(&self) -> bool {
        self.merged_this_turn
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Cell the tile occupied when the current turn started.
    pub fn turn_start(&self) -> Position {
        match self.origin {
            Origin::Appear | Origin::Hold => self.position,
            Origin::Moved { from } | Origin::Merged { from, .. } => from,
        }
    }

    /// Moves the tile one step. The caller has already checked the target cell.
    pub fn apply_offset(&mut self, dx: isize, dy: isize) {
        let from = self.turn_start();
        self.position = Position::new(
            (self.position.x as isize + dx) as usize,
            (self.position.y as isize + dy) as usize,
        );
        self.origin = Origin::Moved { from };
    }

    /// Absorbs an equal tile that started the turn at `absorbed`.
    /// Must happen at most once per turn.
    pub fn merge(&mut self, absorbed: Position) {
        debug_assert!(!self.merged_this_turn, "tile merged twice in one turn");
        debug_assert!(self.value < MAX_TILE_VALUE, "tile value {} cannot double", self.value);
        self.origin = Origin::Merged {
            from: self.turn_start(),
            absorbed,
        };
        self.value *= 2;
        self.merged_this_turn = true;
    }

    /// Equal values merge, except at the largest value a `u32` tile can hold.
    pub fn can_merge_with(&self, other: &Tile) -> bool {
        self.value == other.value && self.value < MAX_TILE_VALUE
    }

    pub fn reset_turn_state(&mut self) {
        self.merged_this_turn = false;
    }

    pub(crate) fn hold(&mut self) {
        self.origin = Origin::Hold;
    }
}

/// Largest tile value; tiles holding it no longer merge.
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// Powers of two starting at 2.
pub fn is_tile_value(value: u32) -> bool {
    value >= 2 && value.is_power_of_two()
}

#[test]
fn tile_slide_records_start() {
    let mut tile = Tile::new(Position::new(3, 1), 2);
    tile.hold();
    tile.apply_offset(-1, 0);
    tile.apply_offset(-1, 0);
    assert_eq!(tile.position(), Position::new(1, 1));
    assert_eq!(
        tile.origin(),
        Origin::Moved {
            from: Position::new(3, 1)
        }
    );
    assert_eq!(tile.turn_start(), Position::new(3, 1));
}

#[test]
fn tile_merge_and_reset() {
    let mut tile = Tile::new(Position::new(0, 0), 8);
    tile.hold();
    tile.merge(Position::new(2, 0));
    assert_eq!(tile.value(), 16);
    assert!(tile.merged_this_turn());
    assert_eq!(
        tile.origin(),
        Origin::Merged {
            from: Position::new(0, 0),
            absorbed: Position::new(2, 0)
        }
    );
    tile.reset_turn_state();
    assert!(!tile.merged_this_turn());
    assert_eq!(tile.value(), 16);
}

#[test]
fn tile_random_value() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = [false; 2];
    for _ in 0..64 {
        let tile = Tile::random(Position::new(0, 0), &mut rng);
        match tile.value() {
            2 => seen[0] = true,
            4 => seen[1] = true,
            v => panic!("unexpected value {}", v),
        }
        assert_eq!(tile.origin(), Origin::Appear);
    }
    assert_eq!(seen, [true, true]);
}

#[test]
fn position_offset_bounds() {
    let p = Position::new(0, 2);
    assert_eq!(p.offset((-1, 0), 4, 3), None);
    assert_eq!(p.offset((0, 1), 4, 3), None);
    assert_eq!(p.offset((1, 0), 4, 3), Some(Position::new(1, 2)));
    assert_eq!(p.offset((0, -1), 4, 3), Some(Position::new(0, 1)));
    assert_eq!(p.index(), (2, 0));
    assert_eq!(Position::from_index((2, 0)), p);
}

#[test]
fn tile_values() {
    assert!(is_tile_value(2));
    assert!(is_tile_value(2048));
    assert!(!is_tile_value(0));
    assert!(!is_tile_value(1));
    assert!(!is_tile_value(6));
    assert!(is_tile_value(MAX_TILE_VALUE));
}

#[test]
fn tile_merge_ceiling() {
    let half = Tile::new(Position::new(0, 0), MAX_TILE_VALUE / 2);
    let top = Tile::new(Position::new(1, 0), MAX_TILE_VALUE);
    assert!(half.can_merge_with(&half.clone()));
    assert!(!top.can_merge_with(&top.clone()));
    assert!(!half.can_merge_with(&top));
}
