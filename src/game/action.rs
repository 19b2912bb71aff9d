/// Key codes accepted by [`Direction::from_key_code`]
pub mod key_code {
    pub const LEFT: u32 = 37;
    pub const UP: u32 = 38;
    pub const RIGHT: u32 = 39;
    pub const DOWN: u32 = 40;
}

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Maps a directional key code to a direction
    pub fn from_key_code(code: u32) -> Option<Direction> {
        match code {
            key_code::LEFT => Some(Direction::Left),
            key_code::UP => Some(Direction::Up),
            key_code::RIGHT => Some(Direction::Right),
            key_code::DOWN => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Per-tick displacement of the snake head, in board pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Velocity {
    pub direction: Direction,
    pub unit: i32,
}

impl Velocity {
    pub fn new(direction: Direction, unit: i32) -> Self {
        Self { direction, unit }
    }

    /// The default heading at game start and after a lost life
    pub fn rightward(unit: i32) -> Self {
        Self::new(Direction::Right, unit)
    }

    pub fn dx(&self) -> i32 {
        self.direction.delta().0 * self.unit
    }

    pub fn dy(&self) -> i32 {
        self.direction.delta().1 * self.unit
    }
}
