use super::action::Velocity;

/// A position on the board, in pixels; always a multiple of the unit size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position by one tick of velocity
    pub fn moved_with(&self, velocity: Velocity) -> Self {
        self.moved_by(velocity.dx(), velocity.dy())
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    pub fn new(body: Vec<Position>) -> Self {
        debug_assert!(!body.is_empty());
        Self { body }
    }

    /// The start layout: a horizontal line in the top row, head rightmost
    pub fn starting(length: usize, unit: i32) -> Self {
        let body = (0..length as i32)
            .rev()
            .map(|i| Position::new(i * unit, 0))
            .collect();
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Prepend a new head; the tail is dropped unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Complete game session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub velocity: Velocity,
    pub food: Position,
    pub board_width: i32,
    pub board_height: i32,
    pub score: u32,
    pub lives: u32,
    /// Current level number, starting at 1
    pub level: usize,
    pub running: bool,
    pub game_over: bool,
}

impl GameState {
    /// Create a new, idle game state
    pub fn new(
        snake: Snake,
        velocity: Velocity,
        food: Position,
        board_width: i32,
        board_height: i32,
        lives: u32,
    ) -> Self {
        Self {
            snake,
            velocity,
            food,
            board_width,
            board_height,
            score: 0,
            lives,
            level: 1,
            running: false,
            game_over: false,
        }
    }

    /// Check if a position is within the board bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.board_width && pos.y >= 0 && pos.y < self.board_height
    }
}
