use super::{
    action::{Direction, Velocity},
    config::GameConfig,
    level::{Level, LevelSet, LevelSource},
    state::{CollisionType, GameState, Position, Snake},
    surface::{Paint, Surface, GAME_OVER_TEXT},
};
use crate::error::GameResult;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// What happened during one tick
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether a life was lost
    pub life_lost: bool,
    /// Whether the last life was lost this tick
    pub game_over: bool,
    /// Whether the current level number changed
    pub level_changed: bool,
    /// Delay before the next tick, or `None` once the game has stopped
    pub next_delay: Option<Duration>,
}

/// The game engine: owns the session state and runs the tick state machine
pub struct GameEngine {
    config: GameConfig,
    source: Box<dyn LevelSource>,
    levels: Option<LevelSet>,
    level: Level,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create an idle engine; levels are loaded on the first `start`
    pub fn new(config: GameConfig, source: impl LevelSource + 'static) -> Self {
        Self::with_rng(config, source, StdRng::from_entropy())
    }

    /// Create an idle engine with a deterministic food sequence
    pub fn with_seed(config: GameConfig, source: impl LevelSource + 'static, seed: u64) -> Self {
        Self::with_rng(config, source, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, source: impl LevelSource + 'static, rng: StdRng) -> Self {
        let state = GameState::new(
            Snake::starting(config.initial_snake_length, config.unit_size),
            Velocity::rightward(config.unit_size),
            Position::new(0, 0),
            config.board_width,
            config.board_height,
            config.initial_lives,
        );

        Self {
            config,
            source: Box::new(source),
            levels: None,
            level: Level::default(),
            state,
            rng,
        }
    }

    /// Begin (or resume) play and return the delay before the first tick
    ///
    /// Validates the board configuration and loads the level list on first
    /// use. If either fails the engine stays idle and nothing should be
    /// scheduled.
    pub fn start(&mut self, surface: &mut dyn Surface) -> GameResult<Duration> {
        self.config.validate().map_err(|e| {
            error!("Refusing to start: {}", e);
            e
        })?;

        if self.levels.is_none() {
            let levels = self.source.load_levels().map_err(|e| {
                error!("Failed to load levels: {}", e);
                e
            })?;
            self.levels = Some(levels);
        }

        self.state.running = true;
        self.state.game_over = false;
        surface.show_score(self.state.score);
        surface.show_lives(self.state.lives);
        self.apply_level(self.state.level);
        self.place_food();
        surface.fill_cell(self.state.food, Paint::Food);

        info!(
            level = self.state.level,
            lives = self.state.lives,
            "Game started"
        );
        Ok(self.level.tick_delay())
    }

    /// Run one simulation step: clear, draw food, move, draw snake, check collisions
    pub fn tick(&mut self, surface: &mut dyn Surface) -> TickOutcome {
        if !self.state.running {
            return TickOutcome::default();
        }

        let level_before = self.state.level;

        surface.clear();
        surface.fill_cell(self.state.food, Paint::Food);
        let ate_food = self.move_snake(surface);
        self.draw_snake(surface);

        let collision = self.check_collision();
        let mut game_over = false;

        if let Some(collision_type) = collision {
            self.state.lives = self.state.lives.saturating_sub(1);
            surface.show_lives(self.state.lives);

            if self.state.lives == 0 {
                self.state.running = false;
                self.state.game_over = true;
                game_over = true;
                surface.draw_centered_text(GAME_OVER_TEXT);
                info!(score = self.state.score, "Game over");
            } else {
                warn!(
                    ?collision_type,
                    lives = self.state.lives,
                    "Life lost, restarting snake"
                );
                self.reset_snake();
                // Every lost life also moves up one level, on top of score-based advancement.
                self.apply_level(self.state.level + 1);
            }
        }

        TickOutcome {
            ate_food,
            collision,
            life_lost: collision.is_some(),
            game_over,
            level_changed: self.state.level != level_before,
            next_delay: self.state.running.then(|| self.level.tick_delay()),
        }
    }

    /// Request a new heading; reversals are rejected
    ///
    /// Returns true if the velocity was updated.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.state.velocity.direction.is_opposite(direction) {
            return false;
        }

        self.state.velocity = Velocity::new(direction, self.config.unit_size);
        true
    }

    /// Request a new heading by directional key code (37-40)
    pub fn handle_key_code(&mut self, code: u32) -> bool {
        match Direction::from_key_code(code) {
            Some(direction) => self.change_direction(direction),
            None => false,
        }
    }

    /// Restore a fresh game and start it again
    pub fn reset(&mut self, surface: &mut dyn Surface) -> GameResult<Duration> {
        self.state.score = 0;
        self.state.lives = self.config.initial_lives;
        self.state.level = 1;
        self.reset_snake();
        surface.show_score(self.state.score);
        surface.show_lives(self.state.lives);

        info!("Game reset");
        self.start(surface)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Parameters of the level currently in effect
    pub fn current_level(&self) -> Level {
        self.level
    }

    /// Number of loaded levels, if loading has happened
    pub fn level_count(&self) -> Option<usize> {
        self.levels.as_ref().map(LevelSet::len)
    }

    fn move_snake(&mut self, surface: &mut dyn Surface) -> bool {
        let new_head = self.state.snake.head().moved_with(self.state.velocity);
        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);

        if ate_food {
            self.state.score += self.level.food_points;
            surface.show_score(self.state.score);
            debug!(score = self.state.score, "Food eaten");
            self.place_food();

            if self.state.score % 5 == 0 {
                self.apply_level(self.state.level + 1);
            }
        }

        ate_food
    }

    fn draw_snake(&self, surface: &mut dyn Surface) {
        for &segment in &self.state.snake.body {
            surface.fill_cell(segment, Paint::Snake);
            surface.stroke_cell(segment);
        }
    }

    fn check_collision(&self) -> Option<CollisionType> {
        let head = self.state.snake.head();

        if !self.state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    fn reset_snake(&mut self) {
        self.state.velocity = Velocity::rightward(self.config.unit_size);
        self.state.snake = Snake::starting(self.config.initial_snake_length, self.config.unit_size);
    }

    fn apply_level(&mut self, index: usize) {
        let Some(levels) = &self.levels else {
            return;
        };

        let clamped = levels.clamp(index);
        if clamped != self.state.level {
            info!(level = clamped, "Level changed");
        }
        self.state.level = clamped;
        self.level = levels.get(clamped);
    }

    /// Food may land on the snake body; there is no exclusion check
    fn place_food(&mut self) {
        let unit = self.config.unit_size;
        let x = self.rng.gen_range(0..self.config.columns()) * unit;
        let y = self.rng.gen_range(0..self.config.rows()) * unit;
        self.state.food = Position::new(x, y);
    }
}
