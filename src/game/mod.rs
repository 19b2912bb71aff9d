//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal dependencies.
//! Drawing goes through the [`Surface`] trait and levels come from a
//! [`LevelSource`], so the engine can be driven from tests as easily as from
//! the terminal front end.

pub mod action;
pub mod config;
pub mod engine;
pub mod level;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use action::{Direction, Velocity};
pub use config::GameConfig;
pub use engine::{GameEngine, TickOutcome};
pub use level::{JsonFileLevelSource, Level, LevelSet, LevelSource, StaticLevelSource};
pub use state::{CollisionType, GameState, Position, Snake};
pub use surface::{Paint, Surface, GAME_OVER_TEXT};
