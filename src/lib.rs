//! Level Snake - a terminal Snake game with levels and lives
//!
//! This library provides:
//! - Core game logic: tick state machine, collisions, levels, lives (game module)
//! - Terminal rendering through an in-memory board (render module)
//! - Keyboard input mapping (input module)
//! - The interactive terminal mode (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

pub use error::{GameError, GameResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
