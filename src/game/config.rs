use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GameError, GameResult};

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in pixels
    pub board_width: i32,
    /// Height of the board in pixels
    pub board_height: i32,
    /// Edge length of one grid cell in pixels
    pub unit_size: i32,
    /// Lives at the start of a game
    pub initial_lives: u32,
    /// Number of segments the snake starts with
    pub initial_snake_length: usize,
    /// Location of the level document
    pub levels_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 500,
            board_height: 500,
            unit_size: 25,
            initial_lives: 3,
            initial_snake_length: 4,
            levels_path: PathBuf::from("assets/levels.json"),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size in pixels
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board_width: width,
            board_height: height,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(250, 250)
    }

    /// Whole cells across the board; 0 when the unit size is not positive
    pub fn columns(&self) -> i32 {
        if self.unit_size > 0 {
            self.board_width / self.unit_size
        } else {
            0
        }
    }

    pub fn rows(&self) -> i32 {
        if self.unit_size > 0 {
            self.board_height / self.unit_size
        } else {
            0
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            GameError::configuration(format!(
                "Failed to read config file {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;

        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.unit_size <= 0 {
            return Err(GameError::configuration("Unit size must be greater than 0"));
        }
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(GameError::configuration(
                "Board dimensions must be greater than 0",
            ));
        }
        if self.board_width % self.unit_size != 0 || self.board_height % self.unit_size != 0 {
            return Err(GameError::configuration(
                "Board dimensions must be multiples of the unit size",
            ));
        }
        if self.initial_lives == 0 {
            return Err(GameError::configuration("Initial lives must be at least 1"));
        }
        if self.initial_snake_length == 0 {
            return Err(GameError::configuration(
                "Initial snake length must be at least 1",
            ));
        }
        if self.initial_snake_length as i32 > self.columns() {
            return Err(GameError::configuration(
                "Initial snake does not fit on the board",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 500);
        assert_eq!(config.board_height, 500);
        assert_eq!(config.unit_size, 25);
        assert_eq!(config.initial_lives, 3);
        assert_eq!(config.initial_snake_length, 4);
        assert_eq!(config.columns(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(300, 200);
        assert_eq!(config.columns(), 12);
        assert_eq!(config.rows(), 8);
    }

    #[test]
    fn test_zero_unit_has_no_cells() {
        let config = GameConfig {
            unit_size: 0,
            ..Default::default()
        };
        assert_eq!((config.columns(), config.rows()), (0, 0));
    }

    #[test]
    fn test_board_smaller_than_a_cell_is_rejected() {
        let config = GameConfig::new(10, 10);
        assert!(matches!(
            config.validate(),
            Err(GameError::Configuration { .. })
        ));
    }

    #[test]
    fn test_validation_rejects_misaligned_board() {
        let config = GameConfig::new(510, 500);
        assert!(config.validate().is_err());

        let config = GameConfig {
            unit_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_lives: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_snake_length: 21,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board_width = 300\nboard_height = 300").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.board_width, 300);
        assert_eq!(config.unit_size, 25);
        assert_eq!(config.initial_lives, 3);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "board_width = \"wide\"").unwrap();

        assert!(matches!(
            GameConfig::from_file(file.path()),
            Err(GameError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = GameConfig::from_file("does/not/exist.toml");
        assert!(matches!(result, Err(GameError::Configuration { .. })));
    }
}
