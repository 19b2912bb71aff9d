use std::path::PathBuf;
use thiserror::Error;

pub type GameResult<T> = Result<T, GameError>;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Failed to read level document {path:?}: {source}")]
    LevelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse level document: {0}")]
    LevelParse(#[from] serde_json::Error),

    #[error("Level document contains no levels")]
    NoLevels,

    #[error("Invalid level {index}: {reason}")]
    InvalidLevel { index: usize, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GameError {
    pub fn invalid_level<S: Into<String>>(index: usize, reason: S) -> Self {
        Self::InvalidLevel {
            index,
            reason: reason.into(),
        }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_message() {
        let error = GameError::invalid_level(2, "speed must be greater than 0");
        assert!(matches!(error, GameError::InvalidLevel { index: 2, .. }));
        assert_eq!(
            error.to_string(),
            "Invalid level 2: speed must be greater than 0"
        );
    }

    #[test]
    fn test_configuration_message() {
        let error = GameError::configuration("unit size must be greater than 0");
        assert_eq!(
            error.to_string(),
            "Configuration error: unit size must be greater than 0"
        );
    }
}
