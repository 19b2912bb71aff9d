//! Difficulty levels and the sources they are loaded from

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use crate::error::{GameError, GameResult};

/// One difficulty tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    /// Delay between ticks, in milliseconds
    pub speed: u64,
    /// Score awarded per food item
    pub food_points: u32,
}

impl Level {
    pub fn new(speed: u64, food_points: u32) -> Self {
        Self { speed, food_points }
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.speed)
    }
}

#[derive(Debug, Deserialize)]
struct LevelDocument {
    levels: Vec<Level>,
}

/// Ordered, non-empty list of levels addressed from 1
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSet {
    levels: Vec<Level>,
}

impl LevelSet {
    pub fn new(levels: Vec<Level>) -> GameResult<Self> {
        if levels.is_empty() {
            return Err(GameError::NoLevels);
        }
        for (i, level) in levels.iter().enumerate() {
            if level.speed == 0 {
                return Err(GameError::invalid_level(
                    i + 1,
                    "speed must be greater than 0",
                ));
            }
        }
        Ok(Self { levels })
    }

    /// Parse a level document of the form `{"levels": [{"speed", "foodPoints"}]}`
    pub fn from_json(json: &str) -> GameResult<Self> {
        let document: LevelDocument = serde_json::from_str(json)?;
        Self::new(document.levels)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Clamp a level number into `[1, len]`
    pub fn clamp(&self, index: usize) -> usize {
        index.clamp(1, self.levels.len())
    }

    /// Level by 1-based number, clamped to the available range
    pub fn get(&self, index: usize) -> Level {
        self.levels[self.clamp(index) - 1]
    }
}

/// Supplies the level list when a game starts
pub trait LevelSource {
    fn load_levels(&self) -> GameResult<LevelSet>;
}

/// Reads the level document from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileLevelSource {
    path: PathBuf,
}

impl JsonFileLevelSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LevelSource for JsonFileLevelSource {
    fn load_levels(&self) -> GameResult<LevelSet> {
        info!("Loading levels from: {:?}", self.path);

        let content = std::fs::read_to_string(&self.path).map_err(|source| GameError::LevelRead {
            path: self.path.clone(),
            source,
        })?;

        let levels = LevelSet::from_json(&content)?;
        info!("Loaded {} levels", levels.len());
        Ok(levels)
    }
}

/// Serves a fixed in-memory level list
#[derive(Debug, Clone)]
pub struct StaticLevelSource {
    levels: Vec<Level>,
}

impl StaticLevelSource {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }
}

impl LevelSource for StaticLevelSource {
    fn load_levels(&self) -> GameResult<LevelSet> {
        LevelSet::new(self.levels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn three_levels() -> LevelSet {
        LevelSet::new(vec![
            Level::new(150, 1),
            Level::new(100, 2),
            Level::new(50, 5),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_level_document() {
        let json = r#"{"levels": [
            {"speed": 120, "foodPoints": 1},
            {"speed": 80, "foodPoints": 3}
        ]}"#;
        let levels = LevelSet::from_json(json).unwrap();

        assert_eq!(levels.len(), 2);
        assert_eq!(levels.get(1), Level::new(120, 1));
        assert_eq!(levels.get(2), Level::new(80, 3));
    }

    #[test]
    fn test_level_lookup_is_clamped() {
        let levels = three_levels();
        assert_eq!(levels.get(0), Level::new(150, 1));
        assert_eq!(levels.get(3), Level::new(50, 5));
        assert_eq!(levels.get(10), Level::new(50, 5));
        assert_eq!(levels.clamp(4), 3);
        assert_eq!(levels.clamp(0), 1);
    }

    #[test]
    fn test_empty_document_is_rejected() {
        assert!(matches!(
            LevelSet::from_json(r#"{"levels": []}"#),
            Err(GameError::NoLevels)
        ));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        assert!(matches!(
            LevelSet::from_json(r#"{"levels": [{"speed": "fast"}]}"#),
            Err(GameError::LevelParse(_))
        ));
        assert!(matches!(
            LevelSet::from_json("not json"),
            Err(GameError::LevelParse(_))
        ));
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let result = LevelSet::new(vec![Level::new(100, 1), Level::new(0, 1)]);
        assert!(matches!(result, Err(GameError::InvalidLevel { index: 2, .. })));
    }

    #[test]
    fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"levels": [{{"speed": 200, "foodPoints": 1}}]}}"#).unwrap();

        let source = JsonFileLevelSource::new(file.path());
        let levels = source.load_levels().unwrap();
        assert_eq!(levels.get(1).tick_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_missing_file_source() {
        let source = JsonFileLevelSource::new("no/such/levels.json");
        assert!(matches!(
            source.load_levels(),
            Err(GameError::LevelRead { .. })
        ));
    }

    #[test]
    fn test_bundled_levels_parse() {
        let levels = LevelSet::from_json(include_str!("../../assets/levels.json")).unwrap();
        assert!(!levels.is_empty());
    }
}
