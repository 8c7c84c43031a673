use serde::{Deserialize, Serialize};

use crate::board::{Board, Difficulty, WireMode};
use crate::error::ConfigError;

/// Settings for a game session. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pieces (default: 6).
    pub width: usize,
    /// Board height in pieces (default: 6).
    pub height: usize,
    /// Edge-weight distribution for maze generation (default: easy).
    pub difficulty: Difficulty,
    /// Orthogonal or extended (diagonal) wiring.
    pub mode: WireMode,
    /// Whether the power radius cap is enforced (default: off).
    pub radius_enabled: bool,
    /// Seed for the first board; later boards reseed from the stream.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 6,
            height: 6,
            difficulty: Difficulty::Easy,
            mode: WireMode::Orthogonal,
            radius_enabled: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Board::check_dimensions(self.width, self.height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "width": 4, "mode": "extended" }"#).unwrap();
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 6);
        assert_eq!(config.mode, WireMode::Extended);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert!(!config.radius_enabled);
    }

    #[test]
    fn rejects_zero_width() {
        let err = GameConfig::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Board(_)));
    }

    #[test]
    fn rejects_bad_json() {
        let err = GameConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn difficulty_by_name() {
        let config = GameConfig::from_json(r#"{ "difficulty": "hard", "seed": 7 }"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, 7);
    }
}
