//! Configuration types for maze generation.

use crate::error::{Error, Result};
use crate::types::ExitPlacement;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Generator knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Probability that an inner wall pair is placed (0.0 to 1.0)
    pub inner_wall_density: f32,
    /// How the exit is positioned along its edge
    pub exit_placement: ExitPlacement,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            inner_wall_density: 1.0,
            exit_placement: ExitPlacement::FixedMidpoint,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.inner_wall_density) {
            return Err(Error::InvalidConfig(format!(
                "inner_wall_density must be within [0, 1], got {}",
                self.inner_wall_density
            )));
        }
        Ok(())
    }
}

/// A maze request: requested size, seed and generator knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Requested row count (raised to the minimum size when smaller)
    pub rows: i32,
    /// Requested column count (raised to the minimum size when smaller)
    pub cols: i32,
    /// Random seed for reproducibility, drawn fresh when absent
    pub seed: Option<u64>,
    pub generator: GeneratorConfig,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            seed: None,
            generator: GeneratorConfig::default(),
        }
    }
}

impl MazeConfig {
    /// Load a config from a JSON file. Missing fields fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config: MazeConfig = serde_json::from_str(&contents)?;
        debug!(path = %path.display(), ?config, "Loaded maze config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let generator = GeneratorConfig::default();
        assert_eq!(generator.inner_wall_density, 1.0);
        assert_eq!(generator.exit_placement, ExitPlacement::FixedMidpoint);

        let maze = MazeConfig::default();
        assert_eq!(maze.rows, 15);
        assert_eq!(maze.cols, 15);
        assert!(maze.seed.is_none());
    }

    #[test]
    fn test_density_validation() {
        let mut config = GeneratorConfig::default();
        assert!(config.validate().is_ok());

        config.inner_wall_density = 0.0;
        assert!(config.validate().is_ok());

        config.inner_wall_density = 1.5;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        config.inner_wall_density = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: MazeConfig =
            serde_json::from_str(r#"{"rows": 9, "generator": {"exit_placement": "random-along-edge"}}"#)
                .unwrap();
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 15);
        assert_eq!(config.generator.inner_wall_density, 1.0);
        assert_eq!(config.generator.exit_placement, ExitPlacement::RandomAlongEdge);
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!("maze-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"rows": 7, "cols": 11, "seed": 42}"#).unwrap();

        let config = MazeConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.rows, 7);
        assert_eq!(config.cols, 11);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_missing_file() {
        let result = MazeConfig::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
