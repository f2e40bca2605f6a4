//! Scene configuration for the demo world

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::core::types::DVec3;
use crate::physics::PhysicsConfig;
use crate::terrain::generator::TerrainParams;

/// Everything needed to stand up a playable world
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Terrain generation parameters
    pub terrain: TerrainParams,
    /// Movement and collision tuning
    pub physics: PhysicsConfig,
    /// Initial body center
    pub spawn: DVec3,
    /// Longest distance a block can be broken or placed at
    pub reach: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            terrain: TerrainParams::default(),
            physics: PhysicsConfig::default(),
            spawn: DVec3::new(32.5, 40.0, 32.5),
            reach: 6.0,
        }
    }
}

impl SceneConfig {
    /// Save to file as pretty JSON
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file; missing fields take their defaults
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("Loaded scene config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SceneConfig::default();
        assert_eq!(config.terrain.width, 64);
        assert_eq!(config.terrain.seed, "vox-demo-seed");
        assert_eq!(config.spawn, DVec3::new(32.5, 40.0, 32.5));
        assert_eq!(config.reach, 6.0);
        assert_eq!(config.physics.gravity, 18.0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("configs").join("scene.json");

        let mut config = SceneConfig::default();
        config.terrain.seed = "saved".into();
        config.reach = 4.5;
        config.save_sync(&path).expect("save failed");

        let loaded = SceneConfig::load_sync(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("partial.json");
        std::fs::write(&path, r#"{ "terrain": { "seed": "partial" }, "physics": { "gravity": 9.8 } }"#).unwrap();

        let config = SceneConfig::load_sync(&path).expect("load failed");
        assert_eq!(config.terrain.seed, "partial");
        assert_eq!(config.terrain.width, 64);
        assert_eq!(config.physics.gravity, 9.8);
        assert_eq!(config.physics.move_speed, 6.0);
        assert_eq!(config.reach, 6.0);
    }

    #[test]
    fn test_bad_json_is_error() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(matches!(SceneConfig::load_sync(&path), Err(Error::Json(_))));
    }
}
