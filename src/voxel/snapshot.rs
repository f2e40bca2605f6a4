//! World snapshots: generation parameters plus the edit log
//!
//! Terrain is a pure function of its parameters, so a snapshot stores only
//! those and the blocks changed afterwards. Player stats, inventory and
//! position belong to the caller's own save data.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::block::BlockType;
use super::coord::VoxelCoord;
use crate::core::{Error, Result};
use crate::terrain::generator::TerrainParams;

/// Current version of the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// File extension for snapshot files
pub const SNAPSHOT_FILE_EXTENSION: &str = "voxsnap.json";

/// A single recorded block write
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEdit {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub block: BlockType,
}

impl BlockEdit {
    pub fn new(coord: VoxelCoord, block: BlockType) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
            z: coord.z,
            block,
        }
    }

    pub fn coord(&self) -> VoxelCoord {
        VoxelCoord::new(self.x, self.y, self.z)
    }
}

/// Serializable world state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Format version for compatibility
    pub version: u32,
    /// Parameters the terrain regenerates from
    pub params: TerrainParams,
    /// Edits in coordinate order, one per coordinate
    pub edits: Vec<BlockEdit>,
}

impl WorldSnapshot {
    /// Create a snapshot at the current format version
    pub fn new(params: TerrainParams, edits: Vec<BlockEdit>) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            params,
            edits,
        }
    }

    /// Reject snapshots this build cannot replay
    pub fn validate(&self) -> Result<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(Error::Snapshot(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }
        Ok(())
    }

    /// Save to file as pretty JSON, creating parent directories
    pub fn save_sync(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        log::info!("Saved snapshot with {} edits to {}", self.edits.len(), path.display());
        Ok(())
    }

    /// Load from file and validate the version
    pub fn load_sync(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let snapshot: WorldSnapshot = serde_json::from_str(&json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
