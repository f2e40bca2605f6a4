//! Block type tags

use serde::{Deserialize, Serialize};

/// Block type stored at a voxel coordinate
///
/// `Air` is the empty tag and is never stored in a grid. `Water` is a
/// liquid: rendered but not collidable.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Air = 0,
    Grass,
    Dirt,
    Stone,
    /// Tree trunk
    Log,
    /// Tree canopy
    Plank,
    Sand,
    Water,
}

impl BlockType {
    /// Every block type, in tag order
    pub const ALL: [BlockType; 8] = [
        BlockType::Air,
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Log,
        BlockType::Plank,
        BlockType::Sand,
        BlockType::Water,
    ];

    /// Blocks a player can place from the hotbar
    pub const ALL_PLACEABLE: [BlockType; 5] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Log,
        BlockType::Plank,
    ];

    /// Check if this is the empty tag
    pub fn is_empty(self) -> bool {
        self == BlockType::Air
    }

    /// Check if this block is a liquid
    pub fn is_liquid(self) -> bool {
        self == BlockType::Water
    }

    /// Check if this block participates in collision
    pub fn is_solid(self) -> bool {
        !self.is_empty() && !self.is_liquid()
    }

    /// Whether a face next to this block is exposed for rendering
    pub fn exposes_neighbor(self) -> bool {
        !self.is_solid()
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Air => "air",
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Log => "log",
            BlockType::Plank => "plank",
            BlockType::Sand => "sand",
            BlockType::Water => "water",
        }
    }

    /// Look up a block by its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<BlockType> {
        Self::ALL.into_iter().find(|b| b.name() == name)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
