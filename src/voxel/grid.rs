//! Sparse voxel block store

use std::collections::{HashMap, HashSet};

use super::block::BlockType;
use super::coord::VoxelCoord;

/// Solid-voxel lookup used by collision code
///
/// Anything outside the populated region must simply answer `false`.
pub trait SolidQuery {
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool;
}

/// Sparse 3D block grid
///
/// Only non-empty voxels are stored; an absent key reads as
/// [`BlockType::Air`]. Alongside the block map the grid keeps the set of
/// solid coordinates (non-empty, non-liquid), updated on every [`set`].
///
/// [`set`]: VoxelGrid::set
#[derive(Clone, Debug, Default)]
pub struct VoxelGrid {
    blocks: HashMap<VoxelCoord, BlockType>,
    solid: HashSet<VoxelCoord>,
}

impl VoxelGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty grid with room for `capacity` voxels
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            blocks: HashMap::with_capacity(capacity),
            solid: HashSet::with_capacity(capacity),
        }
    }

    /// Block at (x, y, z); `Air` when unset
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.get_at(VoxelCoord::new(x, y, z))
    }

    /// Block at `coord`; `Air` when unset
    pub fn get_at(&self, coord: VoxelCoord) -> BlockType {
        self.blocks.get(&coord).copied().unwrap_or(BlockType::Air)
    }

    /// Write a block, returning the previous one
    ///
    /// Writing `Air` removes the entry so the grid stays sparse.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> BlockType {
        self.set_at(VoxelCoord::new(x, y, z), block)
    }

    /// Write a block at `coord`, returning the previous one
    pub fn set_at(&mut self, coord: VoxelCoord, block: BlockType) -> BlockType {
        let previous = if block.is_empty() {
            self.blocks.remove(&coord)
        } else {
            self.blocks.insert(coord, block)
        };

        if block.is_solid() {
            self.solid.insert(coord);
        } else {
            self.solid.remove(&coord);
        }

        previous.unwrap_or(BlockType::Air)
    }

    /// O(1) solid membership test
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.solid.contains(&VoxelCoord::new(x, y, z))
    }

    /// O(1) solid membership test by coordinate
    pub fn is_solid_at(&self, coord: VoxelCoord) -> bool {
        self.solid.contains(&coord)
    }

    /// Recompute the solid set from the block map
    pub fn rebuild_solid_index(&mut self) {
        self.solid.clear();
        self.solid.extend(
            self.blocks
                .iter()
                .filter(|(_, block)| block.is_solid())
                .map(|(coord, _)| *coord),
        );
    }

    /// Number of stored (non-empty) voxels
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// True when nothing is stored
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of solid voxels
    pub fn solid_count(&self) -> usize {
        self.solid.len()
    }

    /// Number of stored voxels of one type
    pub fn count_of(&self, block: BlockType) -> usize {
        self.blocks.values().filter(|&&b| b == block).count()
    }

    /// Remove every voxel
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.solid.clear();
    }

    /// Unordered iteration over stored voxels
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoord, BlockType)> + '_ {
        self.blocks.iter().map(|(c, b)| (*c, *b))
    }

    /// Stored voxels in (x, y, z) order
    pub fn sorted(&self) -> Vec<(VoxelCoord, BlockType)> {
        let mut voxels: Vec<_> = self.iter().collect();
        voxels.sort_unstable_by_key(|(coord, _)| *coord);
        voxels
    }

    /// Topmost solid voxel in the column at (x, z)
    pub fn highest_solid(&self, x: i32, z: i32) -> Option<i32> {
        self.solid
            .iter()
            .filter(|c| c.x == x && c.z == z)
            .map(|c| c.y)
            .max()
    }

    /// Check that the solid set matches the block map exactly
    pub fn solid_index_consistent(&self) -> bool {
        self.blocks.values().all(|b| !b.is_empty())
            && self.solid.len() == self.blocks.values().filter(|b| b.is_solid()).count()
            && self.solid.iter().all(|c| self.get_at(*c).is_solid())
    }
}

impl PartialEq for VoxelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl Eq for VoxelGrid {}

impl SolidQuery for VoxelGrid {
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.solid.contains(&VoxelCoord::new(x, y, z))
    }
}
