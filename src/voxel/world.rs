//! World facade: generation, queries and edits

use std::collections::BTreeMap;

use super::block::BlockType;
use super::coord::VoxelCoord;
use super::grid::{SolidQuery, VoxelGrid};
use super::snapshot::{BlockEdit, WorldSnapshot};
use crate::core::Result;
use crate::terrain::generator::{GenerationStats, TerrainGenerator, TerrainParams};

/// One voxel world session
///
/// Owns the generator (and with it the noise state), the block grid and a
/// log of every edit made after generation. Meshes are not rebuilt here:
/// whoever calls [`set_block`](Self::set_block) rebuilds render state.
#[derive(Clone, Debug)]
pub struct VoxelWorld {
    generator: TerrainGenerator,
    grid: VoxelGrid,
    /// Last block written per coordinate through `set_block`
    edits: BTreeMap<VoxelCoord, BlockType>,
    generated: bool,
}

impl VoxelWorld {
    /// Create an empty world for the given parameters
    pub fn new(params: TerrainParams) -> Self {
        Self {
            generator: TerrainGenerator::new(params),
            grid: VoxelGrid::new(),
            edits: BTreeMap::new(),
            generated: false,
        }
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        self.generator.params()
    }

    /// Get the terrain generator
    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    /// Read access to the block grid
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Populate the grid from the terrain parameters
    ///
    /// Meant to be called once. A second call rewrites the same terrain
    /// over whatever is there, clobbering edits inside the terrain volume.
    pub fn generate(&mut self) -> GenerationStats {
        if self.generated {
            log::warn!("VoxelWorld::generate called twice; terrain will overwrite existing blocks");
        }
        let stats = self.generator.generate_into(&mut self.grid);
        self.generated = true;
        stats
    }

    /// Whether `generate` has run
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    /// Block at (x, y, z); `Air` anywhere unset, including outside the generated region
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockType {
        self.grid.get(x, y, z)
    }

    /// Whether the voxel at (x, y, z) blocks movement
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.grid.is_solid(x, y, z)
    }

    /// Write a block and record the edit, returning the previous block
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockType) -> BlockType {
        let coord = VoxelCoord::new(x, y, z);
        self.edits.insert(coord, block);
        let previous = self.grid.set_at(coord, block);
        log::debug!("set_block {} {} -> {}", coord, previous, block);
        previous
    }

    /// Edits since generation, in coordinate order
    pub fn edits(&self) -> impl Iterator<Item = (VoxelCoord, BlockType)> + '_ {
        self.edits.iter().map(|(c, b)| (*c, *b))
    }

    /// Number of distinct edited coordinates
    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    /// Capture parameters and edits
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot::new(
            self.params().clone(),
            self.edits().map(|(coord, block)| BlockEdit::new(coord, block)).collect(),
        )
    }

    /// Rebuild a world by regenerating from the snapshot parameters and
    /// replaying its edits
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Result<Self> {
        snapshot.validate()?;
        let mut world = Self::new(snapshot.params.clone());
        world.generate();
        for edit in &snapshot.edits {
            world.set_block(edit.x, edit.y, edit.z, edit.block);
        }
        log::info!("Restored world {:?} with {} edits", snapshot.params.seed, snapshot.edits.len());
        Ok(world)
    }
}

impl SolidQuery for VoxelWorld {
    fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        self.grid.is_solid(x, y, z)
    }
}
