//! Per-block-type instance lists

use crate::core::types::{DVec3, Vec3};
use crate::voxel::block::BlockType;
use crate::voxel::coord::VoxelCoord;

/// All visible voxels of one block type, drawn as one instanced call
///
/// Each instance is the world-space center of a unit cube. The batch holds
/// exactly one entry per visible voxel, in (x, y, z) order. Centers are kept
/// exact in f64; the f32 copy exists only for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshBatch {
    block: BlockType,
    centers: Vec<DVec3>,
    upload: Vec<Vec3>,
}

impl MeshBatch {
    /// Create an empty batch
    pub fn new(block: BlockType) -> Self {
        Self {
            block,
            centers: Vec::new(),
            upload: Vec::new(),
        }
    }

    /// Block type drawn by this batch
    pub fn block(&self) -> BlockType {
        self.block
    }

    /// Append the instance for a voxel
    pub fn push(&mut self, coord: VoxelCoord) {
        let center = coord.center();
        self.centers.push(center);
        self.upload.push(center.as_vec3());
    }

    /// Exact instance centers
    pub fn centers(&self) -> &[DVec3] {
        &self.centers
    }

    /// Number of instances (the draw call's instance count)
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Voxel coordinate of instance `index`
    pub fn voxel(&self, index: usize) -> Option<VoxelCoord> {
        self.centers.get(index).map(|&c| VoxelCoord::from_center(c))
    }

    /// Tightly packed xyz f32 triples, ready for an instance buffer upload
    ///
    /// Precision is whatever f32 holds; picking never reads these.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.upload)
    }
}
