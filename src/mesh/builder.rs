//! Face-culled instance batches and ray picking against them

use std::collections::BTreeMap;
use std::time::Instant;

use super::batch::MeshBatch;
use crate::core::types::{DVec3, IVec3};
use crate::math::{Aabb, Ray};
use crate::voxel::block::BlockType;
use crate::voxel::coord::{FACE_NEIGHBORS, VoxelCoord};
use crate::voxel::grid::VoxelGrid;

/// Counts from the last rebuild
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeshStats {
    /// Voxels with at least one exposed face
    pub visible: usize,
    /// Voxels fully enclosed by solid neighbours
    pub hidden: usize,
    /// Number of non-empty batches
    pub batches: usize,
}

/// Result of a ray pick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockHit {
    /// Type of the struck block
    pub block: BlockType,
    /// Voxel coordinate recovered from the instance center
    pub voxel: VoxelCoord,
    /// Instance index within the block type's batch
    pub instance: usize,
    /// Ray parameter of the entry point
    pub distance: f64,
    /// Entry point in world space
    pub point: DVec3,
    /// Outward normal of the struck face
    pub normal: IVec3,
}

/// Instance batches for a whole world, one per block type
///
/// Rebuilt wholesale from the grid; nothing is diffed.
#[derive(Clone, Debug, Default)]
pub struct WorldMesh {
    batches: BTreeMap<BlockType, MeshBatch>,
    stats: MeshStats,
    rebuilds: u64,
}

impl WorldMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and build in one step
    pub fn from_grid(grid: &VoxelGrid) -> Self {
        let mut mesh = Self::new();
        mesh.build(grid);
        mesh
    }

    /// Whether a voxel shows at least one face
    ///
    /// A face is exposed when the neighbour across it is empty or liquid.
    /// Faces on the edge of the coordinate range have no neighbour and are
    /// always exposed.
    pub fn is_exposed(grid: &VoxelGrid, coord: VoxelCoord) -> bool {
        FACE_NEIGHBORS.into_iter().any(|(dx, dy, dz)| {
            coord
                .checked_offset(dx, dy, dz)
                .is_none_or(|n| grid.get_at(n).exposes_neighbor())
        })
    }

    /// Clear every batch and rescan the grid
    pub fn build(&mut self, grid: &VoxelGrid) -> MeshStats {
        let start = Instant::now();
        self.batches.clear();
        let mut stats = MeshStats::default();

        for (coord, block) in grid.sorted() {
            if !Self::is_exposed(grid, coord) {
                stats.hidden += 1;
                continue;
            }
            self.batches
                .entry(block)
                .or_insert_with(|| MeshBatch::new(block))
                .push(coord);
            stats.visible += 1;
        }

        stats.batches = self.batches.len();
        self.stats = stats;
        self.rebuilds += 1;
        log::debug!(
            "Mesh rebuild #{}: {} visible, {} hidden, {} batches in {:.2}ms",
            self.rebuilds,
            stats.visible,
            stats.hidden,
            stats.batches,
            start.elapsed().as_secs_f64() * 1000.0,
        );
        stats
    }

    /// Stats from the last rebuild
    pub fn stats(&self) -> MeshStats {
        self.stats
    }

    /// How many times `build` has run
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Batch for one block type
    pub fn batch(&self, block: BlockType) -> Option<&MeshBatch> {
        self.batches.get(&block)
    }

    /// All batches, in block-type order
    pub fn batches(&self) -> impl Iterator<Item = &MeshBatch> {
        self.batches.values()
    }

    /// Total instances across batches
    pub fn instance_count(&self) -> usize {
        self.batches.values().map(MeshBatch::len).sum()
    }

    /// Whether a voxel appears in any batch
    pub fn contains(&self, coord: VoxelCoord) -> bool {
        let center = coord.center();
        self.batches
            .values()
            .any(|batch| batch.centers().contains(&center))
    }

    /// Nearest instance the ray enters within `max_distance`
    ///
    /// Every instance is tested as a unit box around its center. Only front
    /// faces count, so the box the ray starts in is skipped. On equal
    /// distances the earlier batch/instance wins.
    pub fn raycast(&self, ray: &Ray, max_distance: f64) -> Option<BlockHit> {
        let mut best: Option<(f64, BlockType, usize)> = None;

        for batch in self.batches.values() {
            for (index, center) in batch.centers().iter().enumerate() {
                let aabb = Aabb::from_center_half_extent(*center, DVec3::splat(0.5));
                let Some(t_near) = ray.entry_distance(&aabb) else {
                    continue;
                };
                if t_near > max_distance {
                    continue;
                }
                if best.is_none_or(|(t, _, _)| t_near < t) {
                    best = Some((t_near, batch.block(), index));
                }
            }
        }

        let (distance, block, instance) = best?;
        let center = self.batches[&block].centers()[instance];
        let point = ray.at(distance);
        Some(BlockHit {
            block,
            voxel: VoxelCoord::from_center(center),
            instance,
            distance,
            point,
            normal: face_normal(point - center),
        })
    }
}

/// Axis of the largest offset from a cube center, as a unit normal
fn face_normal(offset: DVec3) -> IVec3 {
    let a = offset.abs();
    if a.x >= a.y && a.x >= a.z {
        IVec3::new(offset.x.signum() as i32, 0, 0)
    } else if a.y >= a.z {
        IVec3::new(0, offset.y.signum() as i32, 0)
    } else {
        IVec3::new(0, 0, offset.z.signum() as i32)
    }
}
