//! Height-field terrain with scattered trees

use std::time::Instant;

use noise::NoiseFn;
use serde::{Deserialize, Serialize};

use super::simplex::SeededSimplex;
use crate::voxel::block::BlockType;
use crate::voxel::grid::VoxelGrid;

/// Horizontal divisor for the height field
const HEIGHT_NOISE_SCALE: f64 = 30.0;
/// Horizontal divisor for the tree field
const TREE_NOISE_SCALE: f64 = 12.0;
/// Tree field sample offset, keeps it decorrelated from the height field
const TREE_NOISE_OFFSET: (f64, f64) = (1000.0, -500.0);
/// Tree field value a column must exceed to grow a tree
pub const TREE_THRESHOLD: f64 = 0.68;
/// Lowest possible column height
pub const MIN_COLUMN_HEIGHT: i32 = 6;
/// Trunk voxels stacked above the grass
pub const TRUNK_HEIGHT: i32 = 4;
/// Canopy half-extent in x and z
const CANOPY_RADIUS: i32 = 2;
/// Canopy layers, relative to the column height
const CANOPY_LAYERS: std::ops::RangeInclusive<i32> = 3..=5;
/// Manhattan cutoff for canopy voxels
const CANOPY_CUTOFF: i32 = 4;

/// Upper bound on the grid capacity reserved before generating
const MAX_PREALLOCATED_VOXELS: usize = 1 << 22;

/// Parameters that fully determine a generated world
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    /// Columns along X, generated for 0..width
    pub width: i32,
    /// Columns along Z, generated for 0..depth
    pub depth: i32,
    /// Column heights stay below this; trees need headroom under it
    pub max_height: i32,
    /// Seed string hashed into the noise permutation
    pub seed: String,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            width: 64,
            depth: 64,
            max_height: 32,
            seed: "vox-demo-seed".to_string(),
        }
    }
}

/// Summary of one generation pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub columns: usize,
    pub trees: usize,
    pub voxels: usize,
}

/// Deterministic terrain generator
///
/// Owns its noise source, so several generators (and worlds) can coexist
/// without sharing random state.
#[derive(Clone, Debug)]
pub struct TerrainGenerator {
    params: TerrainParams,
    noise: SeededSimplex,
}

impl TerrainGenerator {
    /// Create a new terrain generator with the given parameters
    pub fn new(params: TerrainParams) -> Self {
        let noise = SeededSimplex::from_seed_str(&params.seed);
        Self { params, noise }
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Get the noise source
    pub fn noise(&self) -> &SeededSimplex {
        &self.noise
    }

    /// Height-field noise for column (x, z), in [-1, 1]
    pub fn height_noise(&self, x: i32, z: i32) -> f64 {
        self.noise.get([x as f64 / HEIGHT_NOISE_SCALE, z as f64 / HEIGHT_NOISE_SCALE])
    }

    /// Tree-field noise for column (x, z), in [-1, 1]
    pub fn tree_noise(&self, x: i32, z: i32) -> f64 {
        let (ox, oz) = TREE_NOISE_OFFSET;
        self.noise.get([
            (x as f64 + ox) / TREE_NOISE_SCALE,
            (z as f64 + oz) / TREE_NOISE_SCALE,
        ])
    }

    /// Y of the grass voxel topping column (x, z)
    pub fn column_height(&self, x: i32, z: i32) -> i32 {
        let n = self.height_noise(x, z);
        let span = (self.params.max_height - 8) as f64;
        ((n * 0.5 + 0.5) * span).floor() as i32 + MIN_COLUMN_HEIGHT
    }

    /// Whether a tree grows on the column of the given height
    pub fn has_tree(&self, x: i32, z: i32, height: i32) -> bool {
        self.tree_noise(x, z) > TREE_THRESHOLD && height + TRUNK_HEIGHT + 1 < self.params.max_height
    }

    /// Block for layer `y` of a column topped at `height`
    pub fn column_block(y: i32, height: i32) -> BlockType {
        if y == height {
            BlockType::Grass
        } else if y > height - 3 {
            BlockType::Dirt
        } else {
            BlockType::Stone
        }
    }

    /// Generate a fresh grid
    pub fn generate(&self) -> VoxelGrid {
        let mut grid = VoxelGrid::with_capacity(self.estimated_voxels());
        self.generate_into(&mut grid);
        grid
    }

    /// Populate `grid`, column by column in increasing x then z
    ///
    /// Trees are stamped as soon as their column is filled, so canopies
    /// overwrite earlier columns and are overwritten by later ones. The
    /// result depends only on the parameters.
    pub fn generate_into(&self, grid: &mut VoxelGrid) -> GenerationStats {
        let start = Instant::now();
        let mut stats = GenerationStats::default();

        for x in 0..self.params.width {
            for z in 0..self.params.depth {
                let height = self.column_height(x, z);
                for y in 0..=height {
                    grid.set(x, y, z, Self::column_block(y, height));
                }
                stats.columns += 1;

                if self.has_tree(x, z, height) {
                    self.stamp_tree(grid, x, z, height);
                    stats.trees += 1;
                }
            }
        }

        stats.voxels = grid.len();
        log::info!(
            "Generated {}x{} terrain (seed {:?}): {} voxels, {} trees in {:.1}ms",
            self.params.width,
            self.params.depth,
            self.params.seed,
            stats.voxels,
            stats.trees,
            start.elapsed().as_secs_f64() * 1000.0,
        );
        stats
    }

    /// Trunk above the column, then a diamond canopy clipped to the world bounds
    fn stamp_tree(&self, grid: &mut VoxelGrid, x: i32, z: i32, height: i32) {
        for ty in 1..=TRUNK_HEIGHT {
            grid.set(x, height + ty, z, BlockType::Log);
        }

        for dx in -CANOPY_RADIUS..=CANOPY_RADIUS {
            for dz in -CANOPY_RADIUS..=CANOPY_RADIUS {
                for dy in CANOPY_LAYERS {
                    let top_layer = if dy == *CANOPY_LAYERS.end() { 1 } else { 0 };
                    if dx.abs() + dz.abs() + top_layer > CANOPY_CUTOFF {
                        continue;
                    }
                    let (px, pz) = (x + dx, z + dz);
                    if self.in_bounds(px, pz) {
                        grid.set(px, height + dy, pz, BlockType::Plank);
                    }
                }
            }
        }
    }

    /// Whether column (x, z) lies inside the generated region
    pub fn in_bounds(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && x < self.params.width && z < self.params.depth
    }

    /// Preallocation hint for the grid, capped so huge regions do not
    /// reserve memory up front
    fn estimated_voxels(&self) -> usize {
        let width = self.params.width.max(0) as usize;
        let depth = self.params.depth.max(0) as usize;
        let per_column = self.params.max_height.max(0) as usize / 2 + 1;
        width
            .saturating_mul(depth)
            .saturating_mul(per_column)
            .min(MAX_PREALLOCATED_VOXELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> TerrainGenerator {
        TerrainGenerator::new(TerrainParams::default())
    }

    #[test]
    fn test_terrain_params_default() {
        let params = TerrainParams::default();
        assert_eq!(params.width, 64);
        assert_eq!(params.depth, 64);
        assert_eq!(params.max_height, 32);
        assert_eq!(params.seed, "vox-demo-seed");
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: TerrainParams = serde_json::from_str(r#"{"seed": "abc"}"#).unwrap();
        assert_eq!(params.seed, "abc");
        assert_eq!(params.width, 64);
    }

    #[test]
    fn test_noise_fields_match_sampler() {
        let generator = demo();
        let noise = generator.noise();
        for (x, z) in [(0, 0), (5, 7), (63, 63), (-40, 12)] {
            let h = noise.sample(x as f64 / HEIGHT_NOISE_SCALE, z as f64 / HEIGHT_NOISE_SCALE);
            assert_eq!(generator.height_noise(x, z), h);
            let t = noise.sample((x as f64 + 1000.0) / 12.0, (z as f64 - 500.0) / 12.0);
            assert_eq!(generator.tree_noise(x, z), t);
        }
    }

    #[test]
    fn test_capacity_hint_for_huge_region() {
        let generator = TerrainGenerator::new(TerrainParams {
            width: 100_000,
            depth: 100_000,
            max_height: i32::MAX,
            seed: "huge".into(),
        });
        assert_eq!(generator.estimated_voxels(), MAX_PREALLOCATED_VOXELS);

        let empty = TerrainGenerator::new(TerrainParams {
            width: -5,
            depth: 10,
            ..TerrainParams::default()
        });
        assert_eq!(empty.estimated_voxels(), 0);
        assert!(empty.generate().is_empty());
    }

    #[test]
    fn test_column_height_golden_values() {
        let generator = demo();
        assert_eq!(generator.column_height(0, 0), 18);
        assert_eq!(generator.column_height(5, 7), 24);
        assert_eq!(generator.column_height(32, 32), 22);
        assert_eq!(generator.column_height(63, 63), 22);
    }

    #[test]
    fn test_column_height_in_range() {
        let generator = demo();
        let max_height = generator.params().max_height;
        for x in 0..64 {
            for z in 0..64 {
                let h = generator.column_height(x, z);
                assert!((MIN_COLUMN_HEIGHT..=max_height - 2).contains(&h), "h={h} at ({x},{z})");
            }
        }
    }

    #[test]
    fn test_column_block_layers() {
        assert_eq!(TerrainGenerator::column_block(10, 10), BlockType::Grass);
        assert_eq!(TerrainGenerator::column_block(9, 10), BlockType::Dirt);
        assert_eq!(TerrainGenerator::column_block(8, 10), BlockType::Dirt);
        assert_eq!(TerrainGenerator::column_block(7, 10), BlockType::Stone);
        assert_eq!(TerrainGenerator::column_block(0, 10), BlockType::Stone);
    }

    #[test]
    fn test_demo_world_golden_counts() {
        let generator = demo();
        let mut grid = VoxelGrid::new();
        let stats = generator.generate_into(&mut grid);

        assert_eq!(stats.columns, 64 * 64);
        assert_eq!(stats.trees, 137);
        assert_eq!(stats.voxels, 81_677);
        assert_eq!(grid.count_of(BlockType::Stone), 65_870);
        assert_eq!(grid.count_of(BlockType::Dirt), 8_168);
        assert_eq!(grid.count_of(BlockType::Grass), 4_026);
        assert_eq!(grid.count_of(BlockType::Plank), 3_456);
        assert_eq!(grid.count_of(BlockType::Log), 157);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = TerrainParams {
            width: 24,
            depth: 20,
            max_height: 28,
            seed: "determinism".to_string(),
        };
        let a = TerrainGenerator::new(params.clone()).generate();
        let b = TerrainGenerator::new(params).generate();
        assert_eq!(a, b);
        assert_eq!(a.sorted(), b.sorted());
    }

    #[test]
    fn test_different_seeds_produce_different_worlds() {
        let a = TerrainGenerator::new(TerrainParams { seed: "one".into(), ..Default::default() });
        let b = TerrainGenerator::new(TerrainParams { seed: "two".into(), ..Default::default() });
        assert_ne!(a.generate(), b.generate());
    }

    #[test]
    fn test_trees_stay_inside_horizontal_bounds() {
        let generator = demo();
        let grid = generator.generate();
        for (coord, block) in grid.iter() {
            assert!(generator.in_bounds(coord.x, coord.z), "{block} at {coord} out of bounds");
        }
    }

    #[test]
    fn test_tree_shape() {
        let generator = demo();
        let grid = generator.generate();
        let trees: Vec<(i32, i32, i32)> = (0..64)
            .flat_map(|x| (0..64).map(move |z| (x, z)))
            .map(|(x, z)| (x, z, generator.column_height(x, z)))
            .filter(|&(x, z, h)| generator.has_tree(x, z, h))
            .collect();
        // Pick a tree no other canopy can reach
        let &(x, z, h) = trees
            .iter()
            .find(|&&(x, z, _)| {
                trees.iter().all(|&(ox, oz, _)| {
                    (ox, oz) == (x, z) || (ox - x).abs() > 4 || (oz - z).abs() > 4
                })
            })
            .expect("demo world has an isolated tree");
        assert_eq!((x, z), (12, 18));

        // The trunk pokes out below the canopy
        assert_eq!(grid.get(x, h + 1, z), BlockType::Log);
        assert_eq!(grid.get(x, h + 2, z), BlockType::Log);
        // Canopy overwrites the top of the trunk
        assert_eq!(grid.get(x, h + 3, z), BlockType::Plank);
        assert_eq!(grid.get(x, h + 5, z), BlockType::Plank);
        // Nothing above the canopy centre
        assert_eq!(grid.get(x, h + 6, z), BlockType::Air);
    }

    #[test]
    fn test_no_trees_without_headroom() {
        let generator = TerrainGenerator::new(TerrainParams {
            max_height: 12,
            ..Default::default()
        });
        // Heights span 6..=10 here, so height + 5 < 12 only for height 6
        let grid = generator.generate();
        for (coord, block) in grid.iter() {
            if block == BlockType::Log {
                let h = generator.column_height(coord.x, coord.z);
                assert!(h + TRUNK_HEIGHT + 1 < 12);
            }
        }
    }
}
