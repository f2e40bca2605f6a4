//! Voxel data structures and the world facade

pub mod block;
pub mod coord;
pub mod grid;
pub mod world;
pub mod snapshot;

pub use block::BlockType;
pub use coord::VoxelCoord;
pub use grid::{SolidQuery, VoxelGrid};
pub use world::VoxelWorld;
pub use snapshot::{BlockEdit, WorldSnapshot};
