//! Render-ready instance batches built from a voxel grid

pub mod batch;
pub mod builder;

pub use batch::MeshBatch;
pub use builder::{BlockHit, MeshStats, WorldMesh};
