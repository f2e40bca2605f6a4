//! Voxworld - a procedurally generated voxel world with a walkable player

pub mod core;
pub mod math;
pub mod terrain;
pub mod voxel;
pub mod mesh;
pub mod physics;
pub mod scene;
