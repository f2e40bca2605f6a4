//! Procedural terrain generation
//!
//! seed string -> [`seed::hash_seed`] -> [`seed::Mulberry32`] ->
//! [`simplex::SeededSimplex`] -> [`generator::TerrainGenerator`] -> grid

pub mod seed;
pub mod simplex;
pub mod generator;

pub use seed::{hash_seed, Mulberry32};
pub use simplex::SeededSimplex;
pub use generator::{GenerationStats, TerrainGenerator, TerrainParams};
