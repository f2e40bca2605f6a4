//! Error types for voxworld
//!
//! World queries, generation, meshing and movement are total and never
//! return this type. Only the file-facing surfaces (scene config, world
//! snapshots) can fail.

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}
