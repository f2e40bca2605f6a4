//! Scene setup and player interaction

pub mod config;
pub mod interaction;

pub use config::SceneConfig;
