//! Core types and utilities shared by every subsystem

pub mod types;
pub mod error;
pub mod logging;
pub mod input;

pub use types::*;
pub use error::Error;
pub use input::{InputState, MoveKey};
