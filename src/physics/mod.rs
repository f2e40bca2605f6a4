//! Player body movement against the voxel grid

pub mod config;
pub mod body;
pub mod resolver;

pub use config::{BodyShape, PhysicsConfig};
pub use body::PlayerBody;
pub use resolver::MovementResolver;
