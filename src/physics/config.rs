//! Movement tuning

use serde::{Deserialize, Serialize};

use crate::core::types::DVec3;

/// Player collision box dimensions
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyShape {
    pub half_width: f64,
    pub half_depth: f64,
    /// Full height; the body position sits at half this above the feet
    pub height: f64,
}

impl BodyShape {
    /// Half-extents of the box around the body position
    pub fn half_extent(&self) -> DVec3 {
        DVec3::new(self.half_width, self.height * 0.5, self.half_depth)
    }
}

impl Default for BodyShape {
    fn default() -> Self {
        Self {
            half_width: 0.3,
            half_depth: 0.3,
            height: 1.8,
        }
    }
}

/// Constants for one simulation step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (units/s^2)
    pub gravity: f64,
    /// Horizontal speed while a movement key is held (units/s)
    pub move_speed: f64,
    /// Vertical speed set by a jump (units/s)
    pub jump_speed: f64,
    /// Largest dt a single step integrates (s)
    pub max_step_dt: f64,
    pub body: BodyShape,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 18.0,
            move_speed: 6.0,
            jump_speed: 7.5,
            max_step_dt: 0.05,
            body: BodyShape::default(),
        }
    }
}
