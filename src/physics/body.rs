//! Player body state

use super::config::BodyShape;
use crate::core::types::DVec3;
use crate::math::Aabb;

/// Axis-aligned player body
///
/// `position` is the center of the box. A body is a plain value: the
/// resolver takes one and returns the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerBody {
    pub shape: BodyShape,
    pub position: DVec3,
    pub velocity: DVec3,
    pub grounded: bool,
}

impl PlayerBody {
    /// Body at rest at `position`, not yet grounded
    pub fn spawn(shape: BodyShape, position: DVec3) -> Self {
        Self {
            shape,
            position,
            velocity: DVec3::ZERO,
            grounded: false,
        }
    }

    /// Collision box at the current position
    pub fn aabb(&self) -> Aabb {
        self.aabb_at(self.position)
    }

    /// Collision box if the body were at `position`
    pub fn aabb_at(&self, position: DVec3) -> Aabb {
        Aabb::from_center_half_extent(position, self.shape.half_extent())
    }

    /// Y of the bottom face
    pub fn feet_y(&self) -> f64 {
        self.position.y - self.shape.height * 0.5
    }

    /// Same body placed so its feet rest at `feet`
    pub fn with_feet_at(mut self, feet: DVec3) -> Self {
        self.position = feet + DVec3::new(0.0, self.shape.height * 0.5, 0.0);
        self
    }
}
