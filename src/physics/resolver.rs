//! Swept per-axis collision against solid voxels
//!
//! Each step moves the body along X, then Z, then Y. After each single-axis
//! move, any solid voxel the box overlaps pushes it back out along that
//! axis and zeroes that velocity component. The order is fixed: resolving
//! Y first would change how the body rides over ledges.

use super::body::PlayerBody;
use super::config::PhysicsConfig;
use crate::core::input::{InputState, MoveKey};
use crate::core::types::DVec3;
use crate::math::Aabb;
use crate::voxel::grid::SolidQuery;

/// Gap left between a pushed-out body and the face it hit
pub const SKIN: f64 = 1e-6;
/// Per-axis moves at or below this are not resolved
const MIN_AXIS_DELTA: f64 = 1e-6;
/// How far below the feet the support probe looks
const FOOT_PROBE: f64 = 0.01;

/// Movement axes, in resolution order
const RESOLUTION_ORDER: [Axis; 3] = [Axis::X, Axis::Z, Axis::Y];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Advances a [`PlayerBody`] through a voxel world
#[derive(Clone, Debug, Default)]
pub struct MovementResolver {
    config: PhysicsConfig,
}

impl MovementResolver {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance `body` by `dt` seconds and return the new body
    ///
    /// `dt` is clamped to `max_step_dt`; a non-positive `dt` returns the
    /// body unchanged.
    pub fn step<W: SolidQuery + ?Sized>(
        &self,
        world: &W,
        body: &PlayerBody,
        input: &InputState,
        dt: f64,
    ) -> PlayerBody {
        if dt <= 0.0 {
            return *body;
        }
        let dt = dt.min(self.config.max_step_dt);
        let mut next = *body;

        // Horizontal velocity comes straight from the held keys
        let mut wish = input.wish_direction();
        if wish.length_squared() > 0.0 {
            wish = wish.normalize() * self.config.move_speed;
        }
        next.velocity.x = wish.x;
        next.velocity.z = wish.z;

        next.velocity.y -= self.config.gravity * dt;
        if next.grounded && input.is_held(MoveKey::Jump) {
            next.velocity.y = self.config.jump_speed;
            next.grounded = false;
        }

        let mut landed = false;
        for axis in RESOLUTION_ORDER {
            let i = axis.index();
            let delta = next.velocity[i] * dt;
            next.position[i] += delta;

            if let Some(resolved) = Self::resolve_axis(world, &next, axis, delta) {
                next.position[i] = resolved;
                next.velocity[i] = 0.0;
                if axis == Axis::Y && delta < 0.0 {
                    landed = true;
                }
            }
        }

        next.grounded = next.velocity.y <= 0.0 && landed && Self::standing_on_block(world, &next);
        next
    }

    /// Push-out coordinate along `axis` if the box now overlaps solid voxels
    ///
    /// Moving in +axis the body stops against the nearest voxel's min face,
    /// moving in -axis against the nearest max face.
    fn resolve_axis<W: SolidQuery + ?Sized>(
        world: &W,
        body: &PlayerBody,
        axis: Axis,
        delta: f64,
    ) -> Option<f64> {
        if delta.abs() <= MIN_AXIS_DELTA {
            return None;
        }

        let i = axis.index();
        let aabb = body.aabb();
        let (lo, hi) = aabb.voxel_range();
        let mut stop: Option<f64> = None;

        for x in lo.x..=hi.x {
            for y in lo.y..=hi.y {
                for z in lo.z..=hi.z {
                    if !world.is_solid(x, y, z) {
                        continue;
                    }
                    let voxel = Aabb::voxel(x, y, z);
                    if !aabb.overlaps(&voxel) {
                        continue;
                    }
                    stop = Some(match (stop, delta > 0.0) {
                        (None, true) => voxel.min[i],
                        (None, false) => voxel.max[i],
                        (Some(s), true) => s.min(voxel.min[i]),
                        (Some(s), false) => s.max(voxel.max[i]),
                    });
                }
            }
        }

        let half = body.shape.half_extent()[i];
        stop.map(|face| {
            if delta > 0.0 {
                face - half - SKIN
            } else {
                face + half + SKIN
            }
        })
    }

    /// Whether any of the four foot corners has a solid voxel just below
    fn standing_on_block<W: SolidQuery + ?Sized>(world: &W, body: &PlayerBody) -> bool {
        let p = body.position;
        let probe_y = (body.feet_y() - FOOT_PROBE).floor() as i32;
        let (hw, hd) = (body.shape.half_width, body.shape.half_depth);

        [(-hw, -hd), (hw, -hd), (-hw, hd), (hw, hd)]
            .into_iter()
            .any(|(dx, dz)| {
                let corner = DVec3::new(p.x + dx, 0.0, p.z + dz).floor();
                world.is_solid(corner.x as i32, probe_y, corner.z as i32)
            })
    }
}
