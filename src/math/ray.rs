//! Ray type and operations

use crate::core::types::DVec3;
use super::aabb::Aabb;

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
    /// Precomputed 1/direction for fast AABB intersection
    pub inv_direction: DVec3,
}

impl Ray {
    /// Create a new ray (direction should be normalized)
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: DVec3::new(
                1.0 / direction.x,
                1.0 / direction.y,
                1.0 / direction.z,
            ),
        }
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// Ray-AABB intersection using slab method
    /// Returns Some((t_near, t_far)) if intersection, None otherwise.
    /// `t_near` is clamped to 0 when the origin is inside the box.
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Option<(f64, f64)> {
        let (t_near, t_far) = self.slab_interval(aabb);

        if t_near <= t_far && t_far >= 0.0 {
            Some((t_near.max(0.0), t_far))
        } else {
            None
        }
    }

    /// Distance at which the ray enters the box through a front face
    ///
    /// `None` when the ray misses, when the box is behind, or when the
    /// origin is already inside it.
    pub fn entry_distance(&self, aabb: &Aabb) -> Option<f64> {
        let (t_near, t_far) = self.slab_interval(aabb);
        (t_near >= 0.0 && t_near <= t_far).then_some(t_near)
    }

    /// Unclamped (entry, exit) parameters of the slab test
    fn slab_interval(&self, aabb: &Aabb) -> (f64, f64) {
        let t1 = (aabb.min - self.origin) * self.inv_direction;
        let t2 = (aabb.max - self.origin) * self.inv_direction;

        let t_min = t1.min(t2);
        let t_max = t1.max(t2);

        (t_min.max_element(), t_max.min_element())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);
        assert_eq!(ray.at(5.0), DVec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_intersects_aabb_hit() {
        let ray = Ray::new(DVec3::new(-2.0, 0.5, 0.5), DVec3::X);
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        let (t_near, t_far) = ray.intersects_aabb(&aabb).expect("ray should hit");
        assert!((t_near - 2.0).abs() < 1e-9);
        assert!((t_far - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_intersects_aabb_miss() {
        let ray = Ray::new(DVec3::new(-2.0, 5.0, 0.5), DVec3::X);
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert!(ray.intersects_aabb(&aabb).is_none());
    }

    #[test]
    fn test_intersects_aabb_behind() {
        let ray = Ray::new(DVec3::new(3.0, 0.5, 0.5), DVec3::X);
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert!(ray.intersects_aabb(&aabb).is_none());
    }

    #[test]
    fn test_intersects_aabb_inside() {
        let ray = Ray::new(DVec3::splat(0.5), DVec3::X);
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        let (t_near, _) = ray.intersects_aabb(&aabb).expect("ray starts inside");
        assert_eq!(t_near, 0.0);
    }

    #[test]
    fn test_entry_distance_front_face() {
        let ray = Ray::new(DVec3::new(0.5, 0.5, 4.0), DVec3::NEG_Z);
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert_eq!(ray.entry_distance(&aabb), Some(3.0));
    }

    #[test]
    fn test_entry_distance_skips_enclosing_box() {
        let ray = Ray::new(DVec3::splat(0.5), DVec3::X);
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert_eq!(ray.entry_distance(&aabb), None);
        assert!(ray.intersects_aabb(&aabb).is_some());
    }

    #[test]
    fn test_entry_distance_behind_and_miss() {
        let aabb = Aabb::new(DVec3::ZERO, DVec3::ONE);
        assert_eq!(Ray::new(DVec3::new(3.0, 0.5, 0.5), DVec3::X).entry_distance(&aabb), None);
        assert_eq!(Ray::new(DVec3::new(-2.0, 5.0, 0.5), DVec3::X).entry_distance(&aabb), None);
    }
}
