//! Axis-aligned bounding box

use crate::core::types::{DVec3, IVec3};

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create AABB from center and half-extents
    pub fn from_center_half_extent(center: DVec3, half_extent: DVec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Unit cube occupied by the voxel at integer coordinates
    pub fn voxel(x: i32, y: i32, z: i32) -> Self {
        let min = DVec3::new(x as f64, y as f64, z as f64);
        Self {
            min,
            max: min + DVec3::ONE,
        }
    }

    /// Get center point
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Get half-extents
    pub fn half_extent(&self) -> DVec3 {
        self.size() * 0.5
    }

    /// Check if point is inside AABB (boundary inclusive)
    pub fn contains_point(&self, p: DVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if two AABBs intersect, touching faces included
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Check if two AABBs share interior volume; touching faces do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.x > other.min.x && self.min.x < other.max.x &&
        self.max.y > other.min.y && self.min.y < other.max.y &&
        self.max.z > other.min.z && self.min.z < other.max.z
    }

    /// Return a copy moved by `offset`
    pub fn translated(&self, offset: DVec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Inclusive range of integer voxel coordinates the box touches
    pub fn voxel_range(&self) -> (IVec3, IVec3) {
        (
            self.min.floor().as_ivec3(),
            self.max.floor().as_ivec3(),
        )
    }
}
