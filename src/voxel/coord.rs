//! Integer voxel coordinates

use serde::{Deserialize, Serialize};

use crate::core::types::{DVec3, IVec3};

/// Offsets to the six face-adjacent neighbours: +X, -X, +Y, -Y, +Z, -Z
pub const FACE_NEIGHBORS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Voxel coordinate used as the grid key
///
/// Ordering is lexicographic on (x, y, z), which gives every ordered
/// traversal of a grid a platform-independent order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate shifted by a delta, `None` past the i32 range
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// The face-adjacent coordinates that exist
    ///
    /// At the edge of the i32 range fewer than six come back.
    pub fn neighbors(self) -> impl Iterator<Item = VoxelCoord> {
        FACE_NEIGHBORS
            .into_iter()
            .filter_map(move |(dx, dy, dz)| self.checked_offset(dx, dy, dz))
    }

    /// World-space center of the unit cube
    ///
    /// Exact for every i32 coordinate.
    pub fn center(self) -> DVec3 {
        DVec3::new(self.x as f64, self.y as f64, self.z as f64) + DVec3::splat(0.5)
    }

    /// Voxel containing an instance center: offset by -0.5 and floored
    pub fn from_center(center: DVec3) -> Self {
        let p = (center - DVec3::splat(0.5)).floor();
        Self::new(p.x as i32, p.y as i32, p.z as i32)
    }
}

impl From<IVec3> for VoxelCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<VoxelCoord> for IVec3 {
    fn from(c: VoxelCoord) -> Self {
        IVec3::new(c.x, c.y, c.z)
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
