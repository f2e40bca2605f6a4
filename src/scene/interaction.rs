//! Break and place targeting from the player's view ray

use crate::core::input::InputState;
use crate::math::Ray;
use crate::mesh::{BlockHit, WorldMesh};
use crate::physics::PlayerBody;
use crate::voxel::block::BlockType;
use crate::voxel::coord::VoxelCoord;
use crate::voxel::world::VoxelWorld;

/// Look ray from the body center along the current yaw/pitch
pub fn eye_ray(body: &PlayerBody, input: &InputState) -> Ray {
    Ray::new(body.position, input.look_direction())
}

/// First block under the crosshair within `reach`
pub fn pick(mesh: &WorldMesh, body: &PlayerBody, input: &InputState, reach: f64) -> Option<BlockHit> {
    mesh.raycast(&eye_ray(body, input), reach)
}

/// Voxel a break removes
pub fn break_target(hit: &BlockHit) -> VoxelCoord {
    hit.voxel
}

/// Voxel a place fills: the empty cell across the struck face
///
/// `None` when that cell lies past the edge of the coordinate range.
pub fn place_target(hit: &BlockHit) -> Option<VoxelCoord> {
    hit.voxel.checked_offset(hit.normal.x, hit.normal.y, hit.normal.z)
}

/// Clear the struck voxel and rebuild the mesh
///
/// Returns the block that was removed.
pub fn break_block(world: &mut VoxelWorld, mesh: &mut WorldMesh, hit: &BlockHit) -> BlockType {
    let target = break_target(hit);
    let previous = world.set_block(target.x, target.y, target.z, BlockType::Air);
    mesh.build(world.grid());
    previous
}

/// Place `block` against the struck face and rebuild the mesh
///
/// Placing `Air` is not a placement; nothing changes and `None` comes back,
/// as it does when there is no cell across the struck face.
pub fn place_block(
    world: &mut VoxelWorld,
    mesh: &mut WorldMesh,
    hit: &BlockHit,
    block: BlockType,
) -> Option<VoxelCoord> {
    if block.is_empty() {
        return None;
    }
    let target = place_target(hit)?;
    world.set_block(target.x, target.y, target.z, block);
    mesh.build(world.grid());
    Some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::MoveKey;
    use crate::core::types::{DVec3, IVec3};
    use crate::physics::BodyShape;
    use crate::terrain::generator::TerrainParams;

    /// Single stone block at the origin, body looking at it down -Z
    fn setup() -> (VoxelWorld, WorldMesh, PlayerBody, InputState) {
        let mut world = VoxelWorld::new(TerrainParams::default());
        world.set_block(0, 0, 0, BlockType::Stone);
        let mesh = WorldMesh::from_grid(world.grid());
        let body = PlayerBody::spawn(BodyShape::default(), DVec3::new(0.5, 0.5, 3.5));
        (world, mesh, body, InputState::new())
    }

    #[test]
    fn test_eye_ray_follows_orientation() {
        let (_, _, body, mut input) = setup();
        let ray = eye_ray(&body, &input);
        assert_eq!(ray.origin, body.position);
        assert!((ray.direction - DVec3::NEG_Z).length() < 1e-12);

        input.set_orientation(std::f64::consts::FRAC_PI_2, 0.0);
        let ray = eye_ray(&body, &input);
        assert!((ray.direction - DVec3::NEG_X).length() < 1e-12);
    }

    #[test]
    fn test_pick_reports_face() {
        let (_, mesh, body, input) = setup();
        let hit = pick(&mesh, &body, &input, 6.0).expect("block in view");
        assert_eq!(hit.block, BlockType::Stone);
        assert_eq!(break_target(&hit), VoxelCoord::new(0, 0, 0));
        assert_eq!(hit.normal, IVec3::Z);
        assert_eq!(place_target(&hit), Some(VoxelCoord::new(0, 0, 1)));
        assert!((hit.distance - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_pick_out_of_reach() {
        let (_, mesh, body, input) = setup();
        assert!(pick(&mesh, &body, &input, 2.0).is_none());
    }

    #[test]
    fn test_place_on_top_face() {
        let (_, mesh, _, mut input) = setup();
        let body = PlayerBody::spawn(BodyShape::default(), DVec3::new(0.5, 4.0, 0.5));
        input.set_orientation(0.0, -std::f64::consts::FRAC_PI_2);
        let hit = pick(&mesh, &body, &input, 6.0).expect("block below");
        assert_eq!(hit.normal, IVec3::Y);
        assert_eq!(place_target(&hit), Some(VoxelCoord::new(0, 1, 0)));
    }

    #[test]
    fn test_break_removes_block_and_rebuilds() {
        let (mut world, mut mesh, body, input) = setup();
        let hit = pick(&mesh, &body, &input, 6.0).expect("block in view");

        let removed = break_block(&mut world, &mut mesh, &hit);
        assert_eq!(removed, BlockType::Stone);
        assert_eq!(world.get_block(0, 0, 0), BlockType::Air);
        assert_eq!(mesh.instance_count(), 0);
        assert_eq!(mesh.rebuild_count(), 2);
        assert!(pick(&mesh, &body, &input, 6.0).is_none());
    }

    #[test]
    fn test_place_adds_block_in_front() {
        let (mut world, mut mesh, body, input) = setup();
        let hit = pick(&mesh, &body, &input, 6.0).expect("block in view");

        let placed = place_block(&mut world, &mut mesh, &hit, BlockType::Plank);
        assert_eq!(placed, Some(VoxelCoord::new(0, 0, 1)));
        assert_eq!(world.get_block(0, 0, 1), BlockType::Plank);

        // The new block is now the nearest thing in view
        let next = pick(&mesh, &body, &input, 6.0).expect("placed block in view");
        assert_eq!(next.block, BlockType::Plank);
        assert_eq!(next.voxel, VoxelCoord::new(0, 0, 1));
    }

    #[test]
    fn test_place_air_is_ignored() {
        let (mut world, mut mesh, body, input) = setup();
        let hit = pick(&mesh, &body, &input, 6.0).expect("block in view");
        assert_eq!(place_block(&mut world, &mut mesh, &hit, BlockType::Air), None);
        assert_eq!(world.edit_count(), 1);
        assert_eq!(mesh.rebuild_count(), 1);
    }

    #[test]
    fn test_no_place_target_past_range_edge() {
        let mut world = VoxelWorld::new(TerrainParams::default());
        world.set_block(i32::MAX, 0, 0, BlockType::Stone);
        let mut mesh = WorldMesh::from_grid(world.grid());
        let eye = DVec3::new(i32::MAX as f64 + 3.5, 0.5, 0.5);
        let body = PlayerBody::spawn(BodyShape::default(), eye);
        let mut input = InputState::new();
        // Yaw of 90 degrees looks down -X
        input.set_orientation(std::f64::consts::FRAC_PI_2, 0.0);

        let hit = pick(&mesh, &body, &input, 6.0).expect("edge block in view");
        assert_eq!(hit.normal, IVec3::X);
        assert_eq!(place_target(&hit), None);
        assert_eq!(place_block(&mut world, &mut mesh, &hit, BlockType::Dirt), None);
        assert_eq!(world.edit_count(), 1);
    }

    #[test]
    fn test_pick_from_inside_water_sees_block_ahead() {
        let (mut world, mut mesh, body, input) = setup();
        let eye = VoxelCoord::from_center(body.position);
        world.set_block(eye.x, eye.y, eye.z, BlockType::Water);
        mesh.build(world.grid());

        let hit = pick(&mesh, &body, &input, 6.0).expect("block in view");
        assert_eq!(hit.block, BlockType::Stone);
        assert_eq!(break_target(&hit), VoxelCoord::new(0, 0, 0));
    }

    #[test]
    fn test_movement_keys_do_not_change_aim() {
        let (_, _, body, input) = setup();
        let moving = input.clone().with_key(MoveKey::Forward);
        assert_eq!(eye_ray(&body, &input).direction, eye_ray(&body, &moving).direction);
    }
}
