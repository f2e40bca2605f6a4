//! Voxworld - headless demo
//!
//! Usage: cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Scene config JSON (default: built-in demo scene)
//!   --seed <SEED>     Override the terrain seed
//!   --seconds <S>     Simulated time to walk for (default: 5)

use std::path::PathBuf;
use std::time::Instant;

use voxworld::core::{logging, InputState, MoveKey};
use voxworld::mesh::WorldMesh;
use voxworld::physics::{MovementResolver, PlayerBody};
use voxworld::scene::{interaction, SceneConfig};
use voxworld::voxel::{BlockType, VoxelWorld};

/// Fixed simulation step
const FRAME_DT: f64 = 1.0 / 60.0;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = match parse_str_arg(&args, "--config") {
        Some(path) => match SceneConfig::load_sync(&PathBuf::from(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load scene config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };
    if let Some(seed) = parse_str_arg(&args, "--seed") {
        config.terrain.seed = seed;
    }
    let seconds = parse_f64_arg(&args, "--seconds").unwrap_or(5.0);

    // World + mesh
    let start = Instant::now();
    let mut world = VoxelWorld::new(config.terrain.clone());
    let gen_stats = world.generate();
    let mut mesh = WorldMesh::from_grid(world.grid());
    let mesh_stats = mesh.stats();
    log::info!(
        "World {:?}: {} voxels, {} trees; mesh {} visible / {} hidden in {} batches ({:.1}ms)",
        config.terrain.seed,
        gen_stats.voxels,
        gen_stats.trees,
        mesh_stats.visible,
        mesh_stats.hidden,
        mesh_stats.batches,
        start.elapsed().as_secs_f64() * 1000.0,
    );

    // Drop the player and let them settle
    let resolver = MovementResolver::new(config.physics);
    let mut body = PlayerBody::spawn(config.physics.body, config.spawn);
    let mut input = InputState::new();
    let mut steps = 0u32;
    while !body.grounded && steps < 600 {
        body = resolver.step(&world, &body, &input, FRAME_DT);
        steps += 1;
    }
    log::info!(
        "Landed after {} steps at ({:.2}, {:.2}, {:.2})",
        steps,
        body.position.x,
        body.feet_y(),
        body.position.z,
    );

    // Walk forward, hopping whenever grounded, turning slowly
    input.press(MoveKey::Forward);
    let frames = (seconds / FRAME_DT).round() as u32;
    let mut jumps = 0u32;
    for frame in 0..frames {
        if body.grounded && frame % 45 == 0 {
            input.press(MoveKey::Jump);
            jumps += 1;
        } else {
            input.release(MoveKey::Jump);
        }
        input.look(2.0, 0.0, 0.002);
        body = resolver.step(&world, &body, &input, FRAME_DT);
    }
    input.release_all();
    log::info!(
        "Walked {} frames with {} jumps; now at ({:.2}, {:.2}, {:.2}), grounded={}",
        frames,
        jumps,
        body.position.x,
        body.feet_y(),
        body.position.z,
        body.grounded,
    );

    // Look down, break the block underfoot, then put a plank back
    input.set_orientation(input.yaw(), -1.2);
    match interaction::pick(&mesh, &body, &input, config.reach) {
        Some(hit) => {
            let removed = interaction::break_block(&mut world, &mut mesh, &hit);
            log::info!("Broke {} at {}", removed, hit.voxel);

            if let Some(hit) = interaction::pick(&mesh, &body, &input, config.reach) {
                if let Some(at) = interaction::place_block(&mut world, &mut mesh, &hit, BlockType::Plank) {
                    log::info!("Placed plank at {}", at);
                }
            }
        }
        None => log::info!("Nothing within reach ({} blocks)", config.reach),
    }

    log::info!(
        "Done: {} edits, {} mesh instances after {} rebuilds",
        world.edit_count(),
        mesh.instance_count(),
        mesh.rebuild_count(),
    );
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
