//! World generator binary - builds a world and reports what it contains.
//!
//! Usage: cargo run --release --bin generate_world -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Scene config JSON to take terrain parameters from
//!   --seed <SEED>     Seed string (default: "vox-demo-seed")
//!   --width <N>       Columns along X (default: 64)
//!   --depth <N>       Columns along Z (default: 64)
//!   --height <N>      Maximum terrain height (default: 32)
//!   --out <PATH>      Write a world snapshot to PATH

use std::path::PathBuf;
use std::time::Instant;

use voxworld::core::logging;
use voxworld::mesh::WorldMesh;
use voxworld::scene::SceneConfig;
use voxworld::voxel::{BlockType, VoxelWorld};

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut params = match parse_str_arg(&args, "--config") {
        Some(path) => match SceneConfig::load_sync(&PathBuf::from(&path)) {
            Ok(config) => config.terrain,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => SceneConfig::default().terrain,
    };
    if let Some(seed) = parse_str_arg(&args, "--seed") {
        params.seed = seed;
    }
    if let Some(width) = parse_i32_arg(&args, "--width") {
        params.width = width;
    }
    if let Some(depth) = parse_i32_arg(&args, "--depth") {
        params.depth = depth;
    }
    if let Some(height) = parse_i32_arg(&args, "--height") {
        params.max_height = height;
    }
    let out = parse_str_arg(&args, "--out").map(PathBuf::from);

    println!("=== Voxworld Generator ===");
    println!("Seed:   {:?}", params.seed);
    println!("Size:   {} x {}, max height {}", params.width, params.depth, params.max_height);
    println!();

    let start = Instant::now();
    let mut world = VoxelWorld::new(params);
    let stats = world.generate();
    let gen_time = start.elapsed();

    let start = Instant::now();
    let mesh = WorldMesh::from_grid(world.grid());
    let mesh_time = start.elapsed();
    let mesh_stats = mesh.stats();

    println!("Columns: {}", stats.columns);
    println!("Trees:   {}", stats.trees);
    println!("Voxels:  {}", stats.voxels);
    for block in BlockType::ALL.iter().filter(|b| !b.is_empty()) {
        let count = world.grid().count_of(*block);
        if count > 0 {
            println!("  {:<6} {}", block.name(), count);
        }
    }
    println!(
        "Mesh:    {} visible, {} hidden, {} batches",
        mesh_stats.visible, mesh_stats.hidden, mesh_stats.batches
    );
    println!(
        "Time:    generate {:.1}ms, mesh {:.1}ms",
        gen_time.as_secs_f64() * 1000.0,
        mesh_time.as_secs_f64() * 1000.0
    );

    if let Some(path) = out {
        if let Err(e) = world.snapshot().save_sync(&path) {
            eprintln!("Failed to write snapshot {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Snapshot: {}", path.display());
    }
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
