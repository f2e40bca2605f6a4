use criterion::{criterion_group, criterion_main, Criterion, black_box};

use voxworld::core::{InputState, MoveKey};
use voxworld::core::types::DVec3;
use voxworld::mesh::WorldMesh;
use voxworld::physics::{MovementResolver, PhysicsConfig, PlayerBody};
use voxworld::terrain::{SeededSimplex, TerrainParams};
use voxworld::voxel::VoxelWorld;

fn demo_world() -> VoxelWorld {
    let mut world = VoxelWorld::new(TerrainParams::default());
    world.generate();
    world
}

fn bench_noise_sample(c: &mut Criterion) {
    let noise = SeededSimplex::from_seed_str("vox-demo-seed");

    c.bench_function("simplex_sample_1k", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..1000 {
                sum += noise.sample(black_box(i as f64 * 0.037), black_box(i as f64 * 0.011));
            }
            sum
        });
    });
}

fn bench_generate_demo(c: &mut Criterion) {
    c.bench_function("generate_64x64x32", |b| {
        b.iter(|| {
            let mut world = VoxelWorld::new(black_box(TerrainParams::default()));
            world.generate()
        });
    });
}

fn bench_mesh_rebuild(c: &mut Criterion) {
    let world = demo_world();
    let mut mesh = WorldMesh::new();

    c.bench_function("mesh_rebuild_demo", |b| {
        b.iter(|| mesh.build(black_box(world.grid())));
    });
}

fn bench_movement_step(c: &mut Criterion) {
    let world = demo_world();
    let config = PhysicsConfig::default();
    let resolver = MovementResolver::new(config);
    let input = InputState::new()
        .with_key(MoveKey::Forward)
        .with_key(MoveKey::Right);
    let body = PlayerBody::spawn(config.body, DVec3::new(32.5, 40.0, 32.5));

    c.bench_function("movement_step", |b| {
        b.iter(|| resolver.step(&world, black_box(&body), &input, 1.0 / 60.0));
    });
}

criterion_group!(
    benches,
    bench_noise_sample,
    bench_generate_demo,
    bench_mesh_rebuild,
    bench_movement_step,
);
criterion_main!(benches);
