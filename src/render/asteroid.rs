//! Asteroid mesh, approach animation and glow.
//!
//! The asteroid loops its approach: progress runs from 0 to 1 along the
//! straight line from [`APPROACH_START`] to the target and then wraps back
//! to 0 instead of stopping at impact.

use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::geo::surface_point;
use crate::simulation::{SimulationReset, SimulationStatus};
use crate::types::{AsteroidParameters, SessionSeed};

/// Fixed point the asteroid approaches from.
pub const APPROACH_START: Vec3 = Vec3::new(50.0, 20.0, 30.0);

/// Progress gained per second while active.
pub const PROGRESS_RATE: f32 = 0.2;

/// Base radius of the undeformed asteroid sphere.
pub const ASTEROID_RADIUS: f32 = 0.3;

/// Radius of the glow shell shown while active.
pub const GLOW_RADIUS: f32 = 0.5;

/// Per-vertex radial scale range applied to the base sphere.
pub const DEFORM_MIN: f32 = 0.8;
pub const DEFORM_MAX: f32 = 1.2;

/// Tumble rates about X and Z (rad/s).
pub const TUMBLE_X: f32 = 1.2;
pub const TUMBLE_Z: f32 = 0.6;

/// Marker component for the asteroid.
#[derive(Component)]
pub struct Asteroid;

/// Marks the glow shell following the asteroid.
#[derive(Component)]
pub struct AsteroidGlow;

/// Normalized position along the approach path.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct ApproachProgress(pub f32);

/// Plugin providing the asteroid and its animation.
pub struct AsteroidPlugin;

impl Plugin for AsteroidPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_asteroid).add_systems(
            Update,
            (reset_asteroid, animate_asteroid, toggle_glow).chain(),
        );
    }
}

/// Advance `progress` by `rate * dt`, wrapping to 0 once it passes 1.
pub fn advance_progress(progress: f32, dt: f32, rate: f32) -> f32 {
    let next = progress + dt * rate;
    if next > 1.0 { 0.0 } else { next }
}

/// Position along the approach line at `progress`.
pub fn approach_position(start: Vec3, target: Vec3, progress: f32) -> Vec3 {
    start.lerp(target, progress)
}

/// Scale each vertex radially by a factor drawn from the seeded RNG.
pub fn deform_vertices(positions: &[[f32; 3]], seed: u64) -> Vec<[f32; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    positions
        .iter()
        .map(|p| {
            let factor = rng.gen_range(DEFORM_MIN..DEFORM_MAX);
            (Vec3::from_array(*p) * factor).to_array()
        })
        .collect()
}

/// Irregular asteroid mesh: a coarse UV sphere with jittered vertex radii.
pub fn asteroid_mesh(seed: u64) -> Mesh {
    let mut mesh = Mesh::from(Sphere::new(ASTEROID_RADIUS).mesh().uv(8, 6));

    let deformed = mesh
        .attribute(Mesh::ATTRIBUTE_POSITION)
        .and_then(|values| values.as_float3())
        .map(|positions| deform_vertices(positions, seed));

    if let Some(deformed) = deformed {
        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, deformed);
        mesh.compute_normals();
    }

    mesh
}

fn spawn_asteroid(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    seed: Res<SessionSeed>,
) {
    commands.spawn((
        Asteroid,
        ApproachProgress::default(),
        Mesh3d(meshes.add(asteroid_mesh(seed.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x65, 0x43, 0x21),
            emissive: Color::srgb_u8(0x33, 0x11, 0x00).to_linear(),
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::from_translation(APPROACH_START),
    ));

    commands.spawn((
        AsteroidGlow,
        Mesh3d(meshes.add(Sphere::new(GLOW_RADIUS).mesh().uv(16, 16))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba_u8(0xff, 0x44, 0x00, 77),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_translation(APPROACH_START),
        Visibility::Hidden,
    ));

    info!("Asteroid spawned (seed {:#x})", seed.0);
}

/// Send the asteroid back to the start of its approach.
pub fn reset_asteroid(
    mut resets: MessageReader<SimulationReset>,
    mut asteroid: Query<(&mut Transform, &mut ApproachProgress), With<Asteroid>>,
) {
    if resets.read().count() == 0 {
        return;
    }

    for (mut transform, mut progress) in &mut asteroid {
        progress.0 = 0.0;
        transform.translation = APPROACH_START;
    }
}

/// Move and tumble the asteroid while the simulation is active.
pub fn animate_asteroid(
    time: Res<Time>,
    status: Res<SimulationStatus>,
    params: Res<AsteroidParameters>,
    mut asteroid: Query<(&mut Transform, &mut ApproachProgress), With<Asteroid>>,
) {
    if !status.active {
        return;
    }

    let dt = time.delta_secs();
    let target = surface_point(params.target);

    for (mut transform, mut progress) in &mut asteroid {
        progress.0 = advance_progress(progress.0, dt, PROGRESS_RATE);
        transform.translation = approach_position(APPROACH_START, target, progress.0);
        transform.rotate_local_x(TUMBLE_X * dt);
        transform.rotate_local_z(TUMBLE_Z * dt);
    }
}

/// Show the glow shell at the asteroid while active.
fn toggle_glow(
    status: Res<SimulationStatus>,
    asteroid: Query<&Transform, (With<Asteroid>, Without<AsteroidGlow>)>,
    mut glow: Query<(&mut Transform, &mut Visibility), With<AsteroidGlow>>,
) {
    let Ok(asteroid) = asteroid.single() else {
        return;
    };

    for (mut transform, mut visibility) in &mut glow {
        transform.translation = asteroid.translation;
        visibility.set_if_neq(if status.active {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
    }
}
