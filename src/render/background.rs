//! Background rendering: starfield and lighting.

use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::types::SessionSeed;

/// Number of background stars.
pub const STAR_COUNT: usize = 5000;

/// Stars are scattered uniformly in a cube of this half-extent.
pub const STARFIELD_HALF_EXTENT: f32 = 1000.0;

/// Starfield rotation about +Y (rad/s).
pub const STARFIELD_SPIN: f32 = 0.012;

/// Space background color (#000011).
pub const SPACE_COLOR: Color = Color::srgb_u8(0x00, 0x00, 0x11);

/// Parent entity holding all star points.
#[derive(Component)]
pub struct Starfield;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SPACE_COLOR))
            .add_systems(Startup, (spawn_starfield, spawn_lighting))
            .add_systems(Update, rotate_starfield);
    }
}

/// Star positions for a given seed. Stable for the same seed.
pub fn star_positions(seed: u64, count: usize) -> Vec<Vec3> {
    // Offset so stars and the asteroid shape don't share a sequence
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5EED_57A2);
    let half = STARFIELD_HALF_EXTENT;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Spawn a starfield background with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    seed: Res<SessionSeed>,
) {
    // Material for stars - unlit white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    // Stars are far away; size them so they read as points
    let star_mesh = meshes.add(Sphere::new(1.2).mesh().uv(6, 4));

    let positions = star_positions(seed.0, STAR_COUNT);

    commands
        .spawn((Starfield, Transform::default(), Visibility::default()))
        .with_children(|parent| {
            for position in &positions {
                parent.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(star_material.clone()),
                    Transform::from_translation(*position),
                ));
            }
        });

    info!("Spawned {} background stars", positions.len());
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Dim fill light from the opposite side
    commands.spawn((
        PointLight {
            intensity: 200_000.0,
            range: 60.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -10.0),
    ));

    info!("Scene lighting initialized");
}

fn rotate_starfield(time: Res<Time>, mut starfield: Query<&mut Transform, With<Starfield>>) {
    for mut transform in &mut starfield {
        transform.rotate_y(STARFIELD_SPIN * time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_positions_deterministic_per_seed() {
        let a = star_positions(42, 100);
        let b = star_positions(42, 100);
        let c = star_positions(43, 100);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_star_positions_within_cube() {
        for p in star_positions(7, STAR_COUNT) {
            assert!(p.abs().max_element() <= STARFIELD_HALF_EXTENT);
        }
    }
}
