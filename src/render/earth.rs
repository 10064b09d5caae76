//! Globe rendering: Earth, atmosphere, and the target marker.

use bevy::prelude::*;

use crate::geo::{ATMOSPHERE_RADIUS, EARTH_RADIUS, surface_point};
use crate::types::AsteroidParameters;

/// Earth self-rotation about +Y (rad/s).
pub const EARTH_SPIN: f32 = 0.06;

/// Marker sphere radius.
pub const MARKER_RADIUS: f32 = 0.1;

/// Impact ring inner and outer radii.
pub const RING_INNER_RADIUS: f32 = 0.2;
pub const RING_OUTER_RADIUS: f32 = 0.4;

/// Ring pulse frequency (Hz) and relative amplitude.
pub const RING_PULSE_HZ: f32 = 1.0;
pub const RING_PULSE_AMPLITUDE: f32 = 0.25;

/// Marker component for the Earth sphere.
#[derive(Component)]
pub struct Earth;

/// Marks entities positioned at the current impact target.
#[derive(Component)]
pub struct TargetMarker;

/// Marks the pulsing ring around the target.
#[derive(Component)]
pub struct ImpactRing;

/// Plugin providing the globe and target marker.
pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_globe)
            .add_systems(Update, (rotate_earth, sync_target_marker, pulse_impact_ring));
    }
}

/// Scale factor of the impact ring at `elapsed` seconds.
pub fn ring_pulse_scale(elapsed: f32) -> f32 {
    1.0 + RING_PULSE_AMPLITUDE * (std::f32::consts::TAU * RING_PULSE_HZ * elapsed).sin()
}

/// Transform that places an outward-facing marker at `point`.
pub fn marker_transform(point: Vec3) -> Transform {
    let normal = point.normalize_or(Vec3::Y);
    Transform::from_translation(point).with_rotation(Quat::from_rotation_arc(Vec3::Z, normal))
}

fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<AsteroidParameters>,
) {
    commands.spawn((
        Earth,
        Mesh3d(meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(64, 64))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x22, 0x33, 0xff),
            emissive: Color::srgb_u8(0x11, 0x22, 0x44).to_linear(),
            perceptual_roughness: 0.7,
            ..default()
        })),
        Transform::default(),
    ));

    // Atmosphere shell, visible from inside and outside
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(ATMOSPHERE_RADIUS).mesh().uv(64, 64))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba_u8(0x93, 0xcf, 0xef, 26),
            alpha_mode: AlphaMode::Blend,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        Transform::default(),
    ));

    let transform = marker_transform(surface_point(params.target));
    let red = Color::srgb(1.0, 0.0, 0.0);

    commands.spawn((
        TargetMarker,
        Mesh3d(meshes.add(Sphere::new(MARKER_RADIUS).mesh().uv(16, 16))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: red,
            unlit: true,
            ..default()
        })),
        transform,
    ));

    commands.spawn((
        TargetMarker,
        ImpactRing,
        Mesh3d(
            meshes.add(
                Annulus::new(RING_INNER_RADIUS, RING_OUTER_RADIUS)
                    .mesh()
                    .resolution(32),
            ),
        ),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.0, 0.0, 0.6),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            cull_mode: None,
            double_sided: true,
            ..default()
        })),
        transform,
    ));

    info!("Globe spawned");
}

fn rotate_earth(time: Res<Time>, mut earth: Query<&mut Transform, With<Earth>>) {
    for mut transform in &mut earth {
        transform.rotate_y(EARTH_SPIN * time.delta_secs());
    }
}

/// Move the marker and ring when the target changes.
fn sync_target_marker(
    params: Res<AsteroidParameters>,
    mut markers: Query<&mut Transform, With<TargetMarker>>,
) {
    if !params.is_changed() {
        return;
    }

    let placed = marker_transform(surface_point(params.target));
    for mut transform in &mut markers {
        transform.translation = placed.translation;
        transform.rotation = placed.rotation;
    }
}

fn pulse_impact_ring(time: Res<Time>, mut rings: Query<&mut Transform, With<ImpactRing>>) {
    let scale = ring_pulse_scale(time.elapsed_secs());
    for mut transform in &mut rings {
        transform.scale = Vec3::splat(scale);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_ring_pulse_bounds() {
        for i in 0..100 {
            let scale = ring_pulse_scale(i as f32 * 0.037);
            assert!(scale >= 1.0 - RING_PULSE_AMPLITUDE - 1e-6);
            assert!(scale <= 1.0 + RING_PULSE_AMPLITUDE + 1e-6);
        }
        assert_abs_diff_eq!(ring_pulse_scale(0.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_marker_faces_outward() {
        let point = Vec3::new(0.0, 5.1, 0.0);
        let transform = marker_transform(point);
        let facing = transform.rotation * Vec3::Z;
        assert_abs_diff_eq!(facing.y, 1.0, epsilon = 1e-5);
    }
}
