//! Dashed trajectory line using Bevy Gizmos.

use bevy::prelude::*;

use crate::geo::surface_point;
use crate::render::asteroid::APPROACH_START;
use crate::types::AsteroidParameters;

/// Plugin providing the trajectory line.
pub struct TrajectoryPlugin;

impl Plugin for TrajectoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrajectorySettings>()
            .add_systems(Update, draw_trajectory);
    }
}

/// Settings for trajectory rendering.
#[derive(Resource)]
pub struct TrajectorySettings {
    pub visible: bool,
    /// Number of segments between start and target.
    pub segments: u32,
    /// Dash pattern: draw N segments, then skip M segments, repeating.
    ///
    /// Set to (1, 0) for a solid line.
    pub dash_on: u32,
    pub dash_off: u32,
    pub color: Color,
}

impl Default for TrajectorySettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 50,
            dash_on: 3,
            dash_off: 1,
            color: Color::srgb_u8(0xff, 0x44, 0x44),
        }
    }
}

/// Points sampled evenly along the line from `start` to `end` (inclusive).
pub fn trajectory_points(start: Vec3, end: Vec3, segments: u32) -> Vec<Vec3> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| start.lerp(end, i as f32 / segments as f32))
        .collect()
}

/// Pairs of points forming the visible dashes.
pub fn dash_segments(points: &[Vec3], dash_on: u32, dash_off: u32) -> Vec<(Vec3, Vec3)> {
    let period = (dash_on + dash_off).max(1) as usize;
    points
        .windows(2)
        .enumerate()
        .filter(|(i, _)| i % period < dash_on as usize)
        .map(|(_, pair)| (pair[0], pair[1]))
        .collect()
}

fn draw_trajectory(
    mut gizmos: Gizmos,
    settings: Res<TrajectorySettings>,
    params: Res<AsteroidParameters>,
) {
    if !settings.visible {
        return;
    }

    let points = trajectory_points(APPROACH_START, surface_point(params.target), settings.segments);
    for (a, b) in dash_segments(&points, settings.dash_on, settings.dash_off) {
        gizmos.line(a, b, settings.color);
    }
}
