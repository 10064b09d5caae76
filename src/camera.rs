//! Orbit camera around the globe.
//!
//! Left drag orbits, right or middle drag pans, scroll (or +/-) zooms.
//! The camera auto-rotates while the simulation is in standby and holds
//! still while it is active so the trajectory can be followed.

use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::simulation::SimulationStatus;

/// Initial camera position.
pub const INITIAL_POSITION: Vec3 = Vec3::new(15.0, 5.0, 15.0);

/// Vertical field of view (degrees).
pub const FOV_DEGREES: f32 = 45.0;

/// Closest allowed distance from the focus point.
pub const MIN_DISTANCE: f32 = 8.0;

/// Furthest allowed distance from the focus point.
pub const MAX_DISTANCE: f32 = 100.0;

/// Auto-rotation speed multiplier (0.5 = one orbit per two minutes).
pub const AUTO_ROTATE_SPEED: f32 = 0.5;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of orbit per pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Pan distance per pixel, scaled by the orbit distance.
pub const PAN_SPEED: f32 = 0.0015;

/// Zoom steps per second while +/- is held.
pub const KEY_ZOOM_RATE: f32 = 10.0;

/// Keep pitch just short of the poles to avoid a degenerate up vector.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical orbit state of the main camera.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitController {
    pub focus: Vec3,
    /// Rotation about +Y (radians); 0 looks down -Z from +Z.
    pub yaw: f32,
    /// Elevation above the XZ plane (radians).
    pub pitch: f32,
    pub distance: f32,
}

impl OrbitController {
    /// Orbit state that places the camera at `position` looking at `focus`.
    pub fn looking_at(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / offset.length().max(f32::EPSILON)).asin(),
            distance,
        }
    }

    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let position = self.focus + rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(position).looking_at(self.focus, Vec3::Y)
    }

    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(TAU);
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Multiply the distance by `factor`, clamped to the zoom limits.
    pub fn zoom(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Move the focus in the camera's screen plane.
    pub fn pan(&mut self, screen_delta: Vec2) {
        let transform = self.transform();
        let scale = self.distance * PAN_SPEED;
        self.focus += (transform.left() * screen_delta.x + transform.up() * screen_delta.y) * scale;
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::looking_at(INITIAL_POSITION, Vec3::ZERO)
    }
}

/// Auto-rotation rate in radians per second (two pi / 60 per unit speed).
pub fn auto_rotate_rate() -> f32 {
    TAU / 60.0 * AUTO_ROTATE_SPEED
}

/// Distance multiplier for `steps` zoom steps (positive moves closer).
pub fn zoom_factor(steps: f32) -> f32 {
    (1.0 - steps * ZOOM_SPEED).max(0.1)
}

/// Tracks whether a mouse drag belongs to the camera.
///
/// A drag is claimed or refused when a button goes down, depending on
/// whether the pointer is over egui at that moment. A claimed drag keeps
/// steering the camera when the cursor later crosses a panel.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragGate {
    #[default]
    Idle,
    Camera,
    Ui,
}

impl DragGate {
    /// Update from this frame's button state. Returns `true` while the
    /// camera owns the drag.
    pub fn update(&mut self, any_pressed: bool, any_just_pressed: bool, over_ui: bool) -> bool {
        if !any_pressed {
            *self = DragGate::Idle;
            return false;
        }
        if *self == DragGate::Idle || (any_just_pressed && *self == DragGate::Ui) {
            *self = if over_ui { DragGate::Ui } else { DragGate::Camera };
        }
        *self == DragGate::Camera
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            (camera_orbit, camera_zoom, camera_auto_rotate, apply_orbit).chain(),
        );
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    let orbit = OrbitController::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        AmbientLight {
            color: Color::WHITE,
            brightness: 160.0,
            ..default()
        },
        orbit.transform(),
        orbit,
        MainCamera,
    ));
}

/// Whether egui is currently capturing the pointer.
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}

const DRAG_BUTTONS: [MouseButton; 3] = [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Orbit with left drag, pan with right or middle drag.
fn camera_orbit(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut camera_query: Query<&mut OrbitController, With<MainCamera>>,
    mut contexts: EguiContexts,
    mut gate: Local<DragGate>,
) {
    let any_pressed = mouse_buttons.any_pressed(DRAG_BUTTONS);
    let any_just_pressed = mouse_buttons.any_just_pressed(DRAG_BUTTONS);

    // Only ask egui when a drag may start, not while one is in progress
    let over_ui = any_just_pressed || *gate == DragGate::Idle;
    let over_ui = over_ui && egui_wants_pointer(&mut contexts);

    if !gate.update(any_pressed, any_just_pressed, over_ui) || mouse_motion.delta == Vec2::ZERO {
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    let delta = mouse_motion.delta;
    if mouse_buttons.pressed(MouseButton::Left) {
        orbit.orbit(-delta.x * ROTATE_SPEED, delta.y * ROTATE_SPEED);
    } else {
        orbit.pan(delta);
    }
}

/// Handle scroll wheel and +/- keys for zoom.
fn camera_zoom(
    time: Res<Time>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    keys: Res<ButtonInput<KeyCode>>,
    mut camera_query: Query<&mut OrbitController, With<MainCamera>>,
    mut contexts: EguiContexts,
) {
    let mut steps = 0.0;
    if mouse_scroll.delta.y != 0.0 && !egui_wants_pointer(&mut contexts) {
        steps += mouse_scroll.delta.y;
    }

    let key_rate = KEY_ZOOM_RATE * time.delta_secs();
    if keys.pressed(KeyCode::Equal) || keys.pressed(KeyCode::NumpadAdd) {
        steps += key_rate;
    }
    if keys.pressed(KeyCode::Minus) || keys.pressed(KeyCode::NumpadSubtract) {
        steps -= key_rate;
    }
    if steps == 0.0 {
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    // Scrolling up moves the camera closer
    orbit.zoom(zoom_factor(steps));
}

/// Slowly circle the globe while the simulation is in standby.
pub fn camera_auto_rotate(
    time: Res<Time>,
    status: Res<SimulationStatus>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut camera_query: Query<&mut OrbitController, With<MainCamera>>,
) {
    if status.active || mouse_buttons.pressed(MouseButton::Left) {
        return;
    }

    let Ok(mut orbit) = camera_query.single_mut() else {
        return;
    };

    orbit.orbit(auto_rotate_rate() * time.delta_secs(), 0.0);
}

fn apply_orbit(
    mut camera_query: Query<(&mut Transform, &OrbitController), Changed<OrbitController>>,
) {
    for (mut transform, orbit) in &mut camera_query {
        *transform = orbit.transform();
    }
}
