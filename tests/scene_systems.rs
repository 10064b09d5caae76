//! Headless tests for the asteroid and camera systems.
//!
//! The asteroid and camera entities are spawned by hand so no mesh,
//! material or egui resources are needed.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use oblivara::camera::{MainCamera, OrbitController, camera_auto_rotate};
use oblivara::geo::surface_point;
use oblivara::render::asteroid::{
    APPROACH_START, ApproachProgress, Asteroid, animate_asteroid, reset_asteroid,
};
use oblivara::simulation::{SimulationCommand, SimulationPlugin};
use oblivara::types::AsteroidParameters;

const FRAME: Duration = Duration::from_millis(200);

fn create_scene_app() -> (App, Entity, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(FRAME))
        .init_resource::<ButtonInput<MouseButton>>()
        .add_plugins(SimulationPlugin)
        .add_systems(
            Update,
            ((reset_asteroid, animate_asteroid).chain(), camera_auto_rotate),
        );

    let asteroid = app
        .world_mut()
        .spawn((
            Asteroid,
            ApproachProgress::default(),
            Transform::from_translation(APPROACH_START),
        ))
        .id();
    let camera = app
        .world_mut()
        .spawn((MainCamera, OrbitController::default()))
        .id();

    app.update();
    (app, asteroid, camera)
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn asteroid_state(app: &App, asteroid: Entity) -> (Vec3, f32) {
    let entity = app.world().entity(asteroid);
    let translation = entity
        .get::<Transform>()
        .expect("asteroid transform")
        .translation;
    let progress = entity.get::<ApproachProgress>().expect("asteroid progress").0;
    (translation, progress)
}

fn camera_yaw(app: &App, camera: Entity) -> f32 {
    app.world()
        .entity(camera)
        .get::<OrbitController>()
        .expect("orbit controller")
        .yaw
}

#[test]
fn test_asteroid_static_while_inactive() {
    let (mut app, asteroid, _) = create_scene_app();
    run_frames(&mut app, 10);

    let (translation, progress) = asteroid_state(&app, asteroid);
    assert_eq!(translation, APPROACH_START);
    assert_eq!(progress, 0.0);
}

#[test]
fn test_asteroid_moves_toward_target_while_active() {
    let (mut app, asteroid, _) = create_scene_app();
    app.world_mut().write_message(SimulationCommand::Start);
    run_frames(&mut app, 3);

    let target = surface_point(app.world().resource::<AsteroidParameters>().target);
    let (translation, progress) = asteroid_state(&app, asteroid);
    assert!(progress > 0.0 && progress < 1.0);
    assert!(translation.distance(target) < APPROACH_START.distance(target));
}

#[test]
fn test_pause_freezes_asteroid() {
    let (mut app, asteroid, _) = create_scene_app();
    app.world_mut().write_message(SimulationCommand::Start);
    run_frames(&mut app, 3);
    app.world_mut().write_message(SimulationCommand::Pause);
    app.update();

    let paused = asteroid_state(&app, asteroid);
    run_frames(&mut app, 5);
    assert_eq!(asteroid_state(&app, asteroid), paused);
}

#[test]
fn test_reset_returns_asteroid_to_start() {
    let (mut app, asteroid, _) = create_scene_app();
    app.world_mut().write_message(SimulationCommand::Start);
    run_frames(&mut app, 3);
    assert_ne!(asteroid_state(&app, asteroid).0, APPROACH_START);

    app.world_mut().write_message(SimulationCommand::Reset);
    run_frames(&mut app, 2);

    let (translation, progress) = asteroid_state(&app, asteroid);
    assert_eq!(translation, APPROACH_START);
    assert_eq!(progress, 0.0);
}

#[test]
fn test_camera_rotates_only_in_standby() {
    let (mut app, _, camera) = create_scene_app();
    let initial = camera_yaw(&app, camera);
    run_frames(&mut app, 3);
    let standby = camera_yaw(&app, camera);
    assert_ne!(standby, initial, "Camera should auto-rotate in standby");

    app.world_mut().write_message(SimulationCommand::Start);
    app.update();
    let active = camera_yaw(&app, camera);
    run_frames(&mut app, 5);
    assert_eq!(camera_yaw(&app, camera), active);
}
