//! Oblivara - Asteroid Impact Visualizer
//!
//! A desktop application that animates a hypothetical asteroid approaching
//! a chosen city and raises a multilingual emergency alert.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use oblivara::alert::AlertPlugin;
use oblivara::camera::CameraPlugin;
use oblivara::input::InputPlugin;
use oblivara::render::RenderPlugin;
use oblivara::simulation::SimulationPlugin;
use oblivara::types::SessionSeed;
use oblivara::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Oblivara".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(SessionSeed::default())
        .add_plugins((
            SimulationPlugin,
            AlertPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
