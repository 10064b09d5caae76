//! Oblivara - Asteroid Impact Visualizer
//!
//! A library crate providing the simulation state, scene and overlay
//! components for testing and integration purposes.

pub mod alert;
pub mod camera;
pub mod geo;
pub mod impact;
pub mod input;
pub mod render;
pub mod simulation;
pub mod targets;
pub mod types;
pub mod ui;
