//! Rendering systems for the impact scene.
//!
//! This module provides the globe, the approaching asteroid, its
//! trajectory line, and the background starfield.

pub mod asteroid;
mod background;
pub mod earth;
pub mod trajectory;

use bevy::prelude::*;

use self::asteroid::AsteroidPlugin;
use self::background::BackgroundPlugin;
use self::earth::EarthPlugin;
use self::trajectory::TrajectoryPlugin;

pub use self::background::{STAR_COUNT, star_positions};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            BackgroundPlugin,
            EarthPlugin,
            AsteroidPlugin,
            TrajectoryPlugin,
        ));
    }
}
