//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

pub const PLAY: &str = egui_phosphor::regular::PLAY;
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
pub const CLOSE: &str = egui_phosphor::regular::X;
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
pub const ASTEROID: &str = egui_phosphor::regular::LIGHTNING;
pub const MAP_PIN: &str = egui_phosphor::regular::MAP_PIN;
pub const WARNING: &str = egui_phosphor::regular::WARNING;
pub const SHIELD: &str = egui_phosphor::regular::SHIELD;
pub const GLOBE: &str = egui_phosphor::regular::GLOBE;
pub const GAUGE: &str = egui_phosphor::regular::GAUGE;
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
pub const USERS: &str = egui_phosphor::regular::USERS;
pub const SPEAKER: &str = egui_phosphor::regular::SPEAKER_HIGH;
pub const TRANSLATE: &str = egui_phosphor::regular::TRANSLATE;
