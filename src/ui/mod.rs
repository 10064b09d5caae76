//! UI module providing egui-based interface.
//!
//! Header bar on top, mission control panel at the bottom, and the
//! emergency alert modal on top of everything while mounted.

mod alert_overlay;
mod header;
pub mod icons;
mod mission_control;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    header::header_system,
                    mission_control::mission_control_system,
                    alert_overlay::alert_overlay_system,
                )
                    .chain()
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}

/// Colors shared by the panels.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(12, 14, 32, 225);
    pub const CARD_BG: Color32 = Color32::from_rgba_premultiplied(24, 28, 52, 230);
    pub const ALERT_BG: Color32 = Color32::from_rgba_premultiplied(48, 16, 20, 245);
    pub const BACKDROP: Color32 = Color32::from_rgba_premultiplied(40, 0, 0, 50);
    pub const TEXT: Color32 = Color32::from_rgb(230, 232, 240);
    pub const MUTED: Color32 = Color32::from_rgb(150, 155, 175);
    pub const PRIMARY: Color32 = Color32::from_rgb(70, 130, 230);
    pub const WARNING: Color32 = Color32::from_rgb(221, 170, 85);
    pub const DANGER: Color32 = Color32::from_rgb(224, 85, 85);
    pub const SUCCESS: Color32 = Color32::from_rgb(85, 200, 120);
}
