//! Header bar and mission brief.
//!
//! The header holds the Start/Pause toggle, Reset, and the alert language
//! selector. The brief is a small static card under it.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::alert::{AlertSettings, Locale};
use crate::simulation::{SimulationCommand, SimulationStatus};

use super::{colors, icons};

/// System that renders the header bar.
pub fn header_system(
    mut contexts: EguiContexts,
    status: Res<SimulationStatus>,
    mut settings: ResMut<AlertSettings>,
    mut commands: MessageWriter<SimulationCommand>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::TopBottomPanel::top("header")
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(24, 12)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new("OBLIVARA")
                            .size(24.0)
                            .strong()
                            .color(colors::TEXT),
                    );
                    ui.label(
                        egui::RichText::new("NASA Space Apps Challenge 2024")
                            .size(11.0)
                            .color(colors::MUTED),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.spacing_mut().item_spacing.x = 10.0;

                    let reset = egui::Button::new(
                        egui::RichText::new(format!("{} Reset", icons::RESET)).size(15.0),
                    );
                    if ui.add(reset).on_hover_text("Reset simulation (R)").clicked() {
                        commands.write(SimulationCommand::Reset);
                    }

                    render_run_toggle(ui, status.active, &mut commands);

                    ui.separator();
                    render_language_selector(ui, &mut settings);
                });
            });
        });

    render_mission_brief(ctx);
}

fn render_run_toggle(
    ui: &mut egui::Ui,
    active: bool,
    commands: &mut MessageWriter<SimulationCommand>,
) {
    let (label, fill) = if active {
        (format!("{} Pause Mission", icons::PAUSE), colors::WARNING)
    } else {
        (format!("{} Start Simulation", icons::PLAY), colors::PRIMARY)
    };

    let button = egui::Button::new(egui::RichText::new(label).size(15.0).strong())
        .fill(fill)
        .min_size(egui::vec2(170.0, 34.0));

    if ui.add(button).on_hover_text("Space").clicked() {
        commands.write(SimulationCommand::Toggle);
    }
}

/// Language used by the next alert.
fn render_language_selector(ui: &mut egui::Ui, settings: &mut AlertSettings) {
    let current = settings
        .language
        .parse::<Locale>()
        .map_or(settings.language.as_str(), |locale| locale.display_name());

    egui::ComboBox::from_id_salt("alert_language")
        .selected_text(current)
        .show_ui(ui, |ui| {
            for locale in Locale::ALL {
                let selected = settings.language == locale.code();
                if ui.selectable_label(selected, locale.display_name()).clicked() && !selected {
                    settings.language = locale.code().to_string();
                    info!("Alert language set to {}", locale.code());
                }
            }
        });
    ui.label(egui::RichText::new(icons::TRANSLATE).color(colors::MUTED));
}

fn render_mission_brief(ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("mission_brief"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(24.0, 88.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(16))
                .show(ui, |ui| {
                    ui.set_max_width(340.0);
                    ui.label(
                        egui::RichText::new("Mission Objective")
                            .size(16.0)
                            .strong()
                            .color(colors::TEXT),
                    );
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(
                            "Simulate asteroid impacts on Earth. Pick a target city, tune the \
                             asteroid, and receive multilingual emergency alerts.",
                        )
                        .size(13.0)
                        .color(colors::MUTED),
                    );
                });
        });
}
