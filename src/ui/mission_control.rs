//! Mission control panel (bottom of the screen).
//!
//! Three cards: asteroid parameter sliders, preset targets, and the impact
//! analysis. Parameters are locked while the simulation is active.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::impact::{ImpactEstimate, MISSION_READOUTS};
use crate::simulation::SimulationStatus;
use crate::targets::{PRESET_TARGETS, TargetPreset, preset_at};
use crate::types::{
    ANGLE_RANGE, ANGLE_STEP, AsteroidParameters, SIZE_RANGE, SIZE_STEP, SPEED_RANGE, SPEED_STEP,
    format_thousands,
};

use super::{colors, icons};

/// System that renders the mission control panel.
pub fn mission_control_system(
    mut contexts: EguiContexts,
    status: Res<SimulationStatus>,
    mut params: ResMut<AsteroidParameters>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let editable = !status.active;
    // Work on a copy so the resource is only marked changed on real edits
    let mut edited = *params;

    egui::TopBottomPanel::bottom("mission_control")
        .frame(
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(24, 16)),
        )
        .show(ctx, |ui| {
            render_title_row(ui, status.active);
            ui.add_space(10.0);

            ui.columns(3, |columns| {
                card(&mut columns[0], icons::ASTEROID, "Asteroid Parameters", |ui| {
                    render_sliders(ui, &mut edited, editable);
                });
                card(&mut columns[1], icons::MAP_PIN, "Impact Target", |ui| {
                    render_targets(ui, &mut edited, editable);
                });
                card(&mut columns[2], icons::WARNING, "Impact Analysis", |ui| {
                    render_analysis(ui, &ImpactEstimate::from_parameters(&edited));
                });
            });

            ui.add_space(10.0);
            render_readouts(ui);
        });

    if edited != *params {
        *params = edited;
    }
}

fn render_title_row(ui: &mut egui::Ui, active: bool) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} Mission Control", icons::TARGET))
                .size(17.0)
                .strong()
                .color(colors::TEXT),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (text, color) = if active {
                ("SIMULATION ACTIVE", colors::DANGER)
            } else {
                ("STANDBY", colors::MUTED)
            };
            ui.label(egui::RichText::new(text).strong().monospace().color(color));
        });
    });
}

fn card(ui: &mut egui::Ui, icon: &str, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_height(150.0);
            ui.label(
                egui::RichText::new(format!("{icon} {title}"))
                    .strong()
                    .color(colors::TEXT),
            );
            ui.add_space(8.0);
            add_contents(ui);
        });
}

fn render_sliders(ui: &mut egui::Ui, params: &mut AsteroidParameters, editable: bool) {
    ui.add_enabled_ui(editable, |ui| {
        ui.label(
            egui::RichText::new(format!("Diameter: {}m", params.size))
                .small()
                .color(colors::MUTED),
        );
        ui.add(
            egui::Slider::new(&mut params.size, SIZE_RANGE)
                .step_by(SIZE_STEP)
                .show_value(false),
        );

        ui.label(
            egui::RichText::new(format!(
                "Velocity: {} m/s",
                format_thousands(params.speed.round() as u64)
            ))
            .small()
            .color(colors::MUTED),
        );
        ui.add(
            egui::Slider::new(&mut params.speed, SPEED_RANGE)
                .step_by(SPEED_STEP)
                .show_value(false),
        );

        ui.label(
            egui::RichText::new(format!("Impact Angle: {}°", params.angle))
                .small()
                .color(colors::MUTED),
        );
        ui.add(
            egui::Slider::new(&mut params.angle, ANGLE_RANGE)
                .step_by(ANGLE_STEP)
                .show_value(false),
        );
    });
}

fn render_targets(ui: &mut egui::Ui, params: &mut AsteroidParameters, editable: bool) {
    let current = preset_at(params.target).map(|preset| preset.name);

    egui::Grid::new("preset_targets")
        .num_columns(2)
        .spacing(egui::vec2(6.0, 6.0))
        .show(ui, |ui| {
            for (i, preset) in PRESET_TARGETS.iter().enumerate() {
                let selected = current == Some(preset.name);
                if preset_button(ui, preset, selected, editable) {
                    params.set_target(preset.coord);
                    info!("Target set to {}", preset.name);
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!("Lat: {:.4}°", params.target.lat))
            .small()
            .monospace()
            .color(colors::MUTED),
    );
    ui.label(
        egui::RichText::new(format!("Lng: {:.4}°", params.target.lng))
            .small()
            .monospace()
            .color(colors::MUTED),
    );
}

/// Returns `true` when the preset was clicked.
fn preset_button(
    ui: &mut egui::Ui,
    preset: &TargetPreset,
    selected: bool,
    editable: bool,
) -> bool {
    let button = egui::Button::new(
        egui::RichText::new(format!("{} {}", preset.flag, preset.name)).small(),
    )
    .selected(selected)
    .min_size(egui::vec2(110.0, 24.0));

    ui.add_enabled(editable, button).clicked()
}

fn render_analysis(ui: &mut egui::Ui, estimate: &ImpactEstimate) {
    let rows = [
        ("Kinetic Energy:", estimate.energy_label(), colors::TEXT),
        ("Blast Radius:", estimate.blast_radius_label(), colors::DANGER),
        ("Est. Damage:", estimate.damage_label(), colors::DANGER),
    ];

    egui::Grid::new("impact_analysis")
        .num_columns(2)
        .spacing(egui::vec2(16.0, 6.0))
        .show(ui, |ui| {
            for (label, value, color) in rows {
                ui.label(egui::RichText::new(label).small().color(colors::MUTED));
                ui.label(egui::RichText::new(value).monospace().color(color));
                ui.end_row();
            }
        });
}

fn render_readouts(ui: &mut egui::Ui) {
    let readout_icons = [icons::GLOBE, icons::GAUGE, icons::TARGET, icons::SHIELD];

    ui.columns(MISSION_READOUTS.len(), |columns| {
        let cells = columns.iter_mut().zip(MISSION_READOUTS).zip(readout_icons);
        for ((column, readout), icon) in cells {
            column.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(20.0).color(colors::PRIMARY));
                ui.label(
                    egui::RichText::new(readout.value)
                        .size(17.0)
                        .strong()
                        .monospace()
                        .color(colors::TEXT),
                );
                ui.label(egui::RichText::new(readout.label).small().color(colors::MUTED));
            });
        }
    });
}
