//! Emergency alert modal.
//!
//! Renders the mounted [`AlertOverlay`]: a translucent red backdrop and a
//! centered card with the localized warning, the countdown, and static
//! statistics. Dismissing starts the fade; the overlay state removes itself.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::alert::{ActiveAlert, AlertOverlay, AlertPhase};

use super::{colors, icons};

/// System that renders the alert overlay when one is mounted.
pub fn alert_overlay_system(mut contexts: EguiContexts, mut active: ResMut<ActiveAlert>) {
    let Some(overlay) = active.0.as_mut() else {
        return;
    };
    if matches!(overlay.phase(), AlertPhase::Removed) {
        return;
    }

    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let opacity = overlay.opacity();
    render_backdrop(ctx, opacity);

    let mut dismiss = false;
    let mut replay = false;

    egui::Window::new("impact_alert")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .frame(
            egui::Frame::new()
                .fill(colors::ALERT_BG)
                .stroke(egui::Stroke::new(2.0, colors::DANGER))
                .corner_radius(12.0)
                .inner_margin(egui::Margin::same(24)),
        )
        .show(ctx, |ui| {
            ui.set_opacity(opacity);
            ui.set_max_width(620.0);
            render_alert_card(ui, overlay, &mut dismiss, &mut replay);
        });

    if replay {
        overlay.request_replay();
    }
    if dismiss {
        overlay.dismiss();
    }
}

fn render_backdrop(ctx: &egui::Context, opacity: f32) {
    egui::Area::new(egui::Id::new("impact_alert_backdrop"))
        .fixed_pos(egui::pos2(0.0, 0.0))
        .order(egui::Order::Middle)
        .interactable(false)
        .show(ctx, |ui| {
            let screen_rect = ui.ctx().screen_rect();
            ui.painter()
                .rect_filled(screen_rect, 0.0, colors::BACKDROP.gamma_multiply(opacity));
        });
}

fn render_alert_card(
    ui: &mut egui::Ui,
    overlay: &AlertOverlay,
    dismiss: &mut bool,
    replay: &mut bool,
) {
    let text = overlay.text();

    // Header: icon, flag + badge, title, replay and close
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icons::WARNING).size(36.0).color(colors::DANGER));
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(text.flag).size(22.0));
                ui.label(
                    egui::RichText::new("EMERGENCY ALERT")
                        .strong()
                        .background_color(colors::DANGER)
                        .color(colors::TEXT),
                );
            });
            ui.label(egui::RichText::new(text.title).size(20.0).strong().color(colors::DANGER));
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button(icons::CLOSE).on_hover_text("Close").clicked() {
                *dismiss = true;
            }
            if ui.button(icons::SPEAKER).on_hover_text("Replay alert tone").clicked() {
                *replay = true;
            }
        });
    });

    ui.add_space(12.0);
    ui.label(egui::RichText::new(text.warning).size(17.0).strong().color(colors::DANGER));
    ui.label(
        egui::RichText::new(format!("⚠ {}", text.evacuation))
            .size(19.0)
            .strong()
            .color(colors::DANGER),
    );
    ui.label(
        egui::RichText::new(format!("{} {}", icons::MAP_PIN, overlay.target_city))
            .small()
            .color(colors::MUTED),
    );

    ui.add_space(12.0);
    let stats = [
        (icons::CLOCK, overlay.countdown.display(), text.time_remaining, colors::DANGER),
        (icons::USERS, "2.3M".to_string(), text.affected_population, colors::WARNING),
        (icons::MAP_PIN, "15km".to_string(), "Blast Radius", colors::PRIMARY),
        (icons::SHIELD, "73%".to_string(), "DART Success Rate", colors::SUCCESS),
    ];
    ui.columns(stats.len(), |columns| {
        for (column, (icon, value, label, color)) in columns.iter_mut().zip(stats) {
            column.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icon).size(20.0).color(color));
                ui.label(egui::RichText::new(value).size(22.0).strong().monospace().color(color));
                ui.label(egui::RichText::new(label).small().color(colors::MUTED));
            });
        }
    });

    ui.add_space(12.0);
    ui.label(format!("• {}", text.evacuation_route));
    ui.label(format!("• {}", text.stay_calm));

    ui.add_space(12.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add(egui::Button::new("Acknowledge").min_size(egui::vec2(120.0, 30.0)))
            .clicked()
        {
            *dismiss = true;
        }
    });
}
