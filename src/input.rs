//! Keyboard shortcuts for simulation control.
//!
//! Space toggles start/pause, R resets. Camera keys live in `camera`.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::simulation::SimulationCommand;

/// Plugin providing keyboard input handling.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, keyboard_shortcuts);
    }
}

/// Map a just-pressed key to a simulation command.
pub fn shortcut_command(key: KeyCode) -> Option<SimulationCommand> {
    match key {
        KeyCode::Space => Some(SimulationCommand::Toggle),
        KeyCode::KeyR => Some(SimulationCommand::Reset),
        _ => None,
    }
}

fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: MessageWriter<SimulationCommand>,
    mut contexts: EguiContexts,
) {
    // Don't steal keystrokes from focused egui widgets
    if contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.wants_keyboard_input())
    {
        return;
    }

    for key in keys.get_just_pressed() {
        if let Some(command) = shortcut_command(*key) {
            commands.write(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts() {
        assert_eq!(shortcut_command(KeyCode::Space), Some(SimulationCommand::Toggle));
        assert_eq!(shortcut_command(KeyCode::KeyR), Some(SimulationCommand::Reset));
        assert_eq!(shortcut_command(KeyCode::KeyQ), None);
    }
}
