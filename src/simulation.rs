//! Simulation state holder.
//!
//! Owns the active flag, the alert-visibility flag and the pending alert
//! timer. All mutations arrive as [`SimulationCommand`] messages so the
//! header buttons, keyboard shortcuts and tests share one code path.

use std::time::Duration;

use bevy::prelude::*;

use crate::types::{ALERT_DELAY_SECS, AsteroidParameters};

/// Request to change the simulation run state.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationCommand {
    Start,
    Pause,
    /// Start when inactive, pause when active.
    Toggle,
    /// Pause and restore the default asteroid parameters.
    Reset,
}

/// Sent by the alert overlay once its dismiss fade has finished.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct AlertDismissed;

/// Sent after a reset so scene systems can return to their initial pose.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct SimulationReset;

/// Run state of the simulation.
#[derive(Resource, Debug, Default)]
pub struct SimulationStatus {
    /// Whether the asteroid is animating.
    pub active: bool,
    /// Whether the alert overlay should be mounted.
    pub alerts_visible: bool,
    /// Deferred alert reveal. Dropping it cancels the reveal.
    pending_alert: Option<Timer>,
}

impl SimulationStatus {
    /// Activate the simulation and schedule the alert reveal.
    ///
    /// Starting an already active simulation keeps the existing schedule.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.pending_alert = Some(Timer::from_seconds(ALERT_DELAY_SECS, TimerMode::Once));
    }

    /// Deactivate, hide the alert and cancel any pending reveal.
    pub fn pause(&mut self) {
        self.active = false;
        self.alerts_visible = false;
        self.pending_alert = None;
    }

    /// Pause and restore the default parameters.
    pub fn reset(&mut self, params: &mut AsteroidParameters) {
        self.pause();
        params.reset();
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Hide the alert (overlay dismiss callback).
    pub fn dismiss_alert(&mut self) {
        self.alerts_visible = false;
    }

    /// Whether an alert reveal is scheduled but has not fired yet.
    pub fn alert_pending(&self) -> bool {
        self.pending_alert.is_some()
    }

    /// Advance the pending alert timer.
    ///
    /// Returns `true` on the tick where the alert becomes visible.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.pending_alert.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if !timer.is_finished() {
            return false;
        }

        self.pending_alert = None;
        self.alerts_visible = true;
        true
    }
}

/// Plugin providing the simulation state holder.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationStatus>()
            .init_resource::<AsteroidParameters>()
            .add_message::<SimulationCommand>()
            .add_message::<AlertDismissed>()
            .add_message::<SimulationReset>()
            .add_systems(
                Update,
                (
                    handle_simulation_commands,
                    handle_alert_dismissed,
                    advance_alert_schedule,
                )
                    .chain(),
            );
    }
}

/// Apply queued run-state commands.
fn handle_simulation_commands(
    mut commands: MessageReader<SimulationCommand>,
    mut status: ResMut<SimulationStatus>,
    mut params: ResMut<AsteroidParameters>,
    mut reset_events: MessageWriter<SimulationReset>,
) {
    for command in commands.read() {
        match command {
            SimulationCommand::Start => status.start(),
            SimulationCommand::Pause => status.pause(),
            SimulationCommand::Toggle => status.toggle(),
            SimulationCommand::Reset => {
                status.reset(&mut params);
                reset_events.write(SimulationReset);
            }
        }

        info!(
            "Simulation {:?}: {}",
            command,
            if status.active { "active" } else { "standby" }
        );
    }
}

fn handle_alert_dismissed(
    mut dismissed: MessageReader<AlertDismissed>,
    mut status: ResMut<SimulationStatus>,
) {
    if dismissed.read().count() > 0 {
        status.dismiss_alert();
        info!("Alert dismissed");
    }
}

/// Reveal the alert once the start delay has elapsed.
fn advance_alert_schedule(time: Res<Time>, mut status: ResMut<SimulationStatus>) {
    if status.tick(time.delta()) {
        info!("Impact alert raised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standby() {
        let status = SimulationStatus::default();
        assert!(!status.active);
        assert!(!status.alerts_visible);
        assert!(!status.alert_pending());
    }

    #[test]
    fn test_alert_appears_after_delay() {
        let mut status = SimulationStatus::default();
        status.start();
        assert!(status.active);
        assert!(!status.tick(Duration::from_millis(1999)));
        assert!(!status.alerts_visible);
        assert!(status.tick(Duration::from_millis(1)));
        assert!(status.alerts_visible);
        assert!(!status.alert_pending());
    }

    #[test]
    fn test_pause_cancels_pending_alert() {
        let mut status = SimulationStatus::default();
        status.start();
        status.tick(Duration::from_millis(1500));
        status.pause();
        assert!(!status.alert_pending());
        assert!(!status.tick(Duration::from_secs(10)));
        assert!(!status.alerts_visible);
    }

    #[test]
    fn test_reset_cancels_and_restores() {
        let mut status = SimulationStatus::default();
        let mut params = AsteroidParameters {
            size: 40.0,
            ..Default::default()
        };
        status.start();
        status.reset(&mut params);
        assert!(!status.active);
        assert!(!status.tick(Duration::from_secs(5)));
        assert_eq!(params, AsteroidParameters::default());
    }

    #[test]
    fn test_restart_does_not_reschedule() {
        let mut status = SimulationStatus::default();
        status.start();
        status.tick(Duration::from_millis(1500));
        status.start();
        assert!(status.tick(Duration::from_millis(500)));
    }

    #[test]
    fn test_toggle_flips_active() {
        let mut status = SimulationStatus::default();
        status.toggle();
        assert!(status.active);
        status.toggle();
        assert!(!status.active);
        assert!(!status.alert_pending());
    }

    #[test]
    fn test_dismiss_keeps_simulation_running() {
        let mut status = SimulationStatus::default();
        status.start();
        status.tick(Duration::from_secs(2));
        status.dismiss_alert();
        assert!(status.active);
        assert!(!status.alerts_visible);
    }
}
