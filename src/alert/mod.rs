//! Emergency alert overlay state.
//!
//! The overlay is mounted when the simulation raises `alerts_visible` and
//! unmounted when it clears. While mounted it owns its countdown, its
//! dismiss fade and the once-per-mount tone guard. Dropping the overlay
//! drops all of its timers.
//!
//! Rendering lives in `ui::alert_overlay`; this module holds the logic.

pub mod locale;
pub mod tone;

use std::time::Duration;

use bevy::prelude::*;

use crate::simulation::{AlertDismissed, SimulationStatus};

pub use locale::{AlertText, Locale, alert_text};
pub use tone::PlayAlertTone;

/// Initial countdown value (seconds).
pub const DEFAULT_IMPACT_SECONDS: u32 = 180;

/// Fade-out time between dismiss and removal (seconds).
pub const DISMISS_FADE_SECS: f32 = 0.3;

/// Alert configuration applied at mount time.
#[derive(Resource, Clone, Debug)]
pub struct AlertSettings {
    /// Language code used for the string table lookup.
    pub language: String,
    /// City named in the alert header.
    pub target_city: String,
    /// Countdown start value (seconds).
    pub impact_seconds: u32,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            language: Locale::Arabic.code().to_string(),
            target_city: "Cairo".to_string(),
            impact_seconds: DEFAULT_IMPACT_SECONDS,
        }
    }
}

/// One-second countdown clamped at zero.
///
/// Reaching zero is cosmetic only; nothing is triggered.
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: u32,
    timer: Timer,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining: seconds,
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn tick(&mut self, delta: Duration) {
        if self.remaining == 0 {
            return;
        }
        self.timer.tick(delta);
        let elapsed = self.timer.times_finished_this_tick();
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    /// `MM:SS` rendering of the remaining time.
    pub fn display(&self) -> String {
        format_countdown(self.remaining)
    }
}

/// Format whole seconds as zero-padded `MM:SS`.
pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Lifecycle phase of a mounted overlay.
#[derive(Debug, Clone)]
pub enum AlertPhase {
    Visible,
    Dismissing(Timer),
    Removed,
}

/// State of the mounted alert overlay.
#[derive(Debug, Clone)]
pub struct AlertOverlay {
    pub locale_code: String,
    pub target_city: String,
    pub countdown: Countdown,
    phase: AlertPhase,
    tone_played: bool,
    replays_requested: u32,
}

impl AlertOverlay {
    pub fn mount(settings: &AlertSettings) -> Self {
        Self {
            locale_code: settings.language.clone(),
            target_city: settings.target_city.clone(),
            countdown: Countdown::new(settings.impact_seconds),
            phase: AlertPhase::Visible,
            tone_played: false,
            replays_requested: 0,
        }
    }

    pub fn text(&self) -> &'static AlertText {
        alert_text(&self.locale_code)
    }

    pub fn phase(&self) -> &AlertPhase {
        &self.phase
    }

    /// Begin the dismiss fade. Ignored unless currently visible.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, AlertPhase::Visible) {
            self.phase =
                AlertPhase::Dismissing(Timer::from_seconds(DISMISS_FADE_SECS, TimerMode::Once));
        }
    }

    /// Advance countdown and fade.
    ///
    /// Returns `true` on the tick the overlay transitions to removed.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.countdown.tick(delta);

        let AlertPhase::Dismissing(fade) = &mut self.phase else {
            return false;
        };
        fade.tick(delta);
        if !fade.is_finished() {
            return false;
        }
        self.phase = AlertPhase::Removed;
        true
    }

    /// Opacity for rendering: 1 while visible, fading to 0 while dismissing.
    pub fn opacity(&self) -> f32 {
        match &self.phase {
            AlertPhase::Visible => 1.0,
            AlertPhase::Dismissing(fade) => 1.0 - fade.fraction(),
            AlertPhase::Removed => 0.0,
        }
    }

    /// Ask for the tone to be played again. Not subject to the mount guard.
    pub fn request_replay(&mut self) {
        self.replays_requested += 1;
    }

    /// Drain pending tone requests: the mount tone on the first call, plus
    /// any replays requested since the last call.
    pub fn take_tone_requests(&mut self) -> u32 {
        let mount = u32::from(!std::mem::replace(&mut self.tone_played, true));
        mount + std::mem::take(&mut self.replays_requested)
    }
}

/// Currently mounted overlay, if any.
#[derive(Resource, Default)]
pub struct ActiveAlert(pub Option<AlertOverlay>);

/// Plugin providing alert overlay state and the alert tone.
pub struct AlertPlugin;

impl Plugin for AlertPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AlertSettings>()
            .init_resource::<ActiveAlert>()
            .add_message::<PlayAlertTone>()
            .add_systems(
                Update,
                (
                    sync_alert_mount,
                    tick_alert,
                    emit_tone_requests,
                    tone::play_alert_tone,
                )
                    .chain(),
            );
    }
}

/// Mount or unmount the overlay to follow `alerts_visible`.
fn sync_alert_mount(
    status: Res<SimulationStatus>,
    settings: Res<AlertSettings>,
    mut active: ResMut<ActiveAlert>,
) {
    match (status.alerts_visible, active.0.is_some()) {
        (true, false) => {
            let overlay = AlertOverlay::mount(&settings);
            info!(
                "Alert overlay mounted ({}, {})",
                overlay.locale_code, overlay.target_city
            );
            active.0 = Some(overlay);
        }
        (false, true) => {
            active.0 = None;
        }
        _ => {}
    }
}

fn tick_alert(
    time: Res<Time>,
    mut active: ResMut<ActiveAlert>,
    mut dismissed: MessageWriter<AlertDismissed>,
) {
    let Some(overlay) = active.0.as_mut() else {
        return;
    };

    if overlay.tick(time.delta()) {
        dismissed.write(AlertDismissed);
    }
}

/// Forward the overlay's mount tone and replays as [`PlayAlertTone`] messages.
fn emit_tone_requests(
    mut active: ResMut<ActiveAlert>,
    mut tone_requests: MessageWriter<PlayAlertTone>,
) {
    let Some(overlay) = active.0.as_mut() else {
        return;
    };

    for _ in 0..overlay.take_tone_requests() {
        tone_requests.write(PlayAlertTone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(180), "03:00");
        assert_eq!(format_countdown(179), "02:59");
        assert_eq!(format_countdown(61), "01:01");
        assert_eq!(format_countdown(0), "00:00");
    }

    #[test]
    fn test_countdown_decrements_per_second() {
        let mut countdown = Countdown::new(180);
        countdown.tick(Duration::from_millis(999));
        assert_eq!(countdown.remaining(), 180);
        countdown.tick(Duration::from_millis(1));
        assert_eq!(countdown.remaining(), 179);
        countdown.tick(Duration::from_secs(3));
        assert_eq!(countdown.display(), "02:56");
    }

    #[test]
    fn test_countdown_clamps_at_zero() {
        let mut countdown = Countdown::new(2);
        countdown.tick(Duration::from_secs(10));
        assert_eq!(countdown.remaining(), 0);
        countdown.tick(Duration::from_secs(10));
        assert_eq!(countdown.display(), "00:00");
    }

    #[test]
    fn test_dismiss_fades_then_removes() {
        let mut overlay = AlertOverlay::mount(&AlertSettings::default());
        assert_eq!(overlay.opacity(), 1.0);
        assert!(!overlay.tick(Duration::from_secs(5)));

        overlay.dismiss();
        assert!(matches!(overlay.phase(), AlertPhase::Dismissing(_)));
        assert!(!overlay.tick(Duration::from_millis(150)));
        assert!(overlay.opacity() < 1.0 && overlay.opacity() > 0.0);
        assert!(overlay.tick(Duration::from_millis(150)));
        assert!(matches!(overlay.phase(), AlertPhase::Removed));

        // Removal is reported once
        assert!(!overlay.tick(Duration::from_millis(300)));
    }

    #[test]
    fn test_second_dismiss_does_not_restart_fade() {
        let mut overlay = AlertOverlay::mount(&AlertSettings::default());
        overlay.dismiss();
        overlay.tick(Duration::from_millis(200));
        overlay.dismiss();
        assert!(overlay.tick(Duration::from_millis(100)));
    }

    #[test]
    fn test_mount_tone_requested_once() {
        let mut overlay = AlertOverlay::mount(&AlertSettings::default());
        assert_eq!(overlay.take_tone_requests(), 1);
        assert_eq!(overlay.take_tone_requests(), 0);

        // A fresh mount gets a fresh guard
        let mut remounted = AlertOverlay::mount(&AlertSettings::default());
        assert_eq!(remounted.take_tone_requests(), 1);
    }

    #[test]
    fn test_replay_bypasses_mount_guard() {
        let mut overlay = AlertOverlay::mount(&AlertSettings::default());
        overlay.request_replay();
        assert_eq!(overlay.take_tone_requests(), 2);

        overlay.request_replay();
        overlay.request_replay();
        assert_eq!(overlay.take_tone_requests(), 2);
        assert_eq!(overlay.take_tone_requests(), 0);
    }

    #[test]
    fn test_default_settings_use_arabic() {
        let overlay = AlertOverlay::mount(&AlertSettings::default());
        assert_eq!(overlay.text(), &locale::ARABIC);
        assert_eq!(overlay.countdown.display(), "03:00");
    }
}
