//! Alert text selection, countdown formatting and target selection.

use std::time::Duration;

use oblivara::alert::{AlertOverlay, AlertSettings, Countdown, Locale, alert_text, format_countdown};
use oblivara::targets::find_preset;
use oblivara::types::AsteroidParameters;

#[test]
fn test_unknown_language_falls_back_to_english() {
    assert_eq!(alert_text("de"), Locale::English.text());
    assert_eq!(alert_text(""), Locale::English.text());
}

#[test]
fn test_every_locale_resolves_to_itself() {
    for locale in Locale::ALL {
        assert_eq!(alert_text(locale.code()), locale.text());
        assert_eq!(locale.code().parse::<Locale>(), Ok(locale));
    }
}

#[test]
fn test_countdown_formatting() {
    assert_eq!(format_countdown(180), "03:00");
    assert_eq!(format_countdown(0), "00:00");
    assert_eq!(format_countdown(600), "10:00");
}

#[test]
fn test_countdown_stops_at_zero() {
    let mut countdown = Countdown::new(3);
    for _ in 0..10 {
        countdown.tick(Duration::from_secs(1));
    }
    assert_eq!(countdown.display(), "00:00");
}

#[test]
fn test_custom_settings_flow_into_overlay() {
    let settings = AlertSettings {
        language: "es".to_string(),
        target_city: "Tokyo".to_string(),
        impact_seconds: 90,
    };
    let overlay = AlertOverlay::mount(&settings);
    assert_eq!(overlay.text(), Locale::Spanish.text());
    assert_eq!(overlay.target_city, "Tokyo");
    assert_eq!(overlay.countdown.display(), "01:30");
}

#[test]
fn test_selecting_preset_changes_only_target() {
    let mut params = AsteroidParameters {
        size: 800.0,
        speed: 33_000.0,
        angle: 60.0,
        ..Default::default()
    };
    let before = params;

    let tokyo = find_preset("Tokyo").expect("Tokyo preset");
    params.set_target(tokyo.coord);

    assert_eq!(params.target, tokyo.coord);
    assert_eq!(params.size, before.size);
    assert_eq!(params.speed, before.speed);
    assert_eq!(params.angle, before.angle);
}

#[test]
fn test_unknown_preset_is_none() {
    assert!(find_preset("Atlantis").is_none());
}
