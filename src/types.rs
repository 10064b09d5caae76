//! Core simulation types and compile-time defaults.

use std::ops::RangeInclusive;

use bevy::prelude::*;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Default asteroid diameter (meters)
pub const DEFAULT_SIZE: f64 = 500.0;

/// Default asteroid speed (m/s)
pub const DEFAULT_SPEED: f64 = 20_000.0;

/// Default impact angle (degrees)
pub const DEFAULT_ANGLE: f64 = 45.0;

/// Default target: Cairo.
pub const DEFAULT_TARGET: GeoCoord = GeoCoord::new(30.0444, 31.2357);

/// Slider range and step for the asteroid diameter (meters).
pub const SIZE_RANGE: RangeInclusive<f64> = 10.0..=2000.0;
pub const SIZE_STEP: f64 = 10.0;

/// Slider range and step for the asteroid speed (m/s).
pub const SPEED_RANGE: RangeInclusive<f64> = 5_000.0..=50_000.0;
pub const SPEED_STEP: f64 = 1_000.0;

/// Slider range and step for the impact angle (degrees).
pub const ANGLE_RANGE: RangeInclusive<f64> = 15.0..=90.0;
pub const ANGLE_STEP: f64 = 5.0;

/// Delay between starting the simulation and showing the alert overlay (seconds).
pub const ALERT_DELAY_SECS: f32 = 2.0;

/// Geodetic coordinate in degrees.
///
/// No range validation happens here; out-of-range values project to
/// well-defined (if odd) points on the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoord {
    /// Latitude in degrees, nominally [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, nominally [-180, 180].
    pub lng: f64,
}

impl GeoCoord {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// User-configurable asteroid parameters shared by the panel and the scene.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct AsteroidParameters {
    /// Diameter in meters
    pub size: f64,
    /// Speed in meters per second
    pub speed: f64,
    /// Impact angle in degrees
    pub angle: f64,
    /// Impact point
    pub target: GeoCoord,
}

impl Default for AsteroidParameters {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
            angle: DEFAULT_ANGLE,
            target: DEFAULT_TARGET,
        }
    }
}

impl AsteroidParameters {
    /// Restore the default parameter tuple.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace only the target, leaving size, speed and angle untouched.
    pub fn set_target(&mut self, target: GeoCoord) {
        self.target = target;
    }
}

/// Per-session random seed for procedural geometry (asteroid shape, stars).
///
/// Drawn once at startup so the scene is random between runs but stable
/// within one.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SessionSeed(pub u64);

impl Default for SessionSeed {
    fn default() -> Self {
        Self(rand::random())
    }
}

/// Format an integer with comma thousands separators ("20,000").
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let params = AsteroidParameters::default();
        assert_eq!(params.size, 500.0);
        assert_eq!(params.speed, 20_000.0);
        assert_eq!(params.angle, 45.0);
        assert_eq!(params.target, GeoCoord::new(30.0444, 31.2357));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut params = AsteroidParameters {
            size: 1990.0,
            speed: 5_000.0,
            angle: 90.0,
            target: GeoCoord::new(-10.0, 170.0),
        };
        params.reset();
        assert_eq!(params, AsteroidParameters::default());
    }

    #[test]
    fn test_set_target_only_touches_target() {
        let mut params = AsteroidParameters {
            size: 120.0,
            ..Default::default()
        };
        params.set_target(GeoCoord::new(35.6762, 139.6503));
        assert_eq!(params.size, 120.0);
        assert_eq!(params.speed, DEFAULT_SPEED);
        assert_eq!(params.angle, DEFAULT_ANGLE);
        assert_eq!(params.target.lng, 139.6503);
    }

    #[test]
    fn test_defaults_within_slider_ranges() {
        assert!(SIZE_RANGE.contains(&DEFAULT_SIZE));
        assert!(SPEED_RANGE.contains(&DEFAULT_SPEED));
        assert!(ANGLE_RANGE.contains(&DEFAULT_ANGLE));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(20_000), "20,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }
}
