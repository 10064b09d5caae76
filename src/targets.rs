//! Preset impact targets.
//!
//! Five well-known cities offered as quick-select impact points.

use crate::types::GeoCoord;

/// A named, fixed impact point.
#[derive(Clone, Copy, Debug)]
pub struct TargetPreset {
    /// Display name.
    pub name: &'static str,
    /// Flag glyph shown next to the name.
    pub flag: &'static str,
    /// Coordinates in degrees.
    pub coord: GeoCoord,
}

/// All available preset targets.
pub static PRESET_TARGETS: &[TargetPreset] = &[CAIRO, NEW_YORK, TOKYO, LONDON, MUMBAI];

pub static CAIRO: TargetPreset = TargetPreset {
    name: "Cairo",
    flag: "🇪🇬",
    coord: GeoCoord::new(30.0444, 31.2357),
};

pub static NEW_YORK: TargetPreset = TargetPreset {
    name: "New York",
    flag: "🇺🇸",
    coord: GeoCoord::new(40.7128, -74.0060),
};

pub static TOKYO: TargetPreset = TargetPreset {
    name: "Tokyo",
    flag: "🇯🇵",
    coord: GeoCoord::new(35.6762, 139.6503),
};

pub static LONDON: TargetPreset = TargetPreset {
    name: "London",
    flag: "🇬🇧",
    coord: GeoCoord::new(51.5074, -0.1278),
};

pub static MUMBAI: TargetPreset = TargetPreset {
    name: "Mumbai",
    flag: "🇮🇳",
    coord: GeoCoord::new(19.0760, 72.8777),
};

/// Look up a preset by name.
pub fn find_preset(name: &str) -> Option<&'static TargetPreset> {
    PRESET_TARGETS.iter().find(|p| p.name == name)
}

/// Find the preset whose coordinates exactly match `coord`.
pub fn preset_at(coord: GeoCoord) -> Option<&'static TargetPreset> {
    PRESET_TARGETS.iter().find(|p| p.coord == coord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_TARGET;

    #[test]
    fn test_presets_have_unique_names() {
        let mut names: Vec<&str> = PRESET_TARGETS.iter().map(|p| p.name).collect();
        let original_len = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), original_len, "Preset names must be unique");
    }

    #[test]
    fn test_preset_count() {
        assert_eq!(PRESET_TARGETS.len(), 5);
    }

    #[test]
    fn test_presets_within_valid_ranges() {
        for preset in PRESET_TARGETS {
            assert!((-90.0..=90.0).contains(&preset.coord.lat), "{}", preset.name);
            assert!((-180.0..=180.0).contains(&preset.coord.lng), "{}", preset.name);
        }
    }

    #[test]
    fn test_default_target_is_cairo() {
        assert_eq!(preset_at(DEFAULT_TARGET).map(|p| p.name), Some("Cairo"));
    }

    #[test]
    fn test_custom_coordinate_has_no_preset() {
        assert!(preset_at(GeoCoord::new(0.0, 0.0)).is_none());
        assert_eq!(preset_at(TOKYO.coord).map(|p| p.name), Some("Tokyo"));
    }

    #[test]
    fn test_find_preset() {
        let tokyo = find_preset("Tokyo").unwrap();
        assert_eq!(tokyo.coord, GeoCoord::new(35.6762, 139.6503));
        assert!(find_preset("Atlantis").is_none());
    }
}
