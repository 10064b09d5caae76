//! Illustrative impact statistics.
//!
//! These are fixed-coefficient display approximations, not physics. The
//! formulas and constants must stay exactly as they are so the readouts
//! match across builds.

use crate::types::AsteroidParameters;

/// Divisor turning `0.5 * size^3 * speed^2` into the displayed "PT" unit.
pub const ENERGY_DIVISOR: f64 = 1e15;

/// Kilometers of blast radius per square-root energy unit.
pub const BLAST_RADIUS_PER_SQRT_ENERGY: f64 = 10.0;

/// Billions of USD of damage per energy unit.
pub const DAMAGE_PER_ENERGY: f64 = 50.0;

/// Derived statistics for one parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactEstimate {
    /// Kinetic-energy estimate (PT)
    pub kinetic_energy: f64,
    /// Blast radius (km)
    pub blast_radius_km: f64,
    /// Economic damage (billions USD)
    pub economic_damage_busd: f64,
}

impl ImpactEstimate {
    pub fn from_parameters(params: &AsteroidParameters) -> Self {
        Self::new(params.size, params.speed)
    }

    pub fn new(size: f64, speed: f64) -> Self {
        let kinetic_energy = kinetic_energy(size, speed);
        Self {
            kinetic_energy,
            blast_radius_km: blast_radius_km(kinetic_energy),
            economic_damage_busd: economic_damage_busd(kinetic_energy),
        }
    }

    /// Energy readout, e.g. `"25.00 PT"`.
    pub fn energy_label(&self) -> String {
        format!("{:.2} PT", self.kinetic_energy)
    }

    /// Blast radius readout, e.g. `"50.0 km"`.
    pub fn blast_radius_label(&self) -> String {
        format!("{:.1} km", self.blast_radius_km)
    }

    /// Damage readout, e.g. `"$1250B"`.
    pub fn damage_label(&self) -> String {
        format!("${:.0}B", self.economic_damage_busd)
    }
}

pub fn kinetic_energy(size: f64, speed: f64) -> f64 {
    0.5 * size.powi(3) * speed.powi(2) / ENERGY_DIVISOR
}

pub fn blast_radius_km(kinetic_energy: f64) -> f64 {
    kinetic_energy.sqrt() * BLAST_RADIUS_PER_SQRT_ENERGY
}

pub fn economic_damage_busd(kinetic_energy: f64) -> f64 {
    kinetic_energy * DAMAGE_PER_ENERGY
}

/// A fixed readout shown under the control panel.
#[derive(Clone, Copy, Debug)]
pub struct MissionReadout {
    pub value: &'static str,
    pub label: &'static str,
}

/// Static mission readouts. These do not depend on the parameters.
pub const MISSION_READOUTS: [MissionReadout; 4] = [
    MissionReadout {
        value: "12.7",
        label: "Richter Scale",
    },
    MissionReadout {
        value: "847°C",
        label: "Fireball Temp",
    },
    MissionReadout {
        value: "2.3M",
        label: "People at Risk",
    },
    MissionReadout {
        value: "73%",
        label: "DART Success",
    },
];

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_default_parameters_estimate() {
        let estimate = ImpactEstimate::from_parameters(&AsteroidParameters::default());
        assert_relative_eq!(estimate.kinetic_energy, 25.0, max_relative = 1e-12);
        assert_relative_eq!(estimate.blast_radius_km, 50.0, max_relative = 1e-12);
        assert_relative_eq!(estimate.economic_damage_busd, 1250.0, max_relative = 1e-12);
    }

    #[test]
    fn test_labels() {
        let estimate = ImpactEstimate::new(500.0, 20_000.0);
        assert_eq!(estimate.energy_label(), "25.00 PT");
        assert_eq!(estimate.blast_radius_label(), "50.0 km");
        assert_eq!(estimate.damage_label(), "$1250B");
    }

    #[test]
    fn test_smallest_asteroid() {
        // 0.5 * 1000 * 25e6 / 1e15
        let estimate = ImpactEstimate::new(10.0, 5_000.0);
        assert_relative_eq!(estimate.kinetic_energy, 1.25e-5, max_relative = 1e-12);
        assert_eq!(estimate.energy_label(), "0.00 PT");
    }
}
