//! Globe geometry: radii and latitude/longitude projection.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::types::{DEG_TO_RAD, GeoCoord};

/// Earth mesh radius in render units.
pub const EARTH_RADIUS: f32 = 5.0;

/// Atmosphere shell radius.
pub const ATMOSPHERE_RADIUS: f32 = 5.2;

/// Radius used to place markers just above the surface.
pub const SURFACE_RADIUS: f64 = 5.1;

/// Project a geodetic coordinate onto a sphere of `radius`.
///
/// Uses colatitude `phi = 90 - lat` and longitude offset `theta = lng + 180`,
/// so longitude 0 lies on +X and the north pole on +Y. Inputs are not
/// validated.
pub fn lat_lng_to_vec3(coord: GeoCoord, radius: f64) -> Vec3 {
    let phi = (90.0 - coord.lat) * DEG_TO_RAD;
    let theta = (coord.lng + 180.0) * DEG_TO_RAD;

    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
    .as_vec3()
}

/// Surface point of `coord` at [`SURFACE_RADIUS`].
pub fn surface_point(coord: GeoCoord) -> Vec3 {
    lat_lng_to_vec3(coord, SURFACE_RADIUS)
}
