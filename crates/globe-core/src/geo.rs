//! Geographic coordinates and their placement on the globe.
//!
//! Latitude maps to the polar angle measured from +Y (colatitude) and
//! longitude to the azimuth in the XZ plane measured from +X towards +Z.
//! The north pole therefore sits at the top of the globe for every longitude.

use crate::error::{GlobeError, Result};
use glam::DVec3;
use std::ops::RangeInclusive;

/// A validated latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
    pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

    /// Rejects out-of-range and non-finite values instead of clamping them.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if Self::LATITUDE_RANGE.contains(&latitude) && Self::LONGITUDE_RANGE.contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(GlobeError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Polar angle from +Y in radians.
    #[inline]
    pub fn colatitude_radians(&self) -> f64 {
        (90.0 - self.latitude).to_radians()
    }

    /// Azimuth in the XZ plane in radians.
    #[inline]
    pub fn azimuth_radians(&self) -> f64 {
        self.longitude.to_radians()
    }
}

/// Place `coord` on a sphere of `radius`, lifted by `offset` above its surface.
///
/// The returned point is at distance `radius + offset` from the origin.
pub fn project(coord: GeoCoordinate, radius: f64, offset: f64) -> Result<DVec3> {
    if !(radius.is_finite() && radius > 0.0 && offset.is_finite() && offset >= 0.0) {
        return Err(GlobeError::InvalidSurface { radius, offset });
    }
    let r = radius + offset;
    let (sin_theta, cos_theta) = coord.colatitude_radians().sin_cos();
    let (sin_phi, cos_phi) = coord.azimuth_radians().sin_cos();
    Ok(DVec3::new(
        r * sin_theta * cos_phi,
        r * cos_theta,
        r * sin_theta * sin_phi,
    ))
}

/// Validate raw degrees and project them in one step.
#[inline]
pub fn project_latlon(latitude: f64, longitude: f64, radius: f64, offset: f64) -> Result<DVec3> {
    project(GeoCoordinate::new(latitude, longitude)?, radius, offset)
}

/// Recover the latitude/longitude of a point, ignoring its distance from the origin.
///
/// Returns `None` for the origin and for non-finite points.
pub fn unproject(point: DVec3) -> Option<GeoCoordinate> {
    let r = point.length();
    if !(r.is_finite() && r > 0.0) {
        return None;
    }
    // acos can land a hair outside [-90, 90] after the degree conversion
    let latitude = (90.0 - (point.y / r).clamp(-1.0, 1.0).acos().to_degrees()).clamp(-90.0, 90.0);
    let longitude = point.z.atan2(point.x).to_degrees();
    GeoCoordinate::new(latitude, longitude).ok()
}
