//! Scene configuration shared by the projector, picker and front-ends.

use crate::constants::{
    GLOBE_RADIUS, GLOBE_SPIN_RAD_PER_SEC, MARKER_HIT_RADIUS, MARKER_SURFACE_OFFSET,
    MARKER_VISUAL_RADIUS,
};
use crate::error::{GlobeError, Result};

/// Sizes and rates describing the globe and its markers.
///
/// Fields:
/// - `globe_radius`: radius of the rendered globe mesh
/// - `marker_offset`: height of markers above the globe surface
/// - `marker_visual_radius`: drawn size of each marker
/// - `marker_hit_radius`: pick tolerance around each marker, usually larger than the visual size
/// - `spin_rad_per_sec`: rotation speed of the globe about its polar axis
#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub globe_radius: f64,
    pub marker_offset: f64,
    pub marker_visual_radius: f64,
    pub marker_hit_radius: f64,
    pub spin_rad_per_sec: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            globe_radius: GLOBE_RADIUS,
            marker_offset: MARKER_SURFACE_OFFSET,
            marker_visual_radius: MARKER_VISUAL_RADIUS,
            marker_hit_radius: MARKER_HIT_RADIUS,
            spin_rad_per_sec: GLOBE_SPIN_RAD_PER_SEC,
        }
    }
}

impl GlobeConfig {
    /// Distance of every marker from the globe centre.
    #[inline]
    pub fn marker_distance(&self) -> f64 {
        self.globe_radius + self.marker_offset
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.globe_radius.is_finite() && self.globe_radius > 0.0) {
            return Err(GlobeError::InvalidConfig(format!(
                "globe_radius must be finite and > 0, got {}",
                self.globe_radius
            )));
        }
        if !(self.marker_offset.is_finite() && self.marker_offset >= 0.0) {
            return Err(GlobeError::InvalidConfig(format!(
                "marker_offset must be finite and >= 0, got {}",
                self.marker_offset
            )));
        }
        if !(self.marker_visual_radius.is_finite() && self.marker_visual_radius > 0.0) {
            return Err(GlobeError::InvalidConfig(format!(
                "marker_visual_radius must be finite and > 0, got {}",
                self.marker_visual_radius
            )));
        }
        if !(self.marker_hit_radius.is_finite() && self.marker_hit_radius > 0.0) {
            return Err(GlobeError::InvalidConfig(format!(
                "marker_hit_radius must be finite and > 0, got {}",
                self.marker_hit_radius
            )));
        }
        if !self.spin_rad_per_sec.is_finite() {
            return Err(GlobeError::InvalidConfig(format!(
                "spin_rad_per_sec must be finite, got {}",
                self.spin_rad_per_sec
            )));
        }
        Ok(())
    }
}
