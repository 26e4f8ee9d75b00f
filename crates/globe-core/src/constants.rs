use glam::DVec3;

// Shared scene and interaction tuning constants.

// Globe layout
pub const GLOBE_RADIUS: f64 = 5.0;
pub const MARKER_SURFACE_OFFSET: f64 = 0.1; // lifts markers off the globe mesh
pub const GLOBE_SPIN_RAD_PER_SEC: f64 = 0.06; // about 0.001 rad per frame at 60 fps

// Marker sizing
pub const MARKER_VISUAL_RADIUS: f64 = 0.1;
pub const MARKER_HIT_RADIUS: f64 = 0.15; // ray-sphere radius for picking

// Camera
pub const CAMERA_Z: f64 = 10.0;
pub const CAMERA_FOVY_DEG: f64 = 75.0;
pub const CAMERA_ZNEAR: f64 = 0.1;
pub const CAMERA_ZFAR: f64 = 1000.0;

// Tooltip placement relative to the pointer, in CSS pixels
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;

#[inline]
pub fn camera_eye() -> DVec3 {
    DVec3::new(0.0, 0.0, CAMERA_Z)
}
