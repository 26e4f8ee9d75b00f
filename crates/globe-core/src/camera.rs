//! Perspective camera and pointer-to-ray conversion.
//!
//! Matrices follow the right-handed, depth-in-[0, 1] convention used by the
//! WebGPU renderer, so the rays here line up with what is drawn.

use crate::constants::{camera_eye, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::picking::Ray;
use glam::{DMat4, DVec3, DVec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: DVec3,
    pub target: DVec3,
    pub up: DVec3,
    pub aspect: f64,
    pub fovy_radians: f64,
    pub znear: f64,
    pub zfar: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye(),
            target: DVec3::ZERO,
            up: DVec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio; zero-sized viewports are ignored.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space ray through pixel `(sx, sy)` of a `width` x `height` viewport.
    ///
    /// Pixel coordinates grow right and down from the top-left corner.
    /// Returns `None` for an empty viewport.
    pub fn screen_to_ray(&self, sx: f64, sy: f64, width: f64, height: f64) -> Option<Ray> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }
        let ndc_x = (2.0 * sx / width) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height);
        let proj = DMat4::perspective_rh(self.fovy_radians, width / height, self.znear, self.zfar);
        let inv = (proj * self.view_matrix()).inverse();
        let p_far = inv * DVec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far = p_far.truncate() / p_far.w;
        Ray::new(self.eye, far - self.eye)
    }
}
