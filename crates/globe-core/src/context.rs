//! Session state handed to event handlers: camera, globe spin, markers and hover.

use crate::camera::Camera;
use crate::config::GlobeConfig;
use crate::error::Result;
use crate::marker::{Marker, MarkerSet};
use crate::picking::{pick, PickResult};
use crate::tooltip::{Tooltip, TooltipSource};
use glam::DQuat;
use std::f64::consts::TAU;

/// One pointer position as seen by the front-end.
///
/// `x`/`y` are in the canvas backing-store pixels used for picking;
/// `client_x`/`client_y` are the CSS pixels used to place the tooltip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub client_x: f64,
    pub client_y: f64,
}

pub struct GlobeContext<T> {
    config: GlobeConfig,
    camera: Camera,
    markers: MarkerSet<T>,
    spin_radians: f64,
    hovered: Option<usize>,
    pointer: Option<PointerSample>,
}

impl<T> GlobeContext<T> {
    pub fn new(config: GlobeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            camera: Camera::default(),
            markers: MarkerSet::new(),
            spin_radians: 0.0,
            hovered: None,
            pointer: None,
        })
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn markers(&self) -> &MarkerSet<T> {
        &self.markers
    }

    pub fn markers_mut(&mut self) -> &mut MarkerSet<T> {
        &mut self.markers
    }

    /// Swap in a freshly built marker set; the hover no longer refers to anything.
    pub fn replace_markers(&mut self, markers: MarkerSet<T>) {
        self.markers = markers;
        self.hovered = None;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.camera.set_viewport(width, height);
    }

    /// Spin the globe forward by `dt_sec` seconds.
    pub fn advance(&mut self, dt_sec: f64) {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            let spun = self.spin_radians + self.config.spin_rad_per_sec * dt_sec;
            self.spin_radians = spun.rem_euclid(TAU);
        }
    }

    pub fn spin_radians(&self) -> f64 {
        self.spin_radians
    }

    /// Rotation taking globe-local positions (markers, mesh) to world space.
    pub fn globe_rotation(&self) -> DQuat {
        DQuat::from_rotation_y(self.spin_radians)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hovered_marker(&self) -> Option<&Marker<T>> {
        self.hovered.and_then(|i| self.markers.get(i))
    }

    /// Forget the hover and the tracked pointer, e.g. when it leaves the canvas.
    pub fn clear_hover(&mut self) {
        self.hovered = None;
        self.pointer = None;
    }

    /// Pick the marker under viewport pixel `(x, y)` and remember it as hovered.
    ///
    /// Markers ride on the spinning globe, so the camera ray is brought into
    /// the globe's frame before testing. Pixels outside the viewport never pick.
    pub fn pick_at(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Option<PickResult<'_, T>> {
        if !((0.0..=width).contains(&x) && (0.0..=height).contains(&y)) {
            self.hovered = None;
            return None;
        }
        let to_globe = self.globe_rotation().inverse();
        let ray = self
            .camera
            .screen_to_ray(x, y, width, height)
            .map(|r| r.rotated(to_globe));
        let hit = ray.and_then(|r| pick(&r, self.markers.as_slice()));
        self.hovered = hit.map(|h| h.index);
        hit
    }
}

impl<T: TooltipSource> GlobeContext<T> {
    /// Handle a pointer move: update the hover and describe the tooltip to show.
    pub fn pointer_moved(&mut self, pointer: PointerSample) -> Tooltip {
        self.pointer = Some(pointer);
        self.tooltip_for(pointer)
    }

    /// Pick again under the last pointer position after the globe has turned.
    ///
    /// Returns `None` when no pointer is being tracked.
    pub fn refresh_hover(&mut self) -> Option<Tooltip> {
        let pointer = self.pointer?;
        Some(self.tooltip_for(pointer))
    }

    fn tooltip_for(&mut self, pointer: PointerSample) -> Tooltip {
        match self.pick_at(pointer.x, pointer.y, pointer.width, pointer.height) {
            Some(hit) => Tooltip::at(
                pointer.client_x,
                pointer.client_y,
                hit.marker.record().tooltip_content(),
            ),
            None => Tooltip::Hidden,
        }
    }
}
