//! Ray picking against marker hit spheres.

use crate::marker::Marker;
use glam::{DQuat, DVec3};

/// A half-line with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: DVec3,
    direction: DVec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`.
    ///
    /// Returns `None` when the direction is zero-length or either vector is not finite.
    pub fn new(origin: DVec3, direction: DVec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        origin.is_finite().then_some(Self { origin, direction })
    }

    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }

    /// The same ray expressed in a frame rotated by `rotation`.
    #[inline]
    pub fn rotated(&self, rotation: DQuat) -> Self {
        Self {
            origin: rotation * self.origin,
            direction: (rotation * self.direction).normalize(),
        }
    }
}

/// Nearest marker hit by a ray.
#[derive(Debug)]
pub struct PickResult<'a, T> {
    pub marker: &'a Marker<T>,
    /// Position of `marker` in the slice that was searched.
    pub index: usize,
    pub distance_along_ray: f64,
}

impl<T> Clone for PickResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PickResult<'_, T> {}

/// Closest-approach test of a ray against a sphere.
///
/// Returns the distance along the ray to the point nearest `center` when the
/// ray passes within `radius` of it. Spheres whose centre lies behind the
/// origin are rejected.
#[inline]
pub fn ray_sphere(ray_origin: DVec3, ray_dir: DVec3, center: DVec3, radius: f64) -> Option<f64> {
    let to_center = center - ray_origin;
    let t = to_center.dot(ray_dir);
    if t < 0.0 {
        return None;
    }
    let perp_sq = (to_center.length_squared() - t * t).max(0.0);
    (perp_sq <= radius * radius).then_some(t)
}

/// Find the marker nearest to the ray origin among those the ray intersects.
///
/// Ordering contract:
/// - The smallest `distance_along_ray` wins, regardless of slice order.
/// - Equal distances resolve to the lower index.
pub fn pick<'a, T>(ray: &Ray, markers: &'a [Marker<T>]) -> Option<PickResult<'a, T>> {
    let mut best = None::<PickResult<'a, T>>;
    for (index, marker) in markers.iter().enumerate() {
        let Some(t) = ray_sphere(ray.origin, ray.direction, marker.position(), marker.hit_radius())
        else {
            continue;
        };
        match best {
            Some(b) if t >= b.distance_along_ray => {}
            _ => {
                best = Some(PickResult {
                    marker,
                    index,
                    distance_along_ray: t,
                })
            }
        }
    }
    best
}
