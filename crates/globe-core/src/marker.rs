//! Markers placed on the globe and the collection that owns them.

use crate::config::GlobeConfig;
use crate::error::{GlobeError, Result};
use crate::geo::{project, GeoCoordinate};
use crate::lookup::CoordinateLookup;
use crate::picking::{pick, PickResult, Ray};
use crate::treaty::TreatyRecord;
use glam::DVec3;

/// A positioned record with a pick tolerance. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker<T> {
    position: DVec3,
    hit_radius: f64,
    record: T,
}

impl<T> Marker<T> {
    pub fn new(position: DVec3, hit_radius: f64, record: T) -> Result<Self> {
        if !(hit_radius.is_finite() && hit_radius > 0.0) {
            return Err(GlobeError::InvalidHitRadius(hit_radius));
        }
        Ok(Self {
            position,
            hit_radius,
            record,
        })
    }

    /// Project `coord` onto the configured globe and wrap `record` at that spot.
    pub fn project(coord: GeoCoordinate, config: &GlobeConfig, record: T) -> Result<Self> {
        let position = project(coord, config.globe_radius, config.marker_offset)?;
        Self::new(position, config.marker_hit_radius, record)
    }

    #[inline]
    pub fn position(&self) -> DVec3 {
        self.position
    }

    #[inline]
    pub fn hit_radius(&self) -> f64 {
        self.hit_radius
    }

    #[inline]
    pub fn record(&self) -> &T {
        &self.record
    }
}

/// Outcome counts of [`MarkerSet::build`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub placed: usize,
    /// Records whose counterpart had no coordinates.
    pub unresolved: usize,
    /// Records whose coordinates were out of range.
    pub invalid: usize,
}

impl BuildReport {
    pub fn skipped(&self) -> usize {
        self.unresolved + self.invalid
    }
}

/// Markers for the current scene, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerSet<T> {
    markers: Vec<Marker<T>>,
}

impl<T> Default for MarkerSet<T> {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
        }
    }
}

impl<T> MarkerSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, marker: Marker<T>) {
        self.markers.push(marker);
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Marker<T>> {
        self.markers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker<T>> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker<T>] {
        &self.markers
    }

    /// Drop every marker; only used on full scene teardown.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    #[inline]
    pub fn pick(&self, ray: &Ray) -> Option<PickResult<'_, T>> {
        pick(ray, &self.markers)
    }
}

impl<T> FromIterator<Marker<T>> for MarkerSet<T> {
    fn from_iter<I: IntoIterator<Item = Marker<T>>>(iter: I) -> Self {
        Self {
            markers: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a MarkerSet<T> {
    type Item = &'a Marker<T>;
    type IntoIter = std::slice::Iter<'a, Marker<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

impl MarkerSet<TreatyRecord> {
    /// Resolve and project every record, skipping the ones that cannot be placed.
    ///
    /// A record is skipped when its counterpart has no coordinates or the
    /// coordinates are out of range. Skips are logged and counted, never fatal.
    pub fn build<I, L>(records: I, lookup: &L, config: &GlobeConfig) -> (Self, BuildReport)
    where
        I: IntoIterator<Item = TreatyRecord>,
        L: CoordinateLookup + ?Sized,
    {
        let mut set = Self::new();
        let mut report = BuildReport::default();
        for record in records {
            let Some(raw) = lookup.lookup(&record.counterpart) else {
                log::warn!("no coordinates for '{}', skipping", record.counterpart);
                report.unresolved += 1;
                continue;
            };
            match raw
                .validate()
                .and_then(|coord| Marker::project(coord, config, record.clone()))
            {
                Ok(marker) => {
                    set.push(marker);
                    report.placed += 1;
                }
                Err(e) => {
                    log::warn!("cannot place '{}': {}", record.counterpart, e);
                    report.invalid += 1;
                }
            }
        }
        log::debug!(
            "built {} markers ({} unresolved, {} invalid)",
            report.placed,
            report.unresolved,
            report.invalid
        );
        (set, report)
    }
}
