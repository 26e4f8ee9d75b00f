//! Country name to coordinate resolution.
//!
//! Resolution itself (a remote service, a bundled table) lives outside this
//! crate; markers only need something implementing [`CoordinateLookup`].

use crate::error::Result;
use crate::geo::GeoCoordinate;
use fnv::FnvHashMap;
use serde::Deserialize;

/// Raw latitude/longitude as reported by a lookup source, not yet validated.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn validate(self) -> Result<GeoCoordinate> {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// A named entry as supplied by the host page.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NamedCoordinate {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

pub trait CoordinateLookup {
    /// Coordinates for `name`, or `None` when the name cannot be resolved.
    fn lookup(&self, name: &str) -> Option<LatLng>;
}

impl<F> CoordinateLookup for F
where
    F: Fn(&str) -> Option<LatLng>,
{
    fn lookup(&self, name: &str) -> Option<LatLng> {
        self(name)
    }
}

/// In-memory lookup keyed by trimmed, lower-cased country name.
#[derive(Clone, Debug, Default)]
pub struct CoordinateTable {
    entries: FnvHashMap<String, LatLng>,
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous coordinates.
    pub fn insert(&mut self, name: &str, coord: LatLng) -> Option<LatLng> {
        self.entries.insert(normalize_name(name), coord)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CoordinateLookup for CoordinateTable {
    fn lookup(&self, name: &str) -> Option<LatLng> {
        self.entries.get(&normalize_name(name)).copied()
    }
}

impl FromIterator<NamedCoordinate> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = NamedCoordinate>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(&entry.name, LatLng::new(entry.latitude, entry.longitude));
        }
        table
    }
}

#[inline]
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
