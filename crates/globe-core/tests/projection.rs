// Projection of latitude/longitude onto the globe surface.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use globe_core::{project, project_latlon, unproject, GeoCoordinate, GlobeError};
use rand::prelude::*;

const RADIUS: f64 = 5.0;
const OFFSET: f64 = 0.1;

#[test]
fn projected_points_sit_at_radius_plus_offset() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let lat = rng.gen_range(-90.0..=90.0);
        let lon = rng.gen_range(-180.0..=180.0);
        let r = rng.gen_range(0.5..50.0);
        let o = rng.gen_range(0.0..1.0);
        let p = project_latlon(lat, lon, r, o).expect("valid coordinate");
        assert_relative_eq!(p.length(), r + o, max_relative = 1e-6);
    }
}

#[test]
fn range_edges_are_accepted() {
    for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (90.0, -180.0), (-90.0, 180.0)] {
        let p = project_latlon(lat, lon, RADIUS, OFFSET).unwrap();
        assert_relative_eq!(p.length(), RADIUS + OFFSET, max_relative = 1e-9);
    }
}

#[test]
fn poles_ignore_longitude() {
    let north = project_latlon(90.0, 0.0, RADIUS, OFFSET).unwrap();
    let south = project_latlon(-90.0, 0.0, RADIUS, OFFSET).unwrap();
    for lon in [-180.0, -135.5, -90.0, -1.0, 0.0, 33.3, 90.0, 179.9, 180.0] {
        let n = project_latlon(90.0, lon, RADIUS, OFFSET).unwrap();
        let s = project_latlon(-90.0, lon, RADIUS, OFFSET).unwrap();
        assert!(n.abs_diff_eq(north, 1e-9), "north pole moved at lon {lon}: {n:?}");
        assert!(s.abs_diff_eq(south, 1e-9), "south pole moved at lon {lon}: {s:?}");
    }
    assert_abs_diff_eq!(north.y, RADIUS + OFFSET, epsilon = 1e-12);
    assert_abs_diff_eq!(south.y, -(RADIUS + OFFSET), epsilon = 1e-12);
}

#[test]
fn antimeridian_is_continuous() {
    let east = project_latlon(12.5, 180.0, RADIUS, OFFSET).unwrap();
    let west = project_latlon(12.5, -180.0, RADIUS, OFFSET).unwrap();
    assert!(east.abs_diff_eq(west, 1e-9));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    for (lat, lon) in [
        (91.0, 0.0),
        (0.0, 181.0),
        (-90.5, 0.0),
        (0.0, -180.01),
        (f64::NAN, 0.0),
        (0.0, f64::INFINITY),
    ] {
        match project_latlon(lat, lon, RADIUS, OFFSET) {
            Err(GlobeError::InvalidCoordinate { .. }) => {}
            other => panic!("expected InvalidCoordinate for ({lat}, {lon}), got {other:?}"),
        }
        assert!(GeoCoordinate::new(lat, lon).is_err());
    }
}

#[test]
fn bad_surface_is_rejected() {
    let coord = GeoCoordinate::new(10.0, 20.0).unwrap();
    assert!(matches!(
        project(coord, 0.0, OFFSET),
        Err(GlobeError::InvalidSurface { .. })
    ));
    assert!(matches!(
        project(coord, RADIUS, -0.1),
        Err(GlobeError::InvalidSurface { .. })
    ));
    assert!(matches!(
        project(coord, f64::NAN, 0.0),
        Err(GlobeError::InvalidSurface { .. })
    ));
    // Zero offset puts the point right on the surface
    assert_relative_eq!(project(coord, RADIUS, 0.0).unwrap().length(), RADIUS);
}

#[test]
fn reference_points_land_on_the_axes() {
    let equator = project_latlon(0.0, 0.0, RADIUS, OFFSET).unwrap();
    assert_abs_diff_eq!(equator.x, 5.1, epsilon = 1e-9);
    assert_abs_diff_eq!(equator.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(equator.z, 0.0, epsilon = 1e-9);

    let north = project_latlon(90.0, 0.0, RADIUS, OFFSET).unwrap();
    assert_abs_diff_eq!(north.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(north.y, 5.1, epsilon = 1e-9);
    assert_abs_diff_eq!(north.z, 0.0, epsilon = 1e-9);

    // Longitude sweeps from +X towards +Z
    let east = project_latlon(0.0, 90.0, RADIUS, OFFSET).unwrap();
    assert_abs_diff_eq!(east.z, 5.1, epsilon = 1e-9);
}

#[test]
fn unproject_recovers_coordinates() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1_000 {
        let lat = rng.gen_range(-89.0..89.0);
        let lon = rng.gen_range(-179.0..179.0);
        let p = project_latlon(lat, lon, RADIUS, OFFSET).unwrap();
        let back = unproject(p).expect("non-zero point");
        assert_abs_diff_eq!(back.latitude(), lat, epsilon = 1e-9);
        assert_abs_diff_eq!(back.longitude(), lon, epsilon = 1e-9);
    }
    let pole = unproject(project_latlon(-90.0, 45.0, RADIUS, OFFSET).unwrap()).unwrap();
    assert_abs_diff_eq!(pole.latitude(), -90.0, epsilon = 1e-9);
    assert!(unproject(glam::DVec3::ZERO).is_none());
}
