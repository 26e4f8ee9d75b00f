// Session context: hover picking through the camera, globe spin and tooltips.

use approx::assert_abs_diff_eq;
use globe_core::{
    GeoCoordinate, GlobeConfig, GlobeContext, Marker, MarkerSet, PointerSample, Tooltip,
    TreatyRecord, TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y,
};
use std::f64::consts::{FRAC_PI_2, TAU};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn treaty(country: &str) -> TreatyRecord {
    TreatyRecord {
        counterpart: country.to_string(),
        field: "Trade".to_string(),
        title: format!("Agreement with {country}"),
        signed: "1990-01-01".to_string(),
        effective: String::new(),
    }
}

fn place(
    ctx: &GlobeContext<TreatyRecord>,
    lat: f64,
    lon: f64,
    country: &str,
) -> Marker<TreatyRecord> {
    let coord = GeoCoordinate::new(lat, lon).unwrap();
    Marker::project(coord, ctx.config(), treaty(country)).unwrap()
}

fn context_with(markers: &[(f64, f64, &str)]) -> GlobeContext<TreatyRecord> {
    let mut ctx = GlobeContext::new(GlobeConfig::default()).unwrap();
    ctx.resize(W, H);
    let set: MarkerSet<TreatyRecord> = markers
        .iter()
        .map(|(lat, lon, name)| place(&ctx, *lat, *lon, name))
        .collect();
    ctx.replace_markers(set);
    ctx
}

fn centre() -> PointerSample {
    PointerSample {
        x: W / 2.0,
        y: H / 2.0,
        width: W,
        height: H,
        client_x: 400.0,
        client_y: 300.0,
    }
}

#[test]
fn centre_of_screen_hits_marker_facing_camera() {
    // lon 90 projects onto +Z, straight towards the camera
    let mut ctx = context_with(&[(0.0, 90.0, "Facing")]);
    let hit = ctx.pick_at(W / 2.0, H / 2.0, W, H).expect("marker under pointer");
    assert_eq!(hit.index, 0);
    assert_abs_diff_eq!(hit.distance_along_ray, 10.0 - 5.1, epsilon = 1e-6);
    assert_eq!(ctx.hovered(), Some(0));
    assert_eq!(ctx.hovered_marker().unwrap().record().counterpart, "Facing");
}

#[test]
fn front_marker_beats_marker_on_far_side() {
    // Far side inserted first; both lie on the centre ray
    let mut ctx = context_with(&[(0.0, -90.0, "Far"), (0.0, 90.0, "Near")]);
    let hit = ctx.pick_at(W / 2.0, H / 2.0, W, H).unwrap();
    assert_eq!(hit.marker.record().counterpart, "Near");
    assert_eq!(ctx.hovered(), Some(1));
}

#[test]
fn miss_clears_hover() {
    let mut ctx = context_with(&[(0.0, 90.0, "Facing")]);
    assert!(ctx.pick_at(W / 2.0, H / 2.0, W, H).is_some());
    assert!(ctx.pick_at(5.0, 5.0, W, H).is_none());
    assert_eq!(ctx.hovered(), None);
}

#[test]
fn markers_follow_the_globe_spin() {
    let config = GlobeConfig {
        spin_rad_per_sec: 1.0,
        ..GlobeConfig::default()
    };
    let mut ctx = GlobeContext::new(config).unwrap();
    ctx.resize(W, H);
    let marker = place(&ctx, 0.0, 180.0, "Antimeridian");
    ctx.markers_mut().push(marker);

    assert!(ctx.pick_at(W / 2.0, H / 2.0, W, H).is_none());

    // A quarter turn about +Y swings lon 180 round to face the camera
    ctx.advance(FRAC_PI_2);
    assert_abs_diff_eq!(ctx.spin_radians(), FRAC_PI_2, epsilon = 1e-12);
    let hit = ctx.pick_at(W / 2.0, H / 2.0, W, H).expect("marker rotated into view");
    assert_eq!(hit.marker.record().counterpart, "Antimeridian");
}

#[test]
fn spin_wraps_and_ignores_bad_steps() {
    let config = GlobeConfig {
        spin_rad_per_sec: 1.0,
        ..GlobeConfig::default()
    };
    let mut ctx: GlobeContext<TreatyRecord> = GlobeContext::new(config).unwrap();
    ctx.advance(TAU + 0.5);
    assert_abs_diff_eq!(ctx.spin_radians(), 0.5, epsilon = 1e-9);
    ctx.advance(-1.0);
    ctx.advance(f64::NAN);
    assert_abs_diff_eq!(ctx.spin_radians(), 0.5, epsilon = 1e-9);
}

#[test]
fn pointer_move_shows_and_hides_tooltip() {
    let mut ctx = context_with(&[(0.0, 90.0, "Facing")]);
    match ctx.pointer_moved(centre()) {
        Tooltip::Visible { x, y, content } => {
            assert_abs_diff_eq!(x, 400.0 + TOOLTIP_OFFSET_X);
            assert_abs_diff_eq!(y, 300.0 + TOOLTIP_OFFSET_Y);
            assert_eq!(content.heading, "Facing");
            assert_eq!(content.rows.len(), 4);
        }
        Tooltip::Hidden => panic!("expected a tooltip over the marker"),
    }

    let corner = PointerSample {
        x: 1.0,
        y: 1.0,
        ..centre()
    };
    assert_eq!(ctx.pointer_moved(corner), Tooltip::Hidden);
    assert_eq!(ctx.hovered(), None);
}

#[test]
fn replacing_markers_drops_stale_hover() {
    let mut ctx = context_with(&[(0.0, 90.0, "Facing")]);
    ctx.pick_at(W / 2.0, H / 2.0, W, H);
    assert!(ctx.hovered().is_some());
    ctx.replace_markers(MarkerSet::new());
    assert_eq!(ctx.hovered(), None);
    assert!(ctx.markers().is_empty());
}

#[test]
fn invalid_config_is_refused() {
    let config = GlobeConfig {
        globe_radius: -1.0,
        ..GlobeConfig::default()
    };
    assert!(GlobeContext::<TreatyRecord>::new(config).is_err());
}

#[test]
fn pointer_outside_viewport_never_picks() {
    let mut ctx = context_with(&[]);
    // A marker sitting on the ray through a pixel left of the canvas
    let ray = ctx.camera().screen_to_ray(-200.0, 300.0, W, H).unwrap();
    let marker = Marker::new(ray.at(8.0), 0.15, treaty("Offscreen")).unwrap();
    ctx.markers_mut().push(marker);

    assert!(ctx.pick_at(-200.0, 300.0, W, H).is_none());
    assert!(ctx.pick_at(W / 2.0, H + 1.0, W, H).is_none());
    assert_eq!(ctx.hovered(), None);

    let outside = PointerSample {
        x: -200.0,
        y: 300.0,
        ..centre()
    };
    assert_eq!(ctx.pointer_moved(outside), Tooltip::Hidden);
}

#[test]
fn hover_follows_the_spin_under_a_resting_pointer() {
    let config = GlobeConfig {
        spin_rad_per_sec: 1.0,
        ..GlobeConfig::default()
    };
    let mut ctx = GlobeContext::new(config).unwrap();
    ctx.resize(W, H);
    let marker = place(&ctx, 0.0, 90.0, "Facing");
    ctx.markers_mut().push(marker);

    assert_eq!(ctx.refresh_hover(), None);
    assert!(ctx.pointer_moved(centre()).is_visible());
    assert_eq!(ctx.hovered(), Some(0));

    // A quarter turn carries the marker away from the pointer
    ctx.advance(FRAC_PI_2);
    assert_eq!(ctx.refresh_hover(), Some(Tooltip::Hidden));
    assert_eq!(ctx.hovered(), None);

    // and the rest of the turn brings it back
    ctx.advance(TAU - FRAC_PI_2);
    assert!(ctx.refresh_hover().is_some_and(|t| t.is_visible()));
    assert_eq!(ctx.hovered(), Some(0));

    ctx.clear_hover();
    assert_eq!(ctx.refresh_hover(), None);
}
