//! Tests for coordinates and viewport derivation

use super::*;

fn sofia() -> GeoPoint {
    GeoPoint::new(42.6977, 23.3219).unwrap()
}

#[test]
fn test_point_accepts_world_edges() {
    assert!(GeoPoint::new(90.0, 180.0).is_ok());
    assert!(GeoPoint::new(-90.0, -180.0).is_ok());
}

#[test]
fn test_point_rejects_latitude_too_high() {
    let result = GeoPoint::new(90.5, 0.0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_point_rejects_longitude_too_low() {
    let result = GeoPoint::new(0.0, -180.5);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_point_rejects_nan() {
    assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    assert!(GeoPoint::new(0.0, f64::NAN).is_err());
}

#[test]
fn test_clamped_point_pins_to_edge() {
    let point = GeoPoint::clamped(95.0, -200.0);
    assert_eq!(point.lat, 90.0);
    assert_eq!(point.lon, -180.0);
}

#[test]
fn test_viewport_rejects_inverted_latitude() {
    let result = ViewportBounds::from_edges(10.0, 0.0, 5.0, 1.0);
    assert!(matches!(result, Err(CoordError::InvertedBounds { .. })));
}

#[test]
fn test_viewport_rejects_antimeridian_crossing() {
    let result = ViewportBounds::from_edges(0.0, 170.0, 1.0, -170.0);
    assert!(matches!(result, Err(CoordError::InvertedBounds { .. })));
}

#[test]
fn test_viewport_accepts_degenerate_bounds() {
    let bounds = ViewportBounds::from_edges(42.7, 23.3, 42.7, 23.3).unwrap();
    assert_eq!(bounds.height(), 0.0);
    assert_eq!(bounds.width(), 0.0);
}

#[test]
fn test_viewport_center_and_size() {
    let bounds = ViewportBounds::from_edges(42.69, 23.31, 42.71, 23.33).unwrap();
    let center = bounds.center();
    assert!((center.lat - 42.70).abs() < 1e-9);
    assert!((center.lon - 23.32).abs() < 1e-9);
    assert!((bounds.height() - 0.02).abs() < 1e-9);
    assert!((bounds.width() - 0.02).abs() < 1e-9);
}

#[test]
fn test_viewport_contains_edges() {
    let bounds = ViewportBounds::from_edges(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(bounds.contains(GeoPoint::new(0.0, 0.0).unwrap()));
    assert!(bounds.contains(GeoPoint::new(1.0, 1.0).unwrap()));
    assert!(!bounds.contains(GeoPoint::new(1.5, 0.5).unwrap()));
}

#[test]
fn test_viewport_intersects_box() {
    let bounds = ViewportBounds::from_edges(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(bounds.intersects_box(0.5, 0.5, 2.0, 2.0));
    assert!(bounds.intersects_box(1.0, 1.0, 2.0, 2.0), "touching corner");
    assert!(!bounds.intersects_box(1.1, 0.0, 2.0, 1.0));
}

#[test]
fn test_clamped_viewport_pins_overscrolled_longitude() {
    let bounds = ViewportBounds::clamped(-10.0, -250.0, 10.0, 250.0).unwrap();
    assert_eq!(bounds.south_west().lon, -180.0);
    assert_eq!(bounds.north_east().lon, 180.0);
}

#[test]
fn test_project_world_origin() {
    let (x, y) = project(GeoPoint::new(0.0, 0.0).unwrap(), 0);
    assert!((x - 128.0).abs() < 1e-9);
    assert!((y - 128.0).abs() < 1e-9);
}

#[test]
fn test_project_unproject_roundtrip() {
    let point = sofia();
    let (x, y) = project(point, 18);
    let back = unproject(x, y, 18);
    assert!((back.lat - point.lat).abs() < 1e-9);
    assert!((back.lon - point.lon).abs() < 1e-9);
}

#[test]
fn test_viewport_around_is_centered() {
    let bounds = viewport_around(sofia(), 18, 1280, 800).unwrap();
    let center = bounds.center();
    assert!((center.lon - 23.3219).abs() < 1e-9);
    // Mercator stretches latitude unevenly, so the midpoint is only close.
    assert!((center.lat - 42.6977).abs() < 1e-5);
    assert!(bounds.contains(sofia()));
}

#[test]
fn test_viewport_around_width_at_zoom_18() {
    // 1280 px at zoom 18 spans 5 tiles of 360 / 2^18 degrees each.
    let bounds = viewport_around(sofia(), 18, 1280, 800).unwrap();
    let expected = 5.0 * 360.0 / 2.0_f64.powi(18);
    assert!((bounds.width() - expected).abs() < 1e-9);
}

#[test]
fn test_viewport_around_zero_size() {
    let bounds = viewport_around(sofia(), 18, 0, 0).unwrap();
    assert!(bounds.width().abs() < 1e-12);
    assert!(bounds.height().abs() < 1e-12);
}

#[test]
fn test_viewport_around_whole_world_is_clamped() {
    let bounds = viewport_around(sofia(), 0, 4096, 4096).unwrap();
    assert_eq!(bounds.south_west().lon, -180.0);
    assert_eq!(bounds.north_east().lon, 180.0);
    assert!(bounds.north_east().lat <= MERCATOR_MAX_LAT + 1e-9);
}

#[test]
fn test_viewport_around_rejects_deep_zoom() {
    let result = viewport_around(sofia(), 23, 100, 100);
    assert!(matches!(result, Err(CoordError::InvalidZoom(23))));
}
