//! Tests for waypoint identity and distance math

use super::*;

#[test]
fn test_distance_to_self_is_zero() {
    let wp = Waypoint::new("Col du Lac", 45.0, 7.0);
    assert_eq!(distance(&wp, &wp), 0.0);
}

#[test]
fn test_short_longitude_offset_at_45_degrees() {
    // 0.0001° of longitude at 45°N is roughly 8 m
    let a = Waypoint::new("a", 45.0, 7.0);
    let b = Waypoint::new("b", 45.0, 7.0001);
    let d = distance(&a, &b);
    assert!((7.0..9.0).contains(&d), "expected ~8 m, got {}", d);
}

#[test]
fn test_hundredth_degree_longitude_at_45_degrees() {
    // 0.01° of longitude at 45°N is roughly 780 m
    let a = Waypoint::new("a", 45.0, 7.0);
    let b = Waypoint::new("b", 45.0, 7.01);
    let d = distance(&a, &b);
    assert!((770.0..800.0).contains(&d), "expected ~785 m, got {}", d);
}

#[test]
fn test_latitude_offset_uses_meridian_length() {
    let d = planar_distance(10.0, 20.0, 10.001, 20.0);
    assert!((d - METERS_PER_DEGREE_LAT * 0.001).abs() < 1e-6);
}

#[test]
fn test_distance_is_symmetric() {
    let a = Waypoint::new("a", 46.51, 8.12);
    let b = Waypoint::new("b", 46.53, 8.09);
    assert_eq!(distance(&a, &b), distance(&b, &a));
}

#[test]
fn test_same_point_ignores_elevation() {
    let a = Waypoint::new("Rifugio", 45.5, 7.25).with_elevation(2100.0);
    let b = Waypoint::new("Rifugio", 45.5, 7.25);
    assert!(a.is_same_point(&b));
}

#[test]
fn test_same_point_requires_matching_name() {
    let a = Waypoint::new("Rifugio", 45.5, 7.25);
    let b = Waypoint::new("Rifugio Alto", 45.5, 7.25);
    assert!(!a.is_same_point(&b));
}

#[test]
fn test_same_point_requires_exact_coordinates() {
    let a = Waypoint::new("Rifugio", 45.5, 7.25);
    let b = Waypoint::new("Rifugio", 45.5, 7.250_000_1);
    assert!(!a.is_same_point(&b));
}

#[test]
fn test_validate_rejects_out_of_range_latitude() {
    let wp = Waypoint::new("bad", 91.0, 0.0);
    assert!(matches!(
        wp.validate(),
        Err(WaypointError::InvalidLatitude(_))
    ));
}

#[test]
fn test_validate_rejects_nan_longitude() {
    let wp = Waypoint::new("bad", 0.0, f64::NAN);
    assert!(matches!(
        wp.validate(),
        Err(WaypointError::InvalidLongitude(_))
    ));
}

#[test]
fn test_validate_accepts_boundaries() {
    assert!(Waypoint::new("n", 90.0, 180.0).validate().is_ok());
    assert!(Waypoint::new("s", -90.0, -180.0).validate().is_ok());
}

#[test]
fn test_degree_meter_conversions_are_inverse() {
    let meters = 50.0;
    assert!((degrees_to_meters(meters_to_degrees(meters)) - meters).abs() < 1e-9);
}
