use super::*;
use tempfile::TempDir;

const MASTER_GPX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="hut-survey" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="45.0" lon="7.0">
    <ele>2475</ele>
    <name>Rifugio Sella</name>
    <cmt>open in summer</cmt>
    <sym>Lodge</sym>
  </wpt>
  <wpt lat="45.1" lon="7.1">
    <name>Lago Nero</name>
  </wpt>
  <trk>
    <name>Approach</name>
    <trkseg>
      <trkpt lat="45.0" lon="7.0"></trkpt>
      <trkpt lat="45.01" lon="7.01"></trkpt>
    </trkseg>
  </trk>
</gpx>
"#;

fn origin() -> &'static Path {
    Path::new("master.gpx")
}

#[test]
fn test_parse_waypoints() {
    let doc = GpxDocument::from_bytes(MASTER_GPX.as_bytes(), origin()).unwrap();
    let waypoints = doc.waypoints();

    assert_eq!(waypoints.len(), 2);
    assert_eq!(waypoints[0].name, "Rifugio Sella");
    assert_eq!(waypoints[0].latitude, 45.0);
    assert_eq!(waypoints[0].longitude, 7.0);
    assert_eq!(waypoints[0].elevation, Some(2475.0));
    assert_eq!(waypoints[0].comment.as_deref(), Some("open in summer"));
    assert_eq!(waypoints[0].symbol.as_deref(), Some("Lodge"));
    assert_eq!(waypoints[1].elevation, None);
}

#[test]
fn test_parse_counts_tracks() {
    let doc = GpxDocument::from_bytes(MASTER_GPX.as_bytes(), origin()).unwrap();
    assert_eq!(doc.waypoint_count(), 2);
    assert_eq!(doc.track_count(), 1);
    assert_eq!(doc.route_count(), 0);
}

#[test]
fn test_malformed_document_is_parse_error() {
    let err = GpxDocument::from_bytes(b"<gpx version=\"1.1\"><wpt", origin()).unwrap_err();
    assert!(
        matches!(err, GpxError::Parse { .. }),
        "unexpected error: {err:?}"
    );
    assert!(err.to_string().contains("master.gpx"));
}

#[test]
fn test_out_of_range_latitude_is_rejected() {
    let xml = r#"<gpx version="1.1" creator="t"><wpt lat="95.0" lon="7.0"><name>Nowhere</name></wpt></gpx>"#;
    let result = GpxDocument::from_bytes(xml.as_bytes(), origin());
    assert!(result.is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = GpxDocument::read(&temp.path().join("absent.gpx")).unwrap_err();
    assert!(matches!(err, GpxError::Io { .. }));
}

#[test]
fn test_file_name_is_source_name() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("huts.gpx");
    std::fs::write(&path, MASTER_GPX).unwrap();

    let doc = GpxDocument::read(&path).unwrap();
    assert_eq!(doc.file_name(), "huts.gpx");
    assert_eq!(doc.path(), path.as_path());
}

#[test]
fn test_replace_waypoints_keeps_tracks() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("merged.gpx");

    let mut doc = GpxDocument::from_bytes(MASTER_GPX.as_bytes(), origin()).unwrap();
    let mut replacement = Waypoint::new("Col", 45.2, 7.2).with_elevation(2900.0);
    replacement.description = Some("pass".to_string());
    replacement.kind = Some("Summit".to_string());
    doc.replace_waypoints(&[replacement.clone()]);
    doc.write(&out).unwrap();

    let reread = GpxDocument::read(&out).unwrap();
    assert_eq!(reread.track_count(), 1);

    let waypoints = reread.waypoints();
    assert_eq!(waypoints.len(), 1);
    assert_eq!(waypoints[0].name, "Col");
    assert_eq!(waypoints[0].elevation, Some(2900.0));
    assert_eq!(waypoints[0].description.as_deref(), Some("pass"));
    assert_eq!(waypoints[0].kind.as_deref(), Some("Summit"));
    assert!((waypoints[0].latitude - 45.2).abs() < 1e-9);
    assert!((waypoints[0].longitude - 7.2).abs() < 1e-9);
}

#[test]
fn test_output_is_gpx_11() {
    let doc = GpxDocument::from_bytes(MASTER_GPX.as_bytes(), origin()).unwrap();
    let bytes = doc.to_bytes().unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.contains("version=\"1.1\""));
    assert!(text.contains("Rifugio Sella"));
}

#[test]
fn test_unnamed_waypoint_round_trips_as_empty_name() {
    let mut doc = GpxDocument::from_bytes(MASTER_GPX.as_bytes(), origin()).unwrap();
    doc.replace_waypoints(&[Waypoint::new("", 45.5, 7.5)]);

    let bytes = doc.to_bytes().unwrap();
    let reread = GpxDocument::from_bytes(&bytes, origin()).unwrap();
    assert_eq!(reread.waypoints()[0].name, "");
}

#[test]
fn test_source_name_of_bare_path() {
    assert_eq!(source_name(Path::new("dir/peaks.gpx")), "peaks.gpx");
    assert_eq!(source_name(Path::new("peaks.gpx")), "peaks.gpx");
}
