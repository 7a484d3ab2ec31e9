use landmark_grid_app::adapters::outbound::{
    load_seed_file, parse_points, AsciiGridRenderer, BuiltinPointSource, FilesystemPointSource, GeoJsonRenderer,
};
use landmark_grid_app::common::DomainError;
use landmark_grid_app::domains::route_map::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_filesystem_point_source_loads_seed_file() {
    let dir = tempdir().unwrap();
    let base = dir.path().to_path_buf();
    let source = FilesystemPointSource::new(Some(base.clone()));

    fs::write(base.join("campus.json"), r#"[
  { "row": 0, "col": 0, "name": "Origin" },
  { "row": 0, "col": 5, "name": "East" }
]"#).unwrap();

    let points = source.load_points("campus.json").unwrap();
    assert_eq!(points, vec![NamedPoint::new(0, 0, "Origin"), NamedPoint::new(0, 5, "East")]);

    let registry = PointRegistry::from_points(GridBounds::square(20), points).unwrap();
    let path = rasterize(
        registry.find_by_name("Origin").unwrap().point,
        registry.find_by_name("East").unwrap().point,
    );
    assert_eq!(path.len(), 6);
}

#[test]
fn test_seed_file_path_is_used_as_given() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("my.json");
    fs::write(&file, r#"[{ "row": 3, "col": 3, "name": "School of Engineering" }]"#).unwrap();

    let points = load_seed_file(&file).unwrap();
    assert_eq!(points, vec![NamedPoint::new(3, 3, "School of Engineering")]);

    match load_seed_file(dir.path().join("absent.json")).unwrap_err() {
        DomainError::InfrastructureError(msg) => {
            assert!(msg.contains("absent.json"));
            assert!(!msg.contains("resources/landmarks"));
        }
        _ => panic!("Expected InfrastructureError"),
    }
}

#[test]
fn test_seed_file_path_must_name_a_file() {
    assert!(matches!(
        load_seed_file(".."),
        Err(DomainError::InvalidArgument { .. })
    ));
}

#[test]
fn test_missing_seed_file_returns_error() {
    let dir = tempdir().unwrap();
    let source = FilesystemPointSource::new(Some(dir.path().to_path_buf()));

    assert!(matches!(
        source.load_points("does_not_exist.json"),
        Err(DomainError::InfrastructureError(_))
    ));
}

#[test]
fn test_malformed_seed_file_returns_serialization_error() {
    assert!(matches!(
        parse_points(r#"[{ "row": 1, "name": "No Column" }]"#),
        Err(DomainError::SerializationError(_))
    ));
}

#[test]
fn test_builtin_point_source() {
    let points = BuiltinPointSource.load_points("anything").unwrap();
    assert_eq!(points.len(), 16);
    assert!(points.iter().any(|p| p.name == "Herbert Macaulay Hall" && p.point == GridPoint::new(8, 8)));
}

#[test]
fn test_ascii_renderer_marks_path_and_landmarks() {
    let renderer = AsciiGridRenderer::new(GridBounds { rows: 4, cols: 4 });
    let landmarks = vec![NamedPoint::new(0, 0, "A"), NamedPoint::new(3, 3, "B"), NamedPoint::new(0, 3, "C")];
    let path = rasterize(GridPoint::new(0, 0), GridPoint::new(3, 3));

    let grid = renderer.render(&landmarks, &path).unwrap();
    assert_eq!(grid, "@..o\n.*..\n..*.\n...@\n");
}

#[test]
fn test_ascii_renderer_skips_cells_outside_bounds() {
    let renderer = AsciiGridRenderer::new(GridBounds { rows: 2, cols: 2 });
    let path = GridPath::from(vec![GridPoint::new(1, 1), GridPoint::new(2, 2)]);

    let grid = renderer.render(&[], &path).unwrap();
    assert_eq!(grid, "..\n.*\n");
}

#[test]
fn test_geojson_renderer_exports_points_and_line() {
    let landmarks = vec![NamedPoint::new(0, 0, "Origin"), NamedPoint::new(0, 5, "East")];
    let path = rasterize(landmarks[0].point, landmarks[1].point);

    let rendered = GeoJsonRenderer::new(CellGeometry::default()).render(&landmarks, &path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(value["type"], "FeatureCollection");
    let features = value["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["properties"]["name"], "Origin");
    assert_eq!(features[0]["properties"]["pixel"], serde_json::json!([40, 40]));
    assert_eq!(features[1]["properties"]["pixel"], serde_json::json!([440, 40]));
    assert_eq!(features[1]["geometry"]["coordinates"], serde_json::json!([5.0, 0.0]));
    assert_eq!(features[2]["geometry"]["type"], "LineString");
    assert_eq!(features[2]["properties"]["cells"], 6);
    assert_eq!(features[2]["geometry"]["coordinates"].as_array().unwrap().len(), 6);
}

#[test]
fn test_geojson_single_cell_path_is_point() {
    let path = rasterize(GridPoint::new(2, 2), GridPoint::new(2, 2));
    let collection = GeoJsonRenderer::new(CellGeometry::default()).to_feature_collection(&[], &path);

    assert_eq!(collection.features.len(), 1);
    let geometry = collection.features[0].geometry.as_ref().unwrap();
    assert!(matches!(geometry.value, geojson::Value::Point(_)));
}
