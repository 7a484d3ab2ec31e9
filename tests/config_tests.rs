use landmark_grid_app::common::ApplicationError;
use landmark_grid_app::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config_matches_reference_grid() {
    let config = Config::default();
    assert_eq!(config.grid.rows, 20);
    assert_eq!(config.grid.cols, 20);
    assert_eq!(config.grid.cell_width, 80);
    assert_eq!(config.estimator.earth_radius_km, 6371.0);
    assert!(config.seed.points_file.is_none());
    assert!(config.logging.file.is_none());
}

#[tokio::test]
async fn test_from_file_fills_missing_sections() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[grid]\nrows = 12\n\n[seed]\npoints_file = \"campus.json\"\n").unwrap();

    let config = Config::from_file(&path).await.unwrap();
    assert_eq!(config.grid.rows, 12);
    assert_eq!(config.grid.cols, 20);
    assert_eq!(config.seed.points_file.as_deref(), Some("campus.json"));
    assert_eq!(config.estimator.default_speed_kmh, 5.0);
}

#[tokio::test]
async fn test_layered_load_reads_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[estimator]\nearth_radius_km = 1.0\n").unwrap();

    let config = Config::load(Some(&path)).await.unwrap();
    assert_eq!(config.estimator.earth_radius_km, 1.0);
    assert_eq!(config.grid.bounds().rows, 20);
}

#[tokio::test]
async fn test_layered_load_without_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = Config::load(Some(dir.path().join("absent.toml"))).await.unwrap();
    assert_eq!(config.grid.cols, 20);
}

#[test]
fn test_grid_geometry_places_cell_centres() {
    let config = Config::default();
    let geometry = config.grid.geometry();
    let centre = geometry.center_of(&landmark_grid_app::domains::route_map::GridPoint::new(13, 14));
    assert_eq!(centre, (14 * 80 + 40, 13 * 80 + 40));
}

#[tokio::test]
async fn test_environment_overrides_file_and_default() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[estimator]\ndefault_speed_kmh = 12.0\nearth_radius_km = 2.0\n").unwrap();

    // only this test reads the speed through the layered loader
    std::env::set_var("LANDMARK_GRID__ESTIMATOR__DEFAULT_SPEED_KMH", "42.5");
    let from_file = Config::load(Some(&path)).await;
    let without_file = Config::load(None::<&str>).await;
    std::env::remove_var("LANDMARK_GRID__ESTIMATOR__DEFAULT_SPEED_KMH");

    let from_file = from_file.unwrap();
    assert_eq!(from_file.estimator.default_speed_kmh, 42.5);
    assert_eq!(from_file.estimator.earth_radius_km, 2.0);

    let without_file = without_file.unwrap();
    assert_eq!(without_file.estimator.default_speed_kmh, 42.5);
    assert_eq!(without_file.estimator.earth_radius_km, 6371.0);
}

#[tokio::test]
async fn test_from_file_reports_configuration_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[grid\nrows = ").unwrap();

    match Config::from_file(&path).await.unwrap_err() {
        ApplicationError::Configuration(e) => assert!(e.to_string().contains("parsing")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
    assert!(matches!(
        Config::from_file(dir.path().join("missing.toml")).await,
        Err(ApplicationError::Configuration(_))
    ));
}
