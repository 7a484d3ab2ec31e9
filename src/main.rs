use landmark_grid_app::Config;
use tracing::{error, info, warn};

use landmark_grid_app::adapters::outbound::{
    init_configured_logger, load_seed_file, AsciiGridRenderer, BuiltinPointSource,
};
use landmark_grid_app::application::RouteMapService;
use landmark_grid_app::common::{ApplicationResult, DomainError};
use landmark_grid_app::domains::route_map::{GeodesicEstimator, PointRegistry, PointSource};
use landmark_grid_app::domains::DynLogger;

const LOG_BUFFER: usize = 256;

#[tokio::main]
async fn main() -> ApplicationResult<()> {
    // Without tracing-log's LogTracer, so the `log` facade stays free for fast_log.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = Config::load(Some("config.toml")).await?;
    info!("Grid {}x{}", config.grid.rows, config.grid.cols);

    let logger: DynLogger = init_configured_logger(&config.logging, LOG_BUFFER);

    let points = match &config.seed.points_file {
        Some(file) => load_seed_file(file)?,
        None => BuiltinPointSource.load_points("campus")?,
    };
    let registry = PointRegistry::from_points(config.grid.bounds(), points)?;
    info!("Loaded {} landmarks", registry.len());

    let service = RouteMapService::new(
        registry,
        GeodesicEstimator::new(config.estimator.earth_radius_km),
        logger,
    );

    let (from, to) = match (args.first(), args.get(1)) {
        (Some(from), Some(to)) => (from.as_str(), to.as_str()),
        _ => {
            println!("Landmarks:");
            for name in service.landmark_names() {
                println!("  {}", name);
            }
            println!("Usage: landmark-grid-app <FROM> <TO> [SPEED_KMH]");
            return Ok(());
        }
    };

    let speed = match args.get(2) {
        Some(s) => s.parse::<f64>().map_err(|e| DomainError::InvalidArgument {
            reason: format!("Speed {:?} is not a number: {}", s, e),
        })?,
        None => config.estimator.default_speed_kmh,
    };

    let renderer = AsciiGridRenderer::new(config.grid.bounds());
    match service.render_connection(from, to, &renderer) {
        Ok(grid) => print!("{}", grid),
        Err(e) => {
            error!("Cannot connect {} -> {}: {}", from, to, e);
            return Ok(());
        }
    }

    match service.estimate(from, to, speed) {
        Ok(result) => println!(
            "Distance: {:.2} km, time: {:.2} h at {} km/h",
            result.distance_km, result.time, speed
        ),
        Err(e) => warn!("No estimate: {}", e),
    }

    // let the buffered logger drain before the runtime shuts down
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    Ok(())
}
