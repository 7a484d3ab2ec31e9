use serde::{Deserialize, Serialize};
use std::path::Path;
use anyhow::Context;

use crate::common::ApplicationResult;

use crate::domains::route_map::{CellGeometry, GridBounds};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub estimator: EstimatorConfig,
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub cell_width: i32,
    pub cell_height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub earth_radius_km: f64,
    pub default_speed_kmh: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON file of `{row, col, name}` entries. Relative paths resolve against
    /// the working directory. The built-in campus list is used when unset.
    pub points_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 20,
            cell_width: 80,
            cell_height: 80,
        }
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: 6371.0,
            default_speed_kmh: 5.0,
        }
    }
}

impl GridConfig {
    pub fn bounds(&self) -> GridBounds {
        GridBounds {
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn geometry(&self) -> CellGeometry {
        CellGeometry {
            cell_width: self.cell_width,
            cell_height: self.cell_height,
        }
    }
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> ApplicationResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Defaults, then the TOML file if it exists, then `LANDMARK_GRID__SECTION__KEY` variables.
    pub async fn load<P: AsRef<Path>>(path: Option<P>) -> ApplicationResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            let path = path.as_ref();
            if tokio::fs::try_exists(path).await.unwrap_or(false) {
                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("reading {}", path.display()))?;
                builder = builder.add_source(config::File::from_str(&content, config::FileFormat::Toml));
            }
        }
        let settings = builder
            .add_source(config::Environment::with_prefix("LANDMARK_GRID").separator("__"))
            .build()
            .context("building layered configuration")?;
        let config: Config = settings
            .try_deserialize()
            .context("deserializing layered configuration")?;
        Ok(config)
    }
}
