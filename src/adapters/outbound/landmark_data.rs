use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{DomainError, DomainResult};
use crate::domains::route_map::ports::PointSource;
use crate::domains::route_map::types::NamedPoint;

/// One entry of a seed file: `{"row": 13, "col": 14, "name": "Senate House"}`.
#[derive(Debug, Deserialize)]
struct SeedEntry {
    row: i32,
    col: i32,
    name: String,
}

/// Reads landmark seed lists (JSON arrays) from a base directory.
pub struct FilesystemPointSource {
    base: PathBuf,
}

impl FilesystemPointSource {
    /// `base` wins; otherwise LANDMARK_GRID_DATA_DIR, then ./resources/landmarks.
    pub fn new(base: Option<PathBuf>) -> Self {
        let base = base.unwrap_or_else(resolve_data_dir);
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

pub fn resolve_data_dir() -> PathBuf {
    if let Ok(v) = env::var("LANDMARK_GRID_DATA_DIR") {
        return PathBuf::from(v);
    }
    PathBuf::from("resources/landmarks")
}

/// Load a seed file by path; relative paths resolve against the working directory.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> DomainResult<Vec<NamedPoint>> {
    let path = path.as_ref();
    let name = path.file_name().ok_or_else(|| DomainError::InvalidArgument {
        reason: format!("Seed path {} does not name a file", path.display()),
    })?;
    let base = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    FilesystemPointSource::new(Some(base)).load_points(&name.to_string_lossy())
}

/// Parse a JSON seed list.
pub fn parse_points(json: &str) -> DomainResult<Vec<NamedPoint>> {
    let entries: Vec<SeedEntry> = serde_json::from_str(json)?;
    Ok(entries
        .into_iter()
        .map(|e| NamedPoint::new(e.row, e.col, e.name))
        .collect())
}

impl PointSource for FilesystemPointSource {
    fn load_points(&self, name: &str) -> DomainResult<Vec<NamedPoint>> {
        let p = self.base.join(name);
        let s = fs::read_to_string(&p)
            .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", p.display(), e)))?;
        parse_points(&s)
    }
}

/// The built-in campus list as a `PointSource`; the name is ignored.
pub struct BuiltinPointSource;

impl PointSource for BuiltinPointSource {
    fn load_points(&self, _name: &str) -> DomainResult<Vec<NamedPoint>> {
        Ok(crate::domains::route_map::campus_landmarks())
    }
}
