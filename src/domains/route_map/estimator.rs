use crate::common::{DomainError, DomainResult};
use crate::domains::route_map::types::{DistanceResult, GridPoint};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance and travel time between two cells.
///
/// Row and column are read literally as latitude and longitude in degrees.
/// On a 20x20 grid the figures are illustrative only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicEstimator {
    pub earth_radius_km: f64,
}

impl GeodesicEstimator {
    pub fn new(earth_radius_km: f64) -> Self {
        Self { earth_radius_km }
    }

    pub fn estimate(&self, from: &GridPoint, to: &GridPoint, speed: f64) -> DomainResult<DistanceResult> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(DomainError::InvalidArgument {
                reason: format!("Speed must be a positive number, got {}", speed),
            });
        }
        let distance_km = self.distance_km(from, to);
        Ok(DistanceResult {
            distance_km,
            time: distance_km / speed,
        })
    }

    /// Haversine distance. The deltas are taken as absolute values so that
    /// swapping the endpoints yields a bit-identical result.
    pub fn distance_km(&self, from: &GridPoint, to: &GridPoint) -> f64 {
        if from == to {
            return 0.0;
        }
        let lat1 = (from.row as f64).to_radians();
        let lon1 = (from.col as f64).to_radians();
        let lat2 = (to.row as f64).to_radians();
        let lon2 = (to.col as f64).to_radians();

        let d_lat = (lat2 - lat1).abs();
        let d_lon = (lon2 - lon1).abs();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        self.earth_radius_km * c
    }
}

impl Default for GeodesicEstimator {
    fn default() -> Self {
        Self::new(EARTH_RADIUS_KM)
    }
}

/// Estimate with the default earth radius.
pub fn estimate(from: &GridPoint, to: &GridPoint, speed: f64) -> DomainResult<DistanceResult> {
    GeodesicEstimator::default().estimate(from, to, speed)
}
