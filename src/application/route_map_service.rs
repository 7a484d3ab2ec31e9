// Route Map Service - entry points used by the map viewer
use crate::common::DomainResult;
use crate::domains::route_map::{
    rasterize, rasterize_polyline, DistanceResult, GeodesicEstimator, GridPath, GridPoint,
    NamedPoint, PathRenderer, PointRegistry,
};
use crate::domains::DynLogger;

pub struct RouteMapService {
    registry: PointRegistry,
    estimator: GeodesicEstimator,
    logger: DynLogger,
}

impl RouteMapService {
    pub fn new(registry: PointRegistry, estimator: GeodesicEstimator, logger: DynLogger) -> Self {
        Self { registry, estimator, logger }
    }

    pub fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    pub fn landmark_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Resolve both names, then rasterize the straight line between them.
    pub fn connect(&self, from_name: &str, to_name: &str) -> DomainResult<GridPath> {
        let (from, to) = self.resolve_pair(from_name, to_name)?;
        let path = rasterize(from.point, to.point);
        self.logger.info(&format!(
            "Connected {} {} -> {} {} through {} cells",
            from.name,
            from.point,
            to.name,
            to.point,
            path.len()
        ));
        Ok(path)
    }

    /// Connect a chain of landmarks. Every name is resolved before any segment is drawn.
    pub fn connect_via(&self, names: &[&str]) -> DomainResult<GridPath> {
        let waypoints = names
            .iter()
            .map(|name| self.lookup(name).map(|p| p.point))
            .collect::<DomainResult<Vec<GridPoint>>>()?;
        let path = rasterize_polyline(&waypoints)?;
        self.logger.info(&format!(
            "Connected {} waypoints through {} cells",
            waypoints.len(),
            path.len()
        ));
        Ok(path)
    }

    pub fn estimate(&self, from_name: &str, to_name: &str, speed: f64) -> DomainResult<DistanceResult> {
        let (from, to) = self.resolve_pair(from_name, to_name)?;
        let result = self.estimator.estimate(&from.point, &to.point, speed).map_err(|e| {
            self.logger.warn(&format!("Estimate {} -> {} rejected: {}", from.name, to.name, e));
            e
        })?;
        self.logger.info(&format!(
            "Estimated {} -> {}: {:.3} km, {:.3} h at {}",
            from.name, to.name, result.distance_km, result.time, speed
        ));
        Ok(result)
    }

    /// Connect two landmarks and hand the result to a renderer.
    pub fn render_connection(
        &self,
        from_name: &str,
        to_name: &str,
        renderer: &dyn PathRenderer,
    ) -> DomainResult<String> {
        let path = self.connect(from_name, to_name)?;
        renderer.render(self.registry.points(), &path)
    }

    fn resolve_pair(&self, from_name: &str, to_name: &str) -> DomainResult<(&NamedPoint, &NamedPoint)> {
        let from = self.lookup(from_name)?;
        let to = self.lookup(to_name)?;
        Ok((from, to))
    }

    fn lookup(&self, name: &str) -> DomainResult<&NamedPoint> {
        self.registry.find_by_name(name).map_err(|e| {
            self.logger.warn(&format!("Unknown landmark requested: {}", name));
            e
        })
    }
}
