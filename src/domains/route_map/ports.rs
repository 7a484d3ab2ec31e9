use crate::common::DomainResult;
use crate::domains::route_map::types::{GridPath, NamedPoint};

/// Port the route map domain depends on for its seed landmarks.
/// Adapters provide filesystem-backed or built-in lists.
pub trait PointSource: Send + Sync {
    fn load_points(&self, name: &str) -> DomainResult<Vec<NamedPoint>>;
}

/// Port for the drawing collaborator: turns landmarks and a rasterized path into output.
pub trait PathRenderer: Send + Sync {
    fn render(&self, landmarks: &[NamedPoint], path: &GridPath) -> DomainResult<String>;
}
