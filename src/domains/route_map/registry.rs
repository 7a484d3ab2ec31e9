use crate::common::{DomainError, DomainResult};
use crate::domains::route_map::types::{GridBounds, NamedPoint};

/// Owns the landmarks shown on the grid.
///
/// Lookups are a linear scan in insertion order. Landmark sets are small
/// (tens of entries); a keyed map can replace the `Vec` without changing
/// the public methods.
#[derive(Debug, Clone, Default)]
pub struct PointRegistry {
    bounds: GridBounds,
    points: Vec<NamedPoint>,
}

impl PointRegistry {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            points: Vec::new(),
        }
    }

    /// Build a registry from a seed list, rejecting the first invalid entry.
    pub fn from_points(bounds: GridBounds, points: Vec<NamedPoint>) -> DomainResult<Self> {
        let mut registry = Self::new(bounds);
        for point in points {
            registry.add(point)?;
        }
        Ok(registry)
    }

    /// Append a landmark. Name uniqueness is left to the caller.
    pub fn add(&mut self, point: NamedPoint) -> DomainResult<()> {
        if point.name.trim().is_empty() {
            return Err(DomainError::InvalidArgument {
                reason: "Landmark name must not be empty".to_string(),
            });
        }
        if !self.bounds.contains(&point.point) {
            return Err(DomainError::InvalidArgument {
                reason: format!(
                    "Landmark {} at {} is outside the {}x{} grid",
                    point.name, point.point, self.bounds.rows, self.bounds.cols
                ),
            });
        }
        self.points.push(point);
        Ok(())
    }

    /// Exact, case-sensitive lookup; the first match wins.
    pub fn find_by_name(&self, name: &str) -> DomainResult<&NamedPoint> {
        self.points
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| DomainError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.points.iter().any(|p| p.name == name)
    }

    /// Names in insertion order, for populating selectors.
    pub fn names(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn points(&self) -> &[NamedPoint] {
        &self.points
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
