use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::common::DomainResult;
use crate::domains::route_map::ports::PathRenderer;
use crate::domains::route_map::types::{CellGeometry, GridPath, GridPoint, NamedPoint};

/// Exports landmarks as Point features and the path as a LineString.
/// Positions are `[col, row]` so that x runs along columns; each landmark also
/// carries the pixel centre of its cell for the map overlay.
pub struct GeoJsonRenderer {
    geometry: CellGeometry,
}

fn position(point: &GridPoint) -> Vec<f64> {
    vec![point.col as f64, point.row as f64]
}

fn feature(geometry: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(geometry)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

impl GeoJsonRenderer {
    pub fn new(geometry: CellGeometry) -> Self {
        Self { geometry }
    }

    pub fn to_feature_collection(&self, landmarks: &[NamedPoint], path: &GridPath) -> FeatureCollection {
        let mut features: Vec<Feature> = landmarks
            .iter()
            .map(|l| {
                let mut props = JsonObject::new();
                props.insert("kind".to_string(), json!("landmark"));
                props.insert("name".to_string(), json!(l.name));
                props.insert("row".to_string(), json!(l.point.row));
                props.insert("col".to_string(), json!(l.point.col));
                let (x, y) = self.geometry.center_of(&l.point);
                props.insert("pixel".to_string(), json!([x, y]));
                feature(Value::Point(position(&l.point)), props)
            })
            .collect();

        if !path.is_empty() {
            let mut props = JsonObject::new();
            props.insert("kind".to_string(), json!("path"));
            props.insert("cells".to_string(), json!(path.len()));
            // a LineString needs two positions
            let geometry = if path.len() == 1 {
                Value::Point(position(&path.cells[0]))
            } else {
                Value::LineString(path.iter().map(position).collect())
            };
            features.push(feature(geometry, props));
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

impl PathRenderer for GeoJsonRenderer {
    fn render(&self, landmarks: &[NamedPoint], path: &GridPath) -> DomainResult<String> {
        let collection = self.to_feature_collection(landmarks, path);
        Ok(serde_json::to_string(&collection)?)
    }
}
