//! GeoJSON boundary reading.

use std::{collections::HashMap, path::Path};

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;

/// District geometries keyed by (delegation id, district id), parsed on lookup.
#[derive(Debug, Default)]
pub(crate) struct BoundaryFeatures {
    geometries: HashMap<(String, String), Value>,
}

impl BoundaryFeatures {
    #[inline] pub fn len(&self) -> usize { self.geometries.len() }

    /// Boundary of one district. Fails if no feature carries both ids, or if its geometry is
    /// not a Polygon or MultiPolygon.
    pub fn boundary(&self, delegation_id: &str, district_id: &str) -> Result<MultiPolygon<f64>> {
        let geometry = self.geometries.get(&(delegation_id.to_string(), district_id.to_string()))
            .ok_or_else(|| anyhow!("[io::geojson::read] no boundary feature for delegation '{delegation_id}', district '{district_id}'"))?;
        parse_geometry(geometry)
    }
}

/// Reads a FeatureCollection from `path`, indexing features by two identifier properties.
pub(crate) fn read_boundaries(path: &Path, delegation_key: &str, district_key: &str) -> Result<BoundaryFeatures> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("[io::geojson::read] Failed to read GeoJSON file: {}", path.display()))?;
    read_boundaries_bytes(&bytes, delegation_key, district_key)
        .with_context(|| format!("[io::geojson::read] Failed to load boundaries from {:?}", path))
}

/// Parses a FeatureCollection, indexing features by two identifier properties.
/// Features lacking either property are skipped; for duplicate ids the first feature wins.
pub(crate) fn read_boundaries_bytes(bytes: &[u8], delegation_key: &str, district_key: &str) -> Result<BoundaryFeatures> {
    let value: Value = serde_json::from_slice(bytes).context("[io::geojson::read] Failed to parse GeoJSON")?;
    let features = value["features"].as_array()
        .ok_or_else(|| anyhow!("[io::geojson::read] expected a FeatureCollection with a 'features' array"))?;

    let mut geometries = HashMap::with_capacity(features.len());
    for (i, feature) in features.iter().enumerate() {
        let properties = &feature["properties"];
        let (Some(delegation), Some(district)) = (
            property_text(&properties[delegation_key]),
            property_text(&properties[district_key]),
        ) else {
            tracing::debug!("[io::geojson::read] feature {i} has no '{delegation_key}'/'{district_key}' properties, skipping");
            continue;
        };

        if geometries.contains_key(&(delegation.clone(), district.clone())) {
            tracing::warn!("[io::geojson::read] duplicate boundary for delegation '{delegation}', district '{district}'; keeping the first");
            continue;
        }
        geometries.insert((delegation, district), feature["geometry"].clone());
    }

    Ok(BoundaryFeatures { geometries })
}

/// Identifier property as text. Numbers match by their decimal form.
fn property_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Convert a Polygon or MultiPolygon geometry object.
fn parse_geometry(geometry: &Value) -> Result<MultiPolygon<f64>> {
    let coords = geometry["coordinates"].as_array();
    match (geometry["type"].as_str(), coords) {
        (Some("Polygon"), Some(rings)) => Ok(MultiPolygon(vec![parse_polygon_coords(rings)?])),
        (Some("MultiPolygon"), Some(polygons)) => polygons.iter()
            .map(|polygon| {
                let rings = polygon.as_array()
                    .ok_or_else(|| anyhow!("[io::geojson::read] Invalid MultiPolygon: polygon is not an array"))?;
                parse_polygon_coords(rings)
            })
            .collect::<Result<Vec<_>>>()
            .map(MultiPolygon),
        (Some(other), _) => bail!("[io::geojson::read] unsupported geometry type '{other}', expected Polygon or MultiPolygon"),
        (None, _) => bail!("[io::geojson::read] feature has no geometry"),
    }
}

/// Parse Polygon coordinates: exterior ring first, then holes.
fn parse_polygon_coords(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        let ring = ring.as_array()
            .ok_or_else(|| anyhow!("[io::geojson::read] Invalid Polygon: ring is not an array"))?;
        parse_ring_coords(ring)
    });
    let exterior = rings.next()
        .ok_or_else(|| anyhow!("[io::geojson::read] Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON coordinates: [[x, y], [x, y], ...].
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = coords.iter()
        .map(|pair| {
            let x = pair[0].as_f64()
                .ok_or_else(|| anyhow!("[io::geojson::read] Invalid coordinate: x must be a number"))?;
            let y = pair[1].as_f64()
                .ok_or_else(|| anyhow!("[io::geojson::read] Invalid coordinate: y must be a number"))?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    // Ensure ring is closed (first point == last point)
    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
