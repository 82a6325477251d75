//! Country boundary features and map view computation.
//!
//! Boundaries arrive as a GeoJSON `FeatureCollection` whose feature `id` is
//! the ISO country code used by the dataset.

use crate::error::{DoomError, Result};
use crate::record::DisasterRecord;
use geojson::feature::Id;
use geojson::{Feature, FeatureCollection, GeoJson, Value};
use serde::Serialize;
use std::collections::BTreeSet;

/// Zoom level used by the impact map.
pub const DEFAULT_ZOOM: u8 = 4;

/// Parse boundary GeoJSON text into a feature collection.
pub fn parse_boundaries(text: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = text.parse()?;
    match geojson {
        GeoJson::FeatureCollection(fc) => {
            log::info!("geo: loaded {} boundary features", fc.features.len());
            Ok(fc)
        }
        _ => Err(DoomError::NotFeatureCollection),
    }
}

fn id_matches(feature: &Feature, country: &str) -> bool {
    match &feature.id {
        Some(Id::String(id)) => id == country,
        Some(Id::Number(n)) => n.to_string() == country,
        None => false,
    }
}

/// Restrict a collection to the features whose id equals `country`.
///
/// Several features may share an id; all of them are kept, in input order.
pub fn boundary_for(collection: &FeatureCollection, country: &str) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: collection
            .features
            .iter()
            .filter(|f| id_matches(f, country))
            .cloned()
            .collect(),
        foreign_members: None,
    }
}

/// Geographic bounding box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    fn point(lng: f64, lat: f64) -> Self {
        Self {
            north: lat,
            south: lat,
            east: lng,
            west: lng,
        }
    }

    fn extend(&mut self, lng: f64, lat: f64) {
        self.north = self.north.max(lat);
        self.south = self.south.min(lat);
        self.east = self.east.max(lng);
        self.west = self.west.min(lng);
    }

    /// `[lat, lng]` of the box midpoint.
    pub fn center(&self) -> [f64; 2] {
        [
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        ]
    }
}

/// Center and zoom handed to the map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    /// `[lat, lng]`
    pub center: [f64; 2],
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: DEFAULT_ZOOM,
        }
    }
}

struct BoundsBuilder {
    bounds: Option<Bounds>,
}

impl BoundsBuilder {
    /// Returns false on a malformed position.
    fn position(&mut self, position: &[f64]) -> bool {
        let (lng, lat) = match position {
            [lng, lat, ..] if lng.is_finite() && lat.is_finite() => (*lng, *lat),
            _ => return false,
        };
        match &mut self.bounds {
            Some(b) => b.extend(lng, lat),
            None => self.bounds = Some(Bounds::point(lng, lat)),
        }
        true
    }

    fn positions<'a>(&mut self, positions: impl IntoIterator<Item = &'a Vec<f64>>) -> bool {
        positions.into_iter().all(|p| self.position(p))
    }

    fn value(&mut self, value: &Value) -> bool {
        match value {
            Value::Point(p) => self.position(p),
            Value::MultiPoint(ps) | Value::LineString(ps) => self.positions(ps),
            Value::MultiLineString(lines) | Value::Polygon(lines) => {
                lines.iter().all(|line| self.positions(line))
            }
            Value::MultiPolygon(polygons) => polygons
                .iter()
                .all(|rings| rings.iter().all(|ring| self.positions(ring))),
            Value::GeometryCollection(geometries) => {
                geometries.iter().all(|g| self.value(&g.value))
            }
        }
    }
}

/// Bounding box of every coordinate in the collection.
///
/// `None` for an empty collection, a collection without geometry, or any
/// malformed position.
pub fn bounds(collection: &FeatureCollection) -> Option<Bounds> {
    let mut builder = BoundsBuilder { bounds: None };
    for feature in &collection.features {
        if let Some(geometry) = &feature.geometry {
            if !builder.value(&geometry.value) {
                return None;
            }
        }
    }
    builder.bounds
}

/// Map view centered on the collection, or `fallback` when no bounds exist.
pub fn map_view(collection: &FeatureCollection, fallback: MapView) -> MapView {
    match bounds(collection) {
        Some(b) => MapView {
            center: b.center(),
            zoom: fallback.zoom,
        },
        None => {
            log::warn!(
                "geo: no usable bounds in {} features, using default center",
                collection.features.len()
            );
            fallback
        }
    }
}

/// A country choice for the country selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryOption {
    pub code: String,
    pub label: String,
}

fn feature_name(collection: &FeatureCollection, code: &str) -> Option<String> {
    collection
        .features
        .iter()
        .find(|f| id_matches(f, code))
        .and_then(|f| f.property("name"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

/// Countries present in the dataset, labelled from boundary names when known.
pub fn country_options(
    records: &[DisasterRecord],
    boundaries: Option<&FeatureCollection>,
) -> Vec<CountryOption> {
    let codes: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let mut options: Vec<CountryOption> = codes
        .into_iter()
        .map(|code| CountryOption {
            code: code.to_string(),
            label: boundaries
                .and_then(|b| feature_name(b, code))
                .unwrap_or_else(|| code.to_string()),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.code.cmp(&b.code)));
    options
}
