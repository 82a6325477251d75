//! Offline queries over a dataset CSV and a boundary GeoJSON file.

use anyhow::Context;
use doom_core::geo::{self, MapView};
use doom_core::record::{self, DisasterRecord, DisasterType};
use doom_core::selection::NO_DATA_MESSAGE;
use doom_core::filter;
use doom_data::summary::ImpactSummary;
use geojson::FeatureCollection;
use log::info;
use serde::Serialize;

pub fn load_records(path: &str) -> anyhow::Result<Vec<DisasterRecord>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let records = record::parse_dataset_csv(&text)
        .with_context(|| format!("failed to parse dataset {}", path))?;
    info!("Loaded {} records from {}", records.len(), path);
    Ok(records)
}

pub fn load_boundaries(path: &str) -> anyhow::Result<FeatureCollection> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    let boundaries = geo::parse_boundaries(&text)
        .with_context(|| format!("failed to parse boundaries {}", path))?;
    info!("Loaded {} boundary features from {}", boundaries.features.len(), path);
    Ok(boundaries)
}

pub fn years(records: &[DisasterRecord], country: &str, disaster_type: DisasterType) -> Vec<i32> {
    filter::available_years(records, Some(country), Some(disaster_type.label()))
}

/// Matching records; an empty match is an error carrying the "no data" notice.
pub fn disasters(
    records: &[DisasterRecord],
    country: &str,
    disaster_type: DisasterType,
    year: i32,
) -> anyhow::Result<Vec<DisasterRecord>> {
    let found = filter::filter_records(records, country, disaster_type.label(), year);
    if found.is_empty() {
        anyhow::bail!(NO_DATA_MESSAGE);
    }
    Ok(found)
}

pub fn summary(
    records: &[DisasterRecord],
    country: &str,
    disaster_type: DisasterType,
    year: i32,
) -> anyhow::Result<ImpactSummary> {
    let found = disasters(records, country, disaster_type, year)?;
    ImpactSummary::from_records(&found).context(NO_DATA_MESSAGE)
}

/// Boundary features of a country with the view the map would open at.
#[derive(Debug, Serialize)]
pub struct BoundaryOutput {
    pub country: String,
    pub boundary: FeatureCollection,
    pub view: MapView,
}

pub fn boundary(boundaries: &FeatureCollection, country: &str) -> BoundaryOutput {
    let country = country.to_uppercase();
    let boundary = geo::boundary_for(boundaries, &country);
    let view = geo::map_view(&boundary, MapView::default());
    info!("{} boundary features for {}", boundary.features.len(), country);
    BoundaryOutput {
        country,
        boundary,
        view,
    }
}
