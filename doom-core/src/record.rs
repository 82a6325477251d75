//! Disaster records and dataset loading.
//!
//! The dataset is a CSV export with a header row. Only a handful of its
//! columns are read; every other column is ignored.
//!
//! ```text
//! ISO,Start Year,Disaster Type,Total Deaths,Total Affected,Total Damages ('000 US$)
//! USA,2020,Flood,5,1200,35000
//! ```

use crate::error::{DoomError, Result};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COLUMN_COUNTRY: &str = "ISO";
pub const COLUMN_YEAR: &str = "Start Year";
pub const COLUMN_DISASTER_TYPE: &str = "Disaster Type";
pub const COLUMN_DEATHS: &str = "Total Deaths";
pub const COLUMN_AFFECTED: &str = "Total Affected";
pub const COLUMN_DAMAGES: &str = "Total Damages ('000 US$)";

const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_COUNTRY, COLUMN_YEAR, COLUMN_DISASTER_TYPE];

/// The fixed set of disaster types offered for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DisasterType {
    Drought,
    Earthquake,
    Epidemic,
    #[serde(rename = "Extreme Temperature")]
    ExtremeTemperature,
    Flood,
    Landslide,
    Storm,
    Wildfire,
}

impl DisasterType {
    pub const ALL: [DisasterType; 8] = [
        DisasterType::Drought,
        DisasterType::Earthquake,
        DisasterType::Epidemic,
        DisasterType::ExtremeTemperature,
        DisasterType::Flood,
        DisasterType::Landslide,
        DisasterType::Storm,
        DisasterType::Wildfire,
    ];

    /// Label as it appears in the dataset's `Disaster Type` column.
    pub fn label(&self) -> &'static str {
        match self {
            DisasterType::Drought => "Drought",
            DisasterType::Earthquake => "Earthquake",
            DisasterType::Epidemic => "Epidemic",
            DisasterType::ExtremeTemperature => "Extreme Temperature",
            DisasterType::Flood => "Flood",
            DisasterType::Landslide => "Landslide",
            DisasterType::Storm => "Storm",
            DisasterType::Wildfire => "Wildfire",
        }
    }

    /// One-line description shown on the disaster type cards.
    pub fn description(&self) -> &'static str {
        match self {
            DisasterType::Drought => "Prolonged period of insufficient rainfall.",
            DisasterType::Earthquake => "Sudden shaking of the ground.",
            DisasterType::Epidemic => "Widespread occurrence of an infectious disease.",
            DisasterType::ExtremeTemperature => "Unusual and severe weather conditions.",
            DisasterType::Flood => "Overflow of water submerging land.",
            DisasterType::Landslide => "Earth sliding down a slope.",
            DisasterType::Storm => "Violent disturbance of the atmosphere.",
            DisasterType::Wildfire => "Uncontrolled fires in forests or grasslands.",
        }
    }

    /// Card image path, relative to the site root.
    pub fn image_path(&self) -> String {
        format!("/disasterImages/{}.png", self.label().to_lowercase())
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisasterType {
    type Err = DoomError;

    fn from_str(s: &str) -> Result<Self> {
        DisasterType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| DoomError::UnknownDisasterType(s.to_string()))
    }
}

/// One historical disaster event.
///
/// `disaster_type` is kept as the raw label so that rows with types outside
/// [`DisasterType::ALL`] survive loading; they never match a selector option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterRecord {
    /// ISO country code, matching boundary feature ids.
    pub country: String,
    /// Calendar year the event started.
    pub year: i32,
    pub disaster_type: String,
    pub total_deaths: u64,
    pub affected_population: u64,
    /// Economic loss in thousands of US$.
    pub economic_loss: f64,
}

impl DisasterRecord {
    /// Exact, case-sensitive match on country and disaster type.
    pub fn is_of(&self, country: &str, disaster_type: &str) -> bool {
        self.country == country && self.disaster_type == disaster_type
    }

    pub fn matches(&self, country: &str, disaster_type: &str, year: i32) -> bool {
        self.year == year && self.is_of(country, disaster_type)
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "ISO", default)]
    country: Option<String>,
    #[serde(rename = "Start Year", default, deserialize_with = "csv::invalid_option")]
    year: Option<f64>,
    #[serde(rename = "Disaster Type", default)]
    disaster_type: Option<String>,
    #[serde(rename = "Total Deaths", default, deserialize_with = "csv::invalid_option")]
    total_deaths: Option<f64>,
    #[serde(rename = "Total Affected", default, deserialize_with = "csv::invalid_option")]
    affected: Option<f64>,
    #[serde(
        rename = "Total Damages ('000 US$)",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    damages: Option<f64>,
}

fn to_count(value: Option<f64>) -> u64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    }
}

fn to_amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

impl DatasetRow {
    fn into_record(self) -> Option<DisasterRecord> {
        let country = self.country.filter(|c| !c.is_empty())?;
        let year = self.year.filter(|y| y.is_finite() && y.fract() == 0.0)? as i32;
        let disaster_type = self.disaster_type.filter(|t| !t.is_empty())?;
        Some(DisasterRecord {
            country,
            year,
            disaster_type,
            total_deaths: to_count(self.total_deaths),
            affected_population: to_count(self.affected),
            economic_loss: to_amount(self.damages),
        })
    }
}

/// Parse the disaster dataset CSV into records, preserving row order.
///
/// Rows without a country, a whole-number start year or a disaster type are
/// skipped. Missing or non-numeric impact figures load as zero.
pub fn parse_dataset_csv(csv_data: &str) -> Result<Vec<DisasterRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DoomError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0u32;
    for row in rdr.deserialize::<DatasetRow>() {
        match row?.into_record() {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    log::info!(
        "dataset: loaded {} records, skipped {} incomplete rows",
        records.len(),
        skipped
    );
    if skipped > 0 {
        log::warn!("dataset: {} rows lacked country, year or type", skipped);
    }
    Ok(records)
}
