/// Error types for the DoomIndex core library
use thiserror::Error;

/// Main error type for DoomIndex operations
#[derive(Error, Debug)]
pub enum DoomError {
    /// Failed to parse the disaster dataset
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset header lacks a required column
    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    /// Failed to parse boundary data
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Boundary data parsed, but is not a feature collection
    #[error("Boundary data is not a FeatureCollection")]
    NotFeatureCollection,

    /// Label outside the fixed disaster type set
    #[error("Unknown disaster type: {0}")]
    UnknownDisasterType(String),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The query service answered with a non-success status
    #[error("Failed to fetch {what}: {status} {reason}")]
    Status {
        what: &'static str,
        status: u16,
        reason: String,
    },

    /// The query service answered with a body we could not decode
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A disaster reference outlived the search results it was taken from
    #[error("Disaster reference is stale: the search results have changed")]
    StaleReference,
}

/// Type alias for Results using DoomError
pub type Result<T> = std::result::Result<T, DoomError>;
