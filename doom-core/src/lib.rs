//! Core types and logic for the DoomIndex disaster dashboard.
//!
//! This crate provides:
//! - `record`: typed disaster records and dataset CSV loading
//! - `filter`: available-years and record filtering over the in-memory dataset
//! - `selection`: the country / disaster type / year selection and search outcome
//! - `geo`: boundary feature filtering and map view computation
//! - `query`: wire types of the disaster query service
//! - `results`: generation-stamped search results and disaster references
//! - `supersede`: tickets for discarding superseded responses
//! - `client`: HTTP client for the query service (feature `api`)

pub mod error;
pub mod filter;
pub mod geo;
pub mod query;
pub mod record;
pub mod results;
pub mod selection;
pub mod supersede;

#[cfg(feature = "api")]
pub mod client;

pub use error::{DoomError, Result};
pub use record::{DisasterRecord, DisasterType};
pub use selection::{SearchOutcome, SearchResult, Selection};
