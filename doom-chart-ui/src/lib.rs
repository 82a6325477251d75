//! Shared Dioxus components and JS bridge for DoomIndex apps.
//!
//! This crate provides:
//! - `config`: explicit configuration values handed to the apps at launch
//! - `js_bridge`: Rust wrappers for the D3.js trend chart and Leaflet map,
//!   plus runtime fetching of the dataset and boundary files
//! - `state`: reactive state structs with Dioxus Signals
//! - `components`: reusable RSX components (selectors, panels, tabs, etc.)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod state;
