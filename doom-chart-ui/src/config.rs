//! Configuration values for the DoomIndex apps.
//!
//! Each app builds its config once in `main` and provides it through
//! `use_context_provider`; components read it with `use_context`.

use doom_core::geo::MapView;
use doom_core::record::DisasterType;
use serde::Serialize;

/// Where the third-party browser libraries are loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptSources {
    pub d3_js: String,
    pub leaflet_js: String,
    pub leaflet_css: String,
}

impl Default for ScriptSources {
    fn default() -> Self {
        Self {
            d3_js: "https://cdn.jsdelivr.net/npm/d3@7".to_string(),
            leaflet_js: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js".to_string(),
            leaflet_css: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css".to_string(),
        }
    }
}

/// Leaflet default marker images.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcons {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
}

impl Default for MarkerIcons {
    fn default() -> Self {
        let base = "https://unpkg.com/leaflet@1.9.4/dist/images";
        Self {
            icon_url: format!("{}/marker-icon.png", base),
            icon_retina_url: format!("{}/marker-icon-2x.png", base),
            shadow_url: format!("{}/marker-shadow.png", base),
        }
    }
}

/// Style of the country overlay polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub fill_color: String,
    pub weight: u32,
    pub opacity: f64,
    pub color: String,
    pub fill_opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            fill_color: "#ef233c".to_string(),
            weight: 2,
            opacity: 1.0,
            color: "white".to_string(),
            fill_opacity: 0.7,
        }
    }
}

/// Tile layer and overlay settings for the impact map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    /// Used when the boundary has no usable bounds.
    #[serde(skip)]
    pub fallback: MapView,
    pub overlay: OverlayStyle,
    pub icons: MarkerIcons,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            fallback: MapView::default(),
            overlay: OverlayStyle::default(),
            icons: MarkerIcons::default(),
        }
    }
}

/// Configuration of the selection dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Dataset CSV to fetch instead of the embedded one; a `.gz` suffix
    /// means gzip-compressed.
    pub dataset_url: Option<String>,
    /// Boundary GeoJSON to fetch instead of the embedded one.
    pub boundaries_url: Option<String>,
    /// Options of the disaster type selector, in display order.
    pub disaster_types: Vec<DisasterType>,
    pub map: MapConfig,
    pub scripts: ScriptSources,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_url: None,
            boundaries_url: None,
            disaster_types: DisasterType::ALL.to_vec(),
            map: MapConfig::default(),
            scripts: ScriptSources::default(),
        }
    }
}

/// Configuration of the civic response assistant.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub api_base_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_base_url: doom_core::client::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Base URL baked in at build time through `DOOMINDEX_API_BASE_URL`,
    /// else the local default.
    pub fn from_build_env() -> Self {
        match option_env!("DOOMINDEX_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self {
                api_base_url: url.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config_serializes_camel_case() {
        let json = serde_json::to_value(MapConfig::default()).unwrap();
        assert_eq!(json["overlay"]["fillColor"], "#ef233c");
        assert_eq!(json["overlay"]["fillOpacity"], 0.7);
        assert!(json["icons"]["shadowUrl"].as_str().unwrap().ends_with("marker-shadow.png"));
        assert!(json.get("fallback").is_none());
    }

    #[test]
    fn test_dashboard_lists_every_disaster_type() {
        let config = DashboardConfig::default();
        assert_eq!(config.disaster_types, DisasterType::ALL.to_vec());
        assert_eq!(config.map.fallback, MapView::default());
        // bundled data unless a URL is configured
        assert_eq!(config.dataset_url, None);
        assert_eq!(config.boundaries_url, None);
    }
}
