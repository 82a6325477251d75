//! DoomIndex dashboard
//!
//! The user picks a country, a disaster type and a year, then presses
//! Search. Matching records are summarized in a stats panel, the country
//! boundary is drawn on a Leaflet map, and a D3.js line chart shows the
//! deaths and affected population of that country and type over the years.
//!
//! Data flow:
//! 1. `build.rs` copies `data.csv` and `countries.geo.json` from `fixtures/`
//!    into `OUT_DIR`, and `include_str!` embeds them. When the config names
//!    a URL instead, that file is fetched on mount (gzip when it ends in `.gz`).
//! 2. The CSV is parsed into `DisasterRecord`s and the country options are
//!    derived from the records and the boundary names.
//! 3. Each search result triggers a re-render of the map and trend chart.

use doom_chart_ui::components::{
    ChartContainer, ChartHeader, CountrySelector, DisasterCards, DisasterTypeSelector,
    ErrorDisplay, LoadingSpinner, SearchButton, StatsPanel, YearSelector,
};
use doom_chart_ui::config::{DashboardConfig, MapConfig};
use doom_chart_ui::js_bridge;
use doom_chart_ui::state::AppState;
use doom_core::geo::{self, MapView};
use doom_core::record::parse_dataset_csv;
use doom_data::summary::ImpactSummary;
use doom_data::trends::trend_series;
use dioxus::prelude::*;
use serde::Serialize;
use std::rc::Rc;

/// Disaster dataset used when no dataset URL is configured.
const DATASET_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/data.csv"));
/// Country boundaries used when no boundaries URL is configured.
const BOUNDARIES_GEOJSON: &str = include_str!(concat!(env!("OUT_DIR"), "/countries.geo.json"));

const MAP_ID: &str = "impact-map";
const TREND_ID: &str = "trend-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("doomindex-root"))
        .launch(App);
}

/// Options handed to `renderBoundaryMap`.
#[derive(Serialize)]
struct BoundaryMapOptions<'a> {
    #[serde(flatten)]
    map: &'a MapConfig,
    #[serde(flatten)]
    view: MapView,
}

/// Fetch `url` when configured, else hand back the embedded text.
async fn read_source(url: Option<&str>, embedded: &str) -> anyhow::Result<String> {
    match url {
        Some(url) => js_bridge::fetch_text(url).await,
        None => Ok(embedded.to_string()),
    }
}

async fn load_data(mut state: AppState, config: DashboardConfig) {
    let csv = match read_source(config.dataset_url.as_deref(), DATASET_CSV).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to fetch dataset: {:#}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load disaster data: {:#}", e)));
            state.loading.set(false);
            return;
        }
    };
    let records = match parse_dataset_csv(&csv) {
        Ok(records) => records,
        Err(e) => {
            log::error!("Failed to parse dataset: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load disaster data: {}", e)));
            state.loading.set(false);
            return;
        }
    };

    // The dashboard stays usable without boundaries; the map falls back.
    let boundaries = match read_source(config.boundaries_url.as_deref(), BOUNDARIES_GEOJSON).await {
        Ok(text) => match geo::parse_boundaries(&text) {
            Ok(fc) => Some(Rc::new(fc)),
            Err(e) => {
                log::warn!("Failed to parse boundaries: {}", e);
                None
            }
        },
        Err(e) => {
            log::warn!("Failed to fetch boundaries: {:#}", e);
            None
        }
    };

    state
        .countries
        .set(geo::country_options(&records, boundaries.as_deref()));
    state.boundaries.set(boundaries);
    state.records.set(Rc::from(records));
    state.loading.set(false);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(DashboardConfig::default);
    let state = use_context_provider(AppState::new);

    use_hook(|| {
        let config = config.clone();
        spawn(load_data(state, config));
    });

    // Re-render the map and the trend chart for every new result
    use_effect(move || {
        let Some(result) = (state.result)() else {
            js_bridge::destroy_chart(MAP_ID);
            js_bridge::destroy_chart(TREND_ID);
            return;
        };
        let config = config.clone();
        js_bridge::init_charts(&config.scripts);

        let geojson = match serde_json::to_string(&result.boundary) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize boundary: {}", e);
                return;
            }
        };
        let map_options = BoundaryMapOptions {
            map: &config.map,
            view: result.view,
        };
        let map_json = serde_json::to_string(&map_options).unwrap_or_default();
        js_bridge::render_boundary_map(MAP_ID, &geojson, &map_json);

        let Some(first) = result.records.first() else {
            return;
        };
        let series = trend_series(&state.records.read(), &first.country, &first.disaster_type);
        let data_json = serde_json::to_string(&series).unwrap_or_default();
        let trend_config = serde_json::to_string(&serde_json::json!({
            "highlightYear": first.year,
            "deathsColor": "#ef233c",
            "affectedColor": "#2b2d42",
        }))
        .unwrap_or_default();
        log::info!("rendering trends with {} points", series.len());
        js_bridge::render_trend_chart(TREND_ID, &data_json, &trend_config);
    });

    let summary = state
        .result
        .read()
        .as_ref()
        .and_then(|r| ImpactSummary::from_records(&r.records));
    let has_result = state.result.read().is_some();

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #edf2f4; color: #2b2d42;",

            header {
                style: "background: #2b2d42; color: #edf2f4; padding: 16px 32px;",
                h1 { style: "margin: 0; font-weight: bold;", "DoomIndex" }
            }

            main {
                style: "flex-grow: 1; padding: 32px; display: flex; flex-direction: column; gap: 32px;",

                section {
                    h2 { style: "margin: 0 0 8px 0;", "Welcome to DoomIndex" }
                    p {
                        style: "margin: 0 0 24px 0; color: #8d99ae;",
                        "Explore the human and economic impact of natural disasters by country, type and year."
                    }
                    DisasterCards {}
                }

                if (state.loading)() {
                    LoadingSpinner { message: "Loading disaster data...".to_string() }
                } else {
                    section {
                        ChartHeader {
                            title: "Search Disaster Data".to_string(),
                            caption: "Pick a country and disaster type, then a year.".to_string(),
                        }
                        div {
                            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; align-items: end;",
                            CountrySelector {}
                            DisasterTypeSelector {}
                            YearSelector {}
                            SearchButton {}
                        }
                    }
                }

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                }

                if has_result {
                    section {
                        style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",
                        ChartContainer { id: MAP_ID.to_string(), height: 400 }
                        StatsPanel { summary }
                    }
                    section {
                        ChartHeader {
                            title: "Historical Trends".to_string(),
                            caption: "Deaths and affected population per year".to_string(),
                        }
                        ChartContainer { id: TREND_ID.to_string(), height: 300 }
                    }
                }
            }

            footer {
                style: "background: #2b2d42; color: #edf2f4; padding: 16px 32px; text-align: center; font-size: 14px;",
                "Contact: info@doomindex.com | © 2024 DoomIndex. All Rights Reserved."
            }
        }
    }
}
