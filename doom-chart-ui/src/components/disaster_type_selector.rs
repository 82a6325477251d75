//! Dropdown selector for choosing a disaster type.

use super::FIELD_STYLE;
use crate::config::DashboardConfig;
use crate::state::AppState;
use dioxus::prelude::*;
use doom_core::record::DisasterType;

/// Disaster type dropdown; options come from the dashboard config.
/// Picking a type clears the year.
#[component]
pub fn DisasterTypeSelector() -> Element {
    let mut state = use_context::<AppState>();
    let config = use_context::<DashboardConfig>();
    let selected = state.selection.read().disaster_type();
    let options: Vec<(&'static str, bool)> = config
        .disaster_types
        .iter()
        .map(|t| (t.label(), selected == Some(*t)))
        .collect();

    let on_change = move |evt: Event<FormData>| {
        let disaster_type = evt.value().parse::<DisasterType>().ok();
        state.selection.write().set_disaster_type(disaster_type);
    };

    rsx! {
        label {
            style: "display: block; font-weight: bold; color: #2b2d42;",
            "Disaster Type"
            select {
                id: "disaster-type-select",
                style: "{FIELD_STYLE}",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select a disaster type"
                }
                for (label, is_selected) in options {
                    option {
                        value: "{label}",
                        selected: is_selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
