//! Dropdown selector for the year, limited to years with records.

use super::FIELD_STYLE;
use crate::state::AppState;
use dioxus::prelude::*;

/// Hint under the year selector.
pub fn year_helper_text(can_pick_year: bool, years_available: usize) -> &'static str {
    if !can_pick_year {
        "Select country and disaster type first"
    } else if years_available == 0 {
        "No years available"
    } else {
        ""
    }
}

/// Year dropdown, disabled until both country and disaster type are chosen.
/// Options are recomputed from the dataset on every render.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let records = state.records.read().clone();
    let selection = state.selection.read().clone();
    let years = selection.available_years(&records);
    let can_pick = selection.can_pick_year();
    let helper = year_helper_text(can_pick, years.len());
    let selected = selection.year();

    let on_change = move |evt: Event<FormData>| {
        let year = evt.value().parse::<i32>().ok();
        state.selection.write().set_year(year);
    };

    rsx! {
        label {
            style: "display: block; font-weight: bold; color: #2b2d42;",
            "Year"
            select {
                id: "year-select",
                style: "{FIELD_STYLE}",
                disabled: !can_pick,
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select a year"
                }
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: selected == Some(*year),
                        "{year}"
                    }
                }
            }
            if !helper.is_empty() {
                span {
                    style: "display: block; font-size: 12px; font-weight: normal; color: #8d99ae; margin-top: 4px;",
                    "{helper}"
                }
            }
        }
    }
}
