//! Dropdown selector for choosing a country.

use super::FIELD_STYLE;
use crate::state::AppState;
use dioxus::prelude::*;

/// Country dropdown selector.
/// Reads country options from AppState; picking a country clears the year.
#[component]
pub fn CountrySelector() -> Element {
    let mut state = use_context::<AppState>();
    let countries = state.countries.read().clone();
    let selected = state.selection.read().country().map(str::to_string);

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let country = (!value.is_empty()).then_some(value);
        state.selection.write().set_country(country);
    };

    rsx! {
        label {
            style: "display: block; font-weight: bold; color: #2b2d42;",
            "Country"
            select {
                id: "country-select",
                style: "{FIELD_STYLE}",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select a country"
                }
                for country in countries.iter() {
                    option {
                        value: "{country.code}",
                        selected: selected.as_deref() == Some(country.code.as_str()),
                        "{country.label}"
                    }
                }
            }
        }
    }
}
