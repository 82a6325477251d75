//! Select list over the current search results.

use dioxus::prelude::*;
use doom_core::query::SearchHit;

/// Lists each hit as `"{Year} - {Country} - {Disaster Type}"`.
/// Emits the picked index, or `None` for the placeholder.
#[component]
pub fn ResultPicker(hits: Vec<SearchHit>, on_pick: EventHandler<Option<usize>>) -> Element {
    if hits.is_empty() {
        return rsx! {};
    }
    let labels: Vec<String> = hits.iter().map(SearchHit::label).collect();

    rsx! {
        select {
            style: "width: 100%; margin-top: 16px; padding: 16px; border-radius: 8px; border: 1px solid #d1d5db;",
            onchange: move |evt: Event<FormData>| on_pick.call(evt.value().parse::<usize>().ok()),
            option { value: "", "Select a disaster" }
            for (index, label) in labels.into_iter().enumerate() {
                option {
                    key: "{index}",
                    value: "{index}",
                    "{label}"
                }
            }
        }
    }
}
